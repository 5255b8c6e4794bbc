//! Systems - per-step physics over the particle store.

pub mod physics;
