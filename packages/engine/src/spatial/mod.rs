//! Spatial decomposition - cutoff-sized cell lists.

pub mod grid;
