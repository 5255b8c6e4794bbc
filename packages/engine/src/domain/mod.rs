//! Domain types - particle state, run constants, errors.

pub mod config;
pub mod error;
pub mod particle;
