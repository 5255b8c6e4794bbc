//! Cellstep Engine - short-range particle stepping with cell lists
//!
//! Per step: bin particles into cutoff-sized cells, evaluate forces against
//! the 3x3 cell neighborhood only, then integrate with wall reflection.
//! Each phase runs data-parallel with Rayon when the `parallel` feature is on.
//!
//! Architecture:
//! - domain/      - Particle, SimConfig, SimError
//! - spatial/     - Cell grid (binning)
//! - systems/     - Forces, integration, partitions, diagnostics
//! - simulation/  - Step orchestration, perf stats, host facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths
pub use domain::config;
pub use domain::error;
pub use spatial::grid;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Browser hosts must build the Rayon pool from JS before the first step
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Cellstep engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{domain_size_for, SimConfig};
pub use domain::error::SimError;
pub use domain::particle::{Accel, Particle};
pub use simulation::{PerfStats, Simulation, World};
pub use spatial::grid::CellGrid;
