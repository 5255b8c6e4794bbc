//! Simulation - step orchestration over a caller-owned particle store
//!
//! Single responsibility: sequence the three phases of a step
//! - spatial/  builds the cell grid
//! - systems/  evaluates forces and integrates
//! - here      owns the step-scoped scratch, perf stats and the run constants
//!
//! The particle store itself is never owned here; the host passes it to
//! every call and keeps it between steps.

use crate::domain::config::SimConfig;
use crate::domain::error::Result;
use crate::domain::particle::Particle;
use crate::physics::NeighborStats;
use crate::spatial::grid::CellGrid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/scratch.rs"]
mod scratch;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;
use scratch::StepScratch;

/// The stepper. Holds everything that outlives one step except the particles.
pub struct Simulation {
    config: SimConfig,
    scratch: StepScratch,

    // State
    step_count: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation {
    /// Create a stepper for the given constants
    pub fn new(config: SimConfig) -> Result<Self> {
        init::create_simulation(config)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the run constants (validated first; unchanged on error)
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        settings::set_config(self, config)
    }

    /// Steps completed successfully so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// One-time setup hook. Nothing needs preparing; only `size` is checked.
    pub fn init(&mut self, particles: &mut [Particle], size: f64) -> Result<()> {
        init::init_particles(self, particles, size)
    }

    /// Advance every particle by one timestep, in place
    pub fn advance_step(&mut self, particles: &mut [Particle], size: f64) -> Result<()> {
        step::advance_step(self, particles, size)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Grid from the most recent step (positions before that step's move)
    pub fn grid(&self) -> &CellGrid {
        &self.scratch.grid
    }

    /// Separation statistics for the current positions.
    /// Rebuilds the scratch grid; the store is only read.
    pub fn neighbor_stats(&mut self, particles: &[Particle], size: f64) -> Result<NeighborStats> {
        self.scratch.grid.rebuild(particles, size, self.config.cutoff)?;
        Ok(crate::physics::neighbor_stats(particles, &self.scratch.grid, &self.config))
    }
}

/// One-shot form of [`Simulation::init`]
pub fn init(config: &SimConfig, particles: &mut [Particle], size: f64) -> Result<()> {
    Simulation::new(*config)?.init(particles, size)
}

/// One-shot form of [`Simulation::advance_step`]. Allocates fresh scratch
/// each call; keep a `Simulation` around in a time loop instead.
pub fn advance_step(config: &SimConfig, particles: &mut [Particle], size: f64) -> Result<()> {
    Simulation::new(*config)?.advance_step(particles, size)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
