use crate::domain::config::SimConfig;
use crate::domain::error::{check_domain, Result};
use crate::domain::particle::Particle;

use super::perf_stats::PerfStats;
use super::{Simulation, StepScratch};

pub(super) fn create_simulation(config: SimConfig) -> Result<Simulation> {
    config.validate()?;
    log::info!(
        "simulation created: cutoff={} min_r={} dt={} mass={}",
        config.cutoff,
        config.min_r,
        config.dt,
        config.mass
    );
    Ok(Simulation {
        config,
        scratch: StepScratch::new(),
        step_count: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

// Binning happens inside every step, so there is nothing to pre-compute.
pub(super) fn init_particles(_sim: &mut Simulation, particles: &mut [Particle], size: f64) -> Result<()> {
    check_domain(size)?;
    log::debug!("init: {} particles, domain {}", particles.len(), size);
    Ok(())
}
