use crate::domain::config::SimConfig;
use crate::domain::error::Result;

use super::perf_stats::PerfStats;
use super::Simulation;

pub(super) fn set_config(sim: &mut Simulation, config: SimConfig) -> Result<()> {
    config.validate()?;
    if config != sim.config {
        log::info!("config changed: {:?} -> {:?}", sim.config, config);
    }
    sim.config = config;
    Ok(())
}

pub(super) fn enable_perf_metrics(sim: &mut Simulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &Simulation) -> PerfStats {
    sim.perf_stats.clone()
}
