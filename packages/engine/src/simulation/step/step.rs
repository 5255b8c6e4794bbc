use crate::domain::error::Result;
use crate::domain::particle::Particle;
use crate::physics::{accumulate_forces, integrate, worker_count, Partitions};

use super::perf_stats::count_u32;
use super::{PerfTimer, Simulation};

/// One full timestep: grid build, force evaluation, integration.
///
/// Each phase returns only after every worker has finished its partitions,
/// so the phases never overlap. A rejected grid build returns before any
/// particle is written.
pub(super) fn advance_step(sim: &mut Simulation, particles: &mut [Particle], size: f64) -> Result<()> {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut lap = step_start;

    let config = sim.config;
    let partitions = Partitions::for_pool(particles.len());
    let scratch = &mut sim.scratch;

    // === PHASE 1: GRID BUILD ===
    if let Err(err) = scratch.grid.rebuild(particles, size, config.cutoff) {
        log::warn!("step {} rejected: {}", sim.step_count, err);
        return Err(err);
    }
    let grid_ms = lap.as_mut().map_or(0.0, PerfTimer::lap_ms);

    // === PHASE 2: FORCES ===
    // Grid and positions are frozen from here until integration
    let tally = accumulate_forces(particles, &scratch.grid, &config, &mut scratch.forces, partitions);
    let forces_ms = lap.as_mut().map_or(0.0, PerfTimer::lap_ms);

    // === PHASE 3: INTEGRATION ===
    integrate(particles, &scratch.forces, config.dt, size, partitions);
    let integrate_ms = lap.as_mut().map_or(0.0, PerfTimer::lap_ms);

    if let Some(start) = step_start {
        let stats = &mut sim.perf_stats;
        stats.step_ms = start.elapsed_ms();
        stats.grid_ms = grid_ms;
        stats.forces_ms = forces_ms;
        stats.integrate_ms = integrate_ms;
        stats.particle_count = count_u32(particles.len());
        stats.cell_count = count_u32(scratch.grid.cell_count());
        stats.max_cell_occupancy = count_u32(scratch.grid.max_occupancy());
        stats.partitions = count_u32(partitions.count());
        stats.workers = count_u32(worker_count());
        stats.pair_candidates = tally.candidates;
        stats.interactions = tally.interactions;

        log::debug!(
            "step {}: {:.3} ms (grid {:.3}, forces {:.3}, integrate {:.3}), {} interactions",
            sim.step_count,
            stats.step_ms,
            grid_ms,
            forces_ms,
            integrate_ms,
            tally.interactions
        );
    }

    sim.step_count += 1;
    Ok(())
}
