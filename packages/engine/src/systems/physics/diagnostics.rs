//! Read-only observables over a particle store.

use crate::domain::config::SimConfig;
use crate::domain::particle::Particle;
use crate::spatial::grid::CellGrid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Total kinetic energy, `sum(m * |v|^2 / 2)`
pub fn kinetic_energy(particles: &[Particle], mass: f64) -> f64 {
    #[cfg(feature = "parallel")]
    let sum: f64 = particles.par_iter().map(Particle::speed_sq).sum();
    #[cfg(not(feature = "parallel"))]
    let sum: f64 = particles.iter().map(Particle::speed_sq).sum();

    0.5 * mass * sum
}

/// Separation statistics over interacting pairs, in units of cutoff.
///
/// `absmin` near 0 means particles are getting through the repulsion; a
/// healthy run keeps it around 0.4 or above and `absavg` around 0.8.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborStats {
    /// Smallest pair separation seen (1.0 when no pair is within cutoff)
    pub absmin: f64,
    sum: f64,
    pairs: u64,
}

impl Default for NeighborStats {
    fn default() -> Self {
        Self { absmin: 1.0, sum: 0.0, pairs: 0 }
    }
}

impl NeighborStats {
    /// Mean separation over all counted pairs (0 when there are none)
    pub fn absavg(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.sum / self.pairs as f64
        }
    }

    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    fn observe(&mut self, ratio: f64) {
        self.absmin = self.absmin.min(ratio);
        self.sum += ratio;
        self.pairs += 1;
    }

    pub fn merge(self, other: NeighborStats) -> NeighborStats {
        NeighborStats {
            absmin: self.absmin.min(other.absmin),
            sum: self.sum + other.sum,
            pairs: self.pairs + other.pairs,
        }
    }
}

fn stats_for(i: usize, particles: &[Particle], grid: &CellGrid, config: &SimConfig) -> NeighborStats {
    let mut stats = NeighborStats::default();
    let p = &particles[i];
    for j in grid.neighbors(grid.cell_of_particle(i)) {
        if j == i {
            continue;
        }
        let dx = particles[j].x - p.x;
        let dy = particles[j].y - p.y;
        let r2 = dx * dx + dy * dy;
        // Coincident pairs carry no separation information
        if r2 > config.cutoff_sq() || r2 == 0.0 {
            continue;
        }
        stats.observe(r2.sqrt() / config.cutoff);
    }
    stats
}

/// Nearest-approach statistics for the current positions. `grid` must be
/// built from `particles`. Each pair is counted from both ends.
pub fn neighbor_stats(particles: &[Particle], grid: &CellGrid, config: &SimConfig) -> NeighborStats {
    debug_assert_eq!(grid.len(), particles.len());

    #[cfg(feature = "parallel")]
    let stats = (0..particles.len())
        .into_par_iter()
        .map(|i| stats_for(i, particles, grid, config))
        .reduce(NeighborStats::default, NeighborStats::merge);

    #[cfg(not(feature = "parallel"))]
    let stats = (0..particles.len())
        .map(|i| stats_for(i, particles, grid, config))
        .fold(NeighborStats::default(), NeighborStats::merge);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kinetic_energy_sums_all_particles() {
        let particles = vec![
            Particle::moving(0.1, 0.1, 3.0, 4.0),
            Particle::moving(0.2, 0.2, 0.0, -2.0),
        ];
        assert_relative_eq!(kinetic_energy(&particles, 0.5), 0.25 * (25.0 + 4.0));
        assert_eq!(kinetic_energy(&[], 1.0), 0.0);
    }

    #[test]
    fn isolated_particles_report_no_pairs() {
        let config = SimConfig::default();
        let particles = vec![Particle::at(0.01, 0.01), Particle::at(0.09, 0.09)];
        let grid = CellGrid::build(&particles, 0.1, config.cutoff).unwrap();
        let stats = neighbor_stats(&particles, &grid, &config);
        assert_eq!(stats.pairs(), 0);
        assert_eq!(stats.absmin, 1.0);
        assert_eq!(stats.absavg(), 0.0);
    }

    #[test]
    fn close_pair_sets_absmin() {
        let config = SimConfig::new(0.25, 0.0025, 0.01, 1.0).unwrap();
        let particles = vec![
            Particle::at(0.5, 0.5),
            Particle::at(0.5, 0.625),
            Particle::at(0.5, 0.0),
        ];
        let grid = CellGrid::build(&particles, 1.0, config.cutoff).unwrap();
        let stats = neighbor_stats(&particles, &grid, &config);
        assert_eq!(stats.pairs(), 2);
        assert_relative_eq!(stats.absmin, 0.5);
        assert_relative_eq!(stats.absavg(), 0.5);
    }
}
