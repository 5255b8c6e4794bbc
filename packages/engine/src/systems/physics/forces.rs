use crate::domain::config::SimConfig;
use crate::domain::particle::{Accel, Particle};
use crate::spatial::grid::CellGrid;

use super::partition::{Partition, Partitions};
use super::types::ForceTally;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Force coefficient for a pair at squared separation `r2`, or `None` beyond
/// cutoff.
///
/// `r2` is clamped to `min_r^2` first so the coefficient stays finite for
/// coincident particles. The coefficient is exactly zero at `r == cutoff`
/// and negative (repulsive along `x_j - x_i`) inside it.
#[inline(always)]
pub fn pair_coefficient(r2: f64, config: &SimConfig) -> Option<f64> {
    if r2 > config.cutoff_sq() {
        return None;
    }
    let r2 = r2.max(config.min_r_sq());
    let r = r2.sqrt();
    Some((1.0 - config.cutoff / r) / r2 / config.mass)
}

/// Acceleration that `neighbor` imposes on `particle`
#[inline(always)]
pub fn pair_force(particle: &Particle, neighbor: &Particle, config: &SimConfig) -> Option<Accel> {
    let dx = neighbor.x - particle.x;
    let dy = neighbor.y - particle.y;
    pair_coefficient(dx * dx + dy * dy, config).map(|coef| Accel {
        ax: coef * dx,
        ay: coef * dy,
    })
}

/// Accumulate into the slots of one partition.
///
/// `slots[k]` belongs to particle `part.start + k`; nothing else is written.
fn accumulate_partition(
    part: Partition,
    slots: &mut [Accel],
    particles: &[Particle],
    grid: &CellGrid,
    config: &SimConfig,
) -> ForceTally {
    debug_assert_eq!(slots.len(), part.len());
    let mut tally = ForceTally::default();

    for (slot, i) in slots.iter_mut().zip(part.range()) {
        let particle = &particles[i];
        let mut acc = Accel::ZERO;

        for j in grid.neighbors(grid.cell_of_particle(i)) {
            if j == i {
                continue;
            }
            tally.candidates += 1;
            if let Some(f) = pair_force(particle, &particles[j], config) {
                acc.ax += f.ax;
                acc.ay += f.ay;
                tally.interactions += 1;
            }
        }
        *slot = acc;
    }
    tally
}

/// Force phase: fill `forces[i]` with the net acceleration on particle `i`.
///
/// `grid` must have been built from `particles` in their current positions.
/// The buffer is resized and zeroed here; each partition then writes its own
/// sub-slice while reading `particles` and `grid` shared.
pub fn accumulate_forces(
    particles: &[Particle],
    grid: &CellGrid,
    config: &SimConfig,
    forces: &mut Vec<Accel>,
    partitions: Partitions,
) -> ForceTally {
    debug_assert_eq!(grid.len(), particles.len());
    debug_assert_eq!(partitions.total_len(), particles.len());

    forces.clear();
    forces.resize(particles.len(), Accel::ZERO);
    let chunk = partitions.chunk_len();

    #[cfg(feature = "parallel")]
    let tally = forces
        .par_chunks_mut(chunk)
        .enumerate()
        .map(|(k, slots)| accumulate_partition(partitions.get(k), slots, particles, grid, config))
        .reduce(ForceTally::default, |a, b| a + b);

    #[cfg(not(feature = "parallel"))]
    let tally = forces
        .chunks_mut(chunk)
        .enumerate()
        .map(|(k, slots)| accumulate_partition(partitions.get(k), slots, particles, grid, config))
        .fold(ForceTally::default(), |a, b| a + b);

    tally
}

/// O(n^2) reference: every pair, same per-pair arithmetic as the cell list.
pub fn accumulate_forces_direct(
    particles: &[Particle],
    config: &SimConfig,
    forces: &mut Vec<Accel>,
) -> ForceTally {
    forces.clear();
    forces.resize(particles.len(), Accel::ZERO);
    let mut tally = ForceTally::default();

    for (i, (slot, particle)) in forces.iter_mut().zip(particles).enumerate() {
        for (j, neighbor) in particles.iter().enumerate() {
            if j == i {
                continue;
            }
            tally.candidates += 1;
            if let Some(f) = pair_force(particle, neighbor, config) {
                slot.ax += f.ax;
                slot.ay += f.ay;
                tally.interactions += 1;
            }
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_mass() -> SimConfig {
        SimConfig::new(0.01, 0.0001, 0.01, 1.0).unwrap()
    }

    fn forces_on(particles: &[Particle], size: f64, config: &SimConfig) -> (Vec<Accel>, ForceTally) {
        let grid = CellGrid::build(particles, size, config.cutoff).unwrap();
        let mut forces = Vec::new();
        let tally = accumulate_forces(
            particles,
            &grid,
            config,
            &mut forces,
            Partitions::for_pool(particles.len()),
        );
        (forces, tally)
    }

    #[test]
    fn coefficient_vanishes_at_cutoff() {
        let config = SimConfig::new(0.25, 0.0025, 0.01, 1.0).unwrap();
        assert_eq!(pair_coefficient(config.cutoff_sq(), &config), Some(0.0));
    }

    #[test]
    fn no_force_beyond_cutoff() {
        let config = unit_mass();
        let beyond = config.cutoff * 1.000_001;
        assert_eq!(pair_coefficient(beyond * beyond, &config), None);

        let p = Particle::at(0.5, 0.5);
        let q = Particle::at(0.5 + beyond, 0.5);
        assert!(pair_force(&p, &q, &config).is_none());
    }

    #[test]
    fn coefficient_is_clamped_below_min_r() {
        let config = unit_mass();
        let clamped = pair_coefficient(config.min_r_sq(), &config).unwrap();
        assert_eq!(pair_coefficient(0.0, &config), Some(clamped));
        assert_eq!(pair_coefficient(config.min_r_sq() * 0.25, &config), Some(clamped));
        assert!(clamped.is_finite());
    }

    #[test]
    fn coefficient_scales_inversely_with_mass() {
        let light = unit_mass();
        let heavy = SimConfig { mass: 4.0, ..light };
        let r2 = (0.5 * light.cutoff).powi(2);
        assert_relative_eq!(
            pair_coefficient(r2, &light).unwrap(),
            4.0 * pair_coefficient(r2, &heavy).unwrap()
        );
    }

    #[test]
    fn pair_forces_are_equal_and_opposite() {
        let config = unit_mass();
        let separations = [(0.003, 0.004), (-0.0071, 0.0002), (0.0, 0.0099), (0.00001, 0.0)];
        for (dx, dy) in separations {
            let p = Particle::at(0.5, 0.5);
            let q = Particle::at(0.5 + dx, 0.5 + dy);
            let on_p = pair_force(&p, &q, &config).unwrap();
            let on_q = pair_force(&q, &p, &config).unwrap();
            assert_relative_eq!(on_p.ax, -on_q.ax, max_relative = 1e-12);
            assert_relative_eq!(on_p.ay, -on_q.ay, max_relative = 1e-12);
        }
    }

    #[test]
    fn force_is_repulsive() {
        let config = unit_mass();
        let p = Particle::at(0.5, 0.5);
        let q = Particle::at(0.505, 0.5);
        let on_p = pair_force(&p, &q, &config).unwrap();
        assert!(on_p.ax < 0.0);
        assert_eq!(on_p.ay, 0.0);
    }

    #[test]
    fn neighbors_across_cell_boundary_interact() {
        let config = unit_mass();
        // Cell edge at x = 0.01; the pair straddles it
        let particles = vec![Particle::at(0.0099, 0.005), Particle::at(0.0101, 0.005)];
        let (forces, tally) = forces_on(&particles, 0.05, &config);
        assert_eq!(tally.interactions, 2);
        assert!(forces[0].ax < 0.0);
        assert!(forces[1].ax > 0.0);
        assert_relative_eq!(forces[0].ax, -forces[1].ax);
    }

    #[test]
    fn distant_cells_are_never_scanned() {
        let config = unit_mass();
        let particles = vec![Particle::at(0.001, 0.001), Particle::at(0.049, 0.049)];
        let (forces, tally) = forces_on(&particles, 0.05, &config);
        assert_eq!(tally.candidates, 0);
        assert_eq!(forces, vec![Accel::ZERO; 2]);
    }

    #[test]
    fn cell_list_matches_direct_sum() {
        let config = SimConfig::default();
        let size = 0.1;
        let mut state = 0x1234_5678_u32;
        let mut unit = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as f64 / u32::MAX as f64
        };
        let particles: Vec<Particle> = (0..400)
            .map(|_| Particle::at(unit() * size, unit() * size))
            .collect();

        let (cell_forces, cell_tally) = forces_on(&particles, size, &config);
        let mut direct = Vec::new();
        let direct_tally = accumulate_forces_direct(&particles, &config, &mut direct);

        assert_eq!(cell_tally.interactions, direct_tally.interactions);
        assert!(cell_tally.candidates < direct_tally.candidates);

        // Summation order differs between the two, so compare against the
        // largest force rather than per component
        let scale = direct
            .iter()
            .map(|f| f.ax.abs().max(f.ay.abs()))
            .fold(1.0, f64::max);
        for (a, b) in cell_forces.iter().zip(&direct) {
            assert!((a.ax - b.ax).abs() <= 1e-6 * scale);
            assert!((a.ay - b.ay).abs() <= 1e-6 * scale);
        }
    }

    #[test]
    fn partition_count_does_not_change_forces() {
        let config = SimConfig::default();
        let particles: Vec<Particle> = (0..64)
            .map(|k| Particle::at(0.002 + 0.006 * (k % 8) as f64, 0.002 + 0.006 * (k / 8) as f64))
            .collect();
        let grid = CellGrid::build(&particles, 0.05, config.cutoff).unwrap();

        let mut one = Vec::new();
        let mut many = Vec::new();
        let t1 = accumulate_forces(&particles, &grid, &config, &mut one, Partitions::new(64, 1));
        let t2 = accumulate_forces(&particles, &grid, &config, &mut many, Partitions::new(64, 13));
        assert_eq!(t1, t2);
        assert_eq!(one, many);
    }

    #[test]
    fn stale_buffer_contents_are_overwritten() {
        let config = unit_mass();
        let particles = vec![Particle::at(0.02, 0.02), Particle::at(0.04, 0.04)];
        let grid = CellGrid::build(&particles, 0.05, config.cutoff).unwrap();
        let mut forces = vec![Accel { ax: 9.0, ay: 9.0 }; 5];
        accumulate_forces(&particles, &grid, &config, &mut forces, Partitions::new(2, 2));
        assert_eq!(forces, vec![Accel::ZERO; 2]);
    }
}
