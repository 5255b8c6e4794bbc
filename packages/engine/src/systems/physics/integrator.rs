use crate::domain::particle::{Accel, Particle};

use super::partition::{Partition, Partitions};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mirror `pos` back into `[0, size]`, negating `vel` once per wall hit.
///
/// A fast particle can overshoot by many domain widths. The bounced path is
/// periodic in `2 * size` with an even number of wall hits per period, so
/// whole periods are dropped first and at most one bounce remains.
/// Non-finite positions are left untouched; the next grid build rejects them.
#[inline]
pub fn reflect(pos: &mut f64, vel: &mut f64, size: f64) {
    if !pos.is_finite() {
        return;
    }
    if *pos < -size || *pos > 2.0 * size {
        // Lands in [0, 2 * size]; velocity sign is unchanged
        *pos = pos.rem_euclid(2.0 * size);
    }
    while *pos < 0.0 || *pos > size {
        *pos = if *pos < 0.0 { -*pos } else { 2.0 * size - *pos };
        *vel = -*vel;
    }
}

/// Symplectic Euler step for one particle: velocity from the new
/// acceleration, then position from the new velocity, then wall reflection.
#[inline]
pub fn move_particle(p: &mut Particle, acc: Accel, dt: f64, size: f64) {
    p.ax = acc.ax;
    p.ay = acc.ay;

    p.vx += p.ax * dt;
    p.vy += p.ay * dt;
    p.x += p.vx * dt;
    p.y += p.vy * dt;

    reflect(&mut p.x, &mut p.vx, size);
    reflect(&mut p.y, &mut p.vy, size);
}

fn integrate_partition(part: Partition, particles: &mut [Particle], forces: &[Accel], dt: f64, size: f64) {
    debug_assert_eq!(particles.len(), part.len());
    for (p, &acc) in particles.iter_mut().zip(forces) {
        move_particle(p, acc, dt, size);
    }
}

/// Integration phase: each partition moves only its own particles, reading
/// the matching slice of the finished force buffer.
pub fn integrate(particles: &mut [Particle], forces: &[Accel], dt: f64, size: f64, partitions: Partitions) {
    debug_assert_eq!(forces.len(), particles.len());
    let chunk = partitions.chunk_len();

    #[cfg(feature = "parallel")]
    {
        particles
            .par_chunks_mut(chunk)
            .zip(forces.par_chunks(chunk))
            .enumerate()
            .for_each(|(k, (ps, fs))| integrate_partition(partitions.get(k), ps, fs, dt, size));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (k, (ps, fs)) in particles.chunks_mut(chunk).zip(forces.chunks(chunk)).enumerate() {
            integrate_partition(partitions.get(k), ps, fs, dt, size);
        }
    }
}
