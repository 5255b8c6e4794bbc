//! Particle state - one flat record per particle, addressed by index.
//!
//! `#[repr(C)]` keeps the layout at six packed `f64`s so a host can read the
//! store as one contiguous buffer (see `World::particles_ptr`).

use serde::{Deserialize, Serialize};

/// Number of `f64` values per particle in the flat host view.
pub const PARTICLE_STRIDE: usize = 6;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Acceleration from the last force phase (overwritten every step)
    pub ax: f64,
    pub ay: f64,
}

impl Particle {
    /// Particle at rest at (x, y)
    #[inline]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }

    /// Particle at (x, y) moving with (vx, vy)
    #[inline]
    pub fn moving(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy, ax: 0.0, ay: 0.0 }
    }

    #[inline]
    pub fn speed_sq(&self) -> f64 {
        self.vx * self.vx + self.vy * self.vy
    }

    /// True when both coordinates lie in `[0, size]` (NaN is never inside)
    #[inline]
    pub fn in_domain(&self, size: f64) -> bool {
        (0.0..=size).contains(&self.x) && (0.0..=size).contains(&self.y)
    }
}

/// Per-step acceleration slot, one per particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accel {
    pub ax: f64,
    pub ay: f64,
}

impl Accel {
    pub const ZERO: Accel = Accel { ax: 0.0, ay: 0.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_six_packed_doubles() {
        assert_eq!(
            std::mem::size_of::<Particle>(),
            PARTICLE_STRIDE * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn in_domain_is_inclusive_and_rejects_nan() {
        assert!(Particle::at(0.0, 1.0).in_domain(1.0));
        assert!(!Particle::at(1.0 + 1e-12, 0.5).in_domain(1.0));
        assert!(!Particle::at(-1e-12, 0.5).in_domain(1.0));
        assert!(!Particle::at(f64::NAN, 0.5).in_domain(1.0));
    }
}
