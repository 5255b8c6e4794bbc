//! Simulation constants - fixed for the lifetime of a run.
//!
//! Bundled into one value passed to every core call instead of process-wide
//! globals, so several independent simulations can coexist.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};

/// Reference particle density used by hosts that scale the domain with `n`
pub const DEFAULT_DENSITY: f64 = 0.0005;
pub const DEFAULT_MASS: f64 = 0.01;
pub const DEFAULT_CUTOFF: f64 = 0.01;
pub const DEFAULT_MIN_R: f64 = DEFAULT_CUTOFF / 100.0;
pub const DEFAULT_DT: f64 = 0.0005;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Interaction radius; also the grid cell side
    pub cutoff: f64,
    /// Separation clamp that keeps the force finite as r -> 0
    pub min_r: f64,
    pub dt: f64,
    /// Uniform particle mass
    pub mass: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            min_r: DEFAULT_MIN_R,
            dt: DEFAULT_DT,
            mass: DEFAULT_MASS,
        }
    }
}

impl SimConfig {
    pub fn new(cutoff: f64, min_r: f64, dt: f64, mass: f64) -> Result<Self> {
        let config = Self { cutoff, min_r, dt, mass };
        config.validate()?;
        Ok(config)
    }

    /// Parse a (possibly partial) JSON object; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Four plain f64 fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("cutoff", self.cutoff),
            ("min_r", self.min_r),
            ("dt", self.dt),
            ("mass", self.mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn cutoff_sq(&self) -> f64 {
        self.cutoff * self.cutoff
    }

    #[inline]
    pub fn min_r_sq(&self) -> f64 {
        self.min_r * self.min_r
    }
}

/// Square domain side that keeps `count` particles at the given density.
pub fn domain_size_for(count: usize, density: f64) -> f64 {
    (density * count as f64).sqrt()
}
