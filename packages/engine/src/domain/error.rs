//! Error types for the stepper.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config: `{field}` must be finite and > 0 (got {value})")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("invalid domain size: must be finite and > 0 (got {0})")]
    InvalidDomain(f64),

    #[error("domain {size} with cutoff {cutoff} needs more than {max} grid cells")]
    GridTooLarge { size: f64, cutoff: f64, max: usize },

    #[error("particle {index} at ({x}, {y}) lies outside the domain")]
    OutOfDomain { index: usize, x: f64, y: f64 },

    #[error("config JSON error: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Reject a domain side that cannot host a grid.
pub fn check_domain(size: f64) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidDomain(size))
    }
}
