//! Physics System - cell-list force evaluation and symplectic Euler integration
//!
//! Key concepts:
//! - Forces are short-range and repulsive; only the 3x3 block of cells around
//!   a particle can hold interaction partners
//! - Each phase is split into `Partition`s (contiguous index ranges); a
//!   partition owns the output slots of its range and nothing else
//! - Positions and the grid are read-only during the force phase; the force
//!   buffer is read-only during integration
//! - Walls reflect: position mirrored, velocity component negated

mod diagnostics;
mod forces;
mod integrator;
mod partition;
mod types;

pub use diagnostics::{kinetic_energy, neighbor_stats, NeighborStats};
pub use forces::{accumulate_forces, accumulate_forces_direct, pair_coefficient, pair_force};
pub use integrator::{integrate, move_particle, reflect};
pub use partition::{worker_count, Partition, Partitions};
pub use types::ForceTally;
