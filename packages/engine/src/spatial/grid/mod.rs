//! CellGrid - cutoff-sized binning of particle indices
//!
//! Rebuilt from scratch every step. Storage is compact and cell-major:
//!
//! Instead of: Vec<Vec<Vec<usize>>>       // one heap vec per cell
//! We have:    cell_start[] + indices[]    // counting sort, reused across steps
//!
//! `indices[cell_start[c]..cell_start[c + 1]]` are the particles of cell `c`,
//! in ascending index order. Cell `c = cy * nx + cx`.

use crate::domain::error::{check_domain, Result, SimError};
use crate::domain::particle::Particle;

mod build;
mod indexing;
mod neighbors;

pub use neighbors::NeighborCells;

/// Most cells a grid may hold; `cell_start` alone is one `usize` per cell.
pub const MAX_CELLS: usize = 1 << 26;

/// Cells per axis for a square domain; never zero.
///
/// Fails when `cutoff` is not a positive finite number or when the grid would
/// exceed `MAX_CELLS`.
pub fn cells_per_axis(size: f64, cutoff: f64) -> Result<usize> {
    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(SimError::InvalidConfig { field: "cutoff", value: cutoff });
    }
    // `as` saturates, so an oversized ratio still fails the product check
    let n = ((size / cutoff).ceil() as usize).max(1);
    match n.checked_mul(n) {
        Some(cells) if cells <= MAX_CELLS => Ok(n),
        _ => Err(SimError::GridTooLarge { size, cutoff, max: MAX_CELLS }),
    }
}

pub struct CellGrid {
    cutoff: f64,
    nx: usize,
    ny: usize,

    // CSR layout - len = cell count + 1
    cell_start: Vec<usize>,
    indices: Vec<usize>,

    // Per-particle cell id from the last build
    cell_ids: Vec<usize>,
    // Scatter cursors, kept to avoid a per-step allocation
    cursor: Vec<usize>,
}

impl CellGrid {
    pub fn new() -> Self {
        Self {
            cutoff: 0.0,
            nx: 0,
            ny: 0,
            cell_start: vec![0],
            indices: Vec::new(),
            cell_ids: Vec::new(),
            cursor: Vec::new(),
        }
    }

    /// Build a grid over `particles` in one call.
    pub fn build(particles: &[Particle], size: f64, cutoff: f64) -> Result<Self> {
        let mut grid = Self::new();
        grid.rebuild(particles, size, cutoff)?;
        Ok(grid)
    }

    /// Discard the previous contents and bin `particles` again.
    ///
    /// Every coordinate must lie in `[0, size]`. An out-of-domain particle
    /// aborts the build with `SimError::OutOfDomain`; when several are out,
    /// which index is reported is unspecified. Any error leaves the grid empty.
    pub fn rebuild(&mut self, particles: &[Particle], size: f64, cutoff: f64) -> Result<()> {
        let result = self.try_rebuild(particles, size, cutoff);
        if result.is_err() {
            self.reset_empty();
        }
        result
    }

    fn try_rebuild(&mut self, particles: &[Particle], size: f64, cutoff: f64) -> Result<()> {
        check_domain(size)?;
        let n = cells_per_axis(size, cutoff)?;
        self.cutoff = cutoff;
        self.nx = n;
        self.ny = n;

        self.assign_cells(particles, size)?;
        self.scatter();
        Ok(())
    }

    fn reset_empty(&mut self) {
        self.indices.clear();
        self.cell_ids.clear();
        self.cell_start.clear();
        self.cell_start.resize(self.nx * self.ny + 1, 0);
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell id of a particle, or the reason it has none.
#[inline]
fn locate(index: usize, p: &Particle, size: f64, cutoff: f64, n: usize) -> Result<usize> {
    if !p.in_domain(size) {
        return Err(SimError::OutOfDomain { index, x: p.x, y: p.y });
    }
    // x == size lands on floor(size / cutoff), one past the last cell when
    // size is a multiple of cutoff
    let cx = ((p.x / cutoff) as usize).min(n - 1);
    let cy = ((p.y / cutoff) as usize).min(n - 1);
    Ok(cy * n + cx)
}
