use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl CellGrid {
    /// Pass 1: compute each particle's cell id.
    /// Parallel over particles when the feature is enabled; each worker writes
    /// only its own `cell_ids` slots.
    pub(super) fn assign_cells(&mut self, particles: &[Particle], size: f64) -> Result<()> {
        let (cutoff, n) = (self.cutoff, self.nx);
        self.cell_ids.clear();
        self.cell_ids.resize(particles.len(), 0);

        #[cfg(feature = "parallel")]
        let result = self
            .cell_ids
            .par_iter_mut()
            .zip(particles.par_iter())
            .enumerate()
            .try_for_each(|(i, (slot, p))| -> Result<()> {
                *slot = locate(i, p, size, cutoff, n)?;
                Ok(())
            });

        #[cfg(not(feature = "parallel"))]
        let result = self
            .cell_ids
            .iter_mut()
            .zip(particles)
            .enumerate()
            .try_for_each(|(i, (slot, p))| -> Result<()> {
                *slot = locate(i, p, size, cutoff, n)?;
                Ok(())
            });

        result
    }

    /// Pass 2: counting sort of particle indices by cell id.
    /// O(particles + cells); stable, so each cell lists indices in order.
    pub(super) fn scatter(&mut self) {
        let cells = self.nx * self.ny;

        self.cell_start.clear();
        self.cell_start.resize(cells + 1, 0);
        for &c in &self.cell_ids {
            self.cell_start[c + 1] += 1;
        }
        for c in 0..cells {
            self.cell_start[c + 1] += self.cell_start[c];
        }

        self.cursor.clear();
        self.cursor.extend_from_slice(&self.cell_start[..cells]);
        self.indices.clear();
        self.indices.resize(self.cell_ids.len(), 0);
        for (i, &c) in self.cell_ids.iter().enumerate() {
            self.indices[self.cursor[c]] = i;
            self.cursor[c] += 1;
        }
    }
}
