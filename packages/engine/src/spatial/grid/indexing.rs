use super::*;

impl CellGrid {
    // === Dimensions ===
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of binned particles
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    // === Index conversion ===
    #[inline]
    pub fn cell_index(&self, cx: usize, cy: usize) -> usize {
        debug_assert!(
            cx < self.nx && cy < self.ny,
            "cell_index: out of bounds ({}, {}) for {}x{} grid",
            cx,
            cy,
            self.nx,
            self.ny
        );
        cy * self.nx + cx
    }

    #[inline]
    pub fn cell_coords(&self, cell: usize) -> (usize, usize) {
        (cell % self.nx, cell / self.nx)
    }

    /// Cell containing a point of the domain (top edge folds into the last cell)
    #[inline]
    pub fn cell_of(&self, x: f64, y: f64) -> (usize, usize) {
        let cx = ((x / self.cutoff) as usize).min(self.nx - 1);
        let cy = ((y / self.cutoff) as usize).min(self.ny - 1);
        (cx, cy)
    }

    /// Cell that particle `i` was binned into by the last build
    #[inline]
    pub fn cell_of_particle(&self, i: usize) -> usize {
        self.cell_ids[i]
    }

    // === Contents ===
    #[inline]
    pub fn cell(&self, cx: usize, cy: usize) -> &[usize] {
        self.cell_at(self.cell_index(cx, cy))
    }

    #[inline]
    pub fn cell_at(&self, cell: usize) -> &[usize] {
        &self.indices[self.cell_start[cell]..self.cell_start[cell + 1]]
    }

    /// Most particles in any single cell
    pub fn max_occupancy(&self) -> usize {
        self.cell_start
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }
}
