use super::*;

/// In-bounds cells of the 3x3 block centred on one cell.
pub struct NeighborCells {
    nx: usize,
    x_lo: usize,
    x_hi: usize,
    y_hi: usize,
    cx: usize,
    cy: usize,
}

impl Iterator for NeighborCells {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cy > self.y_hi {
            return None;
        }
        let cell = self.cy * self.nx + self.cx;
        if self.cx == self.x_hi {
            self.cx = self.x_lo;
            self.cy += 1;
        } else {
            self.cx += 1;
        }
        Some(cell)
    }
}

impl CellGrid {
    /// Cell ids of the 3x3 block around `cell`, clipped at the domain edges
    #[inline]
    pub fn neighbor_cells(&self, cell: usize) -> NeighborCells {
        let (cx, cy) = self.cell_coords(cell);
        let x_lo = cx.saturating_sub(1);
        let y_lo = cy.saturating_sub(1);
        NeighborCells {
            nx: self.nx,
            x_lo,
            x_hi: (cx + 1).min(self.nx - 1),
            y_hi: (cy + 1).min(self.ny - 1),
            cx: x_lo,
            cy: y_lo,
        }
    }

    /// Every particle index in the 3x3 block around `cell` (includes the
    /// particles of `cell` itself)
    #[inline]
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbor_cells(cell)
            .flat_map(move |c| self.cell_at(c).iter().copied())
    }
}
