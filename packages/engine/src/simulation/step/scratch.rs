use crate::domain::particle::Accel;
use crate::spatial::grid::CellGrid;

/// Step-global state: one grid and one force buffer shared by every worker.
///
/// Contents are rebuilt each step; only the allocations carry over.
pub(crate) struct StepScratch {
    pub(crate) grid: CellGrid,
    pub(crate) forces: Vec<Accel>,
}

impl StepScratch {
    pub(crate) fn new() -> Self {
        Self {
            grid: CellGrid::new(),
            forces: Vec::new(),
        }
    }
}
