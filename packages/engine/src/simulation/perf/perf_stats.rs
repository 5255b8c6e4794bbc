use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,

    pub(super) particle_count: u32,
    pub(super) cell_count: u32,
    pub(super) max_cell_occupancy: u32,
    pub(super) partitions: u32,
    pub(super) workers: u32,

    pub(super) pair_candidates: u64,
    pub(super) interactions: u64,
}

/// Count for a `u32` host field, pinned at `u32::MAX` instead of wrapping
#[inline]
pub(crate) fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Fraction of examined pairs that were within cutoff
    pub fn hit_ratio(&self) -> f64 {
        if self.pair_candidates == 0 {
            0.0
        } else {
            self.interactions as f64 / self.pair_candidates as f64
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.cell_count }
    #[wasm_bindgen(getter)]
    pub fn max_cell_occupancy(&self) -> u32 { self.max_cell_occupancy }
    #[wasm_bindgen(getter)]
    pub fn partitions(&self) -> u32 { self.partitions }
    #[wasm_bindgen(getter)]
    pub fn workers(&self) -> u32 { self.workers }

    #[wasm_bindgen(getter)]
    pub fn pair_candidates(&self) -> u64 { self.pair_candidates }
    #[wasm_bindgen(getter)]
    pub fn interactions(&self) -> u64 { self.interactions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_saturate_instead_of_wrapping() {
        assert_eq!(count_u32(0), 0);
        assert_eq!(count_u32(u32::MAX as usize), u32::MAX);
        assert_eq!(count_u32(usize::MAX), u32::MAX);
    }

    #[test]
    fn hit_ratio_handles_no_candidates() {
        let mut stats = PerfStats::default();
        assert_eq!(stats.hit_ratio(), 0.0);
        stats.pair_candidates = 8;
        stats.interactions = 2;
        assert_eq!(stats.hit_ratio(), 0.25);
    }
}
