use wasm_bindgen::prelude::*;

/// Timings and counters of the last step.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) project_ms: f64,
    pub(super) advect_ms: f64,
    pub(super) stability_ms: f64,
    pub(super) linear_solves: u32,
    pub(super) relaxation_sweeps: u32,
    pub(super) non_finite_cells: u32,
    pub(super) grid_size: u32,
    pub(super) cell_count: u32,
    pub(super) memory_bytes: u32,
}

/// Counters saturate at `u32::MAX` instead of wrapping.
pub(super) fn saturating_count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_ms(&self) -> f64 { self.advect_ms }
    #[wasm_bindgen(getter)]
    pub fn stability_ms(&self) -> f64 { self.stability_ms }
    #[wasm_bindgen(getter)]
    pub fn linear_solves(&self) -> u32 { self.linear_solves }
    #[wasm_bindgen(getter)]
    pub fn relaxation_sweeps(&self) -> u32 { self.relaxation_sweeps }
    #[wasm_bindgen(getter)]
    pub fn non_finite_cells(&self) -> u32 { self.non_finite_cells }
    /// Cells per side (`N`).
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    /// `N * N`
    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.cell_count }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_saturate() {
        assert_eq!(saturating_count(2500), 2500);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(saturating_count(u32::MAX as usize + 7), u32::MAX);
    }
}
