use wasm_bindgen::prelude::*;

use crate::error::FluidError;

use super::perf_stats::PerfStats;
use super::FluidCore;

fn to_js(err: FluidError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle to a fluid solver. Field buffers are exposed as raw pointers so
/// the host can build `Float32Array` views over wasm memory without copying.
#[wasm_bindgen]
pub struct Fluid {
    core: FluidCore,
}

#[wasm_bindgen]
impl Fluid {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32, diffusion: f32, viscosity: f32, dt: f32) -> Result<Fluid, JsValue> {
        let core = FluidCore::new(size, diffusion, viscosity, dt).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Fluid, JsValue> {
        let core = FluidCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Row-major offset of (x, y) into the field views; errors off-grid.
    pub fn index(&self, x: u32, y: u32) -> Result<usize, JsValue> {
        self.core.checked_index(x, y).map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INJECTION ===

    pub fn add_density(&mut self, x: u32, y: u32, amount: f32) -> Result<(), JsValue> {
        self.core.add_density(x, y, amount).map_err(to_js)
    }

    pub fn add_velocity(&mut self, x: u32, y: u32, dx: f32, dy: f32) -> Result<(), JsValue> {
        self.core.add_velocity(x, y, dx, dy).map_err(to_js)
    }

    /// Brush: add density in radius (off-grid cells skipped)
    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: u32, amount: f32) -> u32 {
        self.core.add_density_in_radius(cx, cy, radius, amount)
    }

    /// Brush: add velocity in radius (off-grid cells skipped)
    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: u32, dx: f32, dy: f32) -> u32 {
        self.core.add_velocity_in_radius(cx, cy, radius, dx, dy)
    }

    pub fn fade_density(&mut self, rate: f32) -> Result<(), JsValue> {
        self.core.fade_density(rate).map_err(to_js)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === OBSTACLES ===

    pub fn set_occupied(&mut self, x: u32, y: u32, occupied: bool) -> Result<(), JsValue> {
        self.core.set_occupied(x, y, occupied).map_err(to_js)
    }

    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.core.is_occupied(x, y)
    }

    /// Replace the obstacle mask from a row-major byte array (non-zero = solid)
    pub fn set_obstacle_mask(&mut self, mask: &[u8]) -> Result<(), JsValue> {
        let mask: Vec<bool> = mask.iter().map(|&b| b != 0).collect();
        self.core.set_obstacle_mask(&mask).map_err(to_js)
    }

    pub fn clear_obstacles(&mut self) {
        self.core.clear_obstacles();
    }

    // === STEPPING ===

    pub fn step(&mut self, iterations: u32) -> Result<(), JsValue> {
        self.core.step(iterations).map_err(to_js)
    }

    /// Step with the configured iterations, then fade density
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.core.tick().map_err(to_js)
    }

    // === READ ACCESS ===

    pub fn density_ptr(&self) -> *const f32 { self.core.density_ptr() }

    pub fn vx_ptr(&self) -> *const f32 { self.core.vx_ptr() }

    pub fn vy_ptr(&self) -> *const f32 { self.core.vy_ptr() }

    /// Elements in each field buffer
    pub fn len(&self) -> usize { self.core.len() }

    pub fn is_empty(&self) -> bool { self.core.is_empty() }

    pub fn total_density(&self) -> f64 { self.core.total_density() }

    pub fn max_divergence(&self) -> f32 { self.core.max_divergence() }

    pub fn check_stability(&self) -> Result<(), JsValue> {
        self.core.check_stability().map_err(to_js)
    }
}
