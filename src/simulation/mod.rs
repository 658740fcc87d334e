//! Fluid simulation - orchestration only
//!
//! FluidCore owns the field store and the fixed configuration. The work is
//! delegated:
//! - step/      the per-step pass pipeline
//! - commands/  injection, obstacles, fading
//! - init/      construction and perf toggles
//! - perf/      timers and the per-step snapshot
//! - facade     the wasm-bindgen surface

use crate::domain::config::FluidConfig;
use crate::error::FluidError;
use crate::field::FluidGrid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Fluid;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The fluid solver: grid buffers plus immutable parameters.
#[derive(Debug)]
pub struct FluidCore {
    config: FluidConfig,
    grid: FluidGrid,

    // State
    frame: u64,
    instability_reported: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidCore {
    /// Square grid of `size` cells per axis. `size >= 3`, `dt > 0`,
    /// `diffusion` and `viscosity` non-negative.
    pub fn new(size: u32, diffusion: f32, viscosity: f32, dt: f32) -> Result<Self, FluidError> {
        init::create_fluid_core(FluidConfig::new(size, diffusion, viscosity, dt))
    }

    pub fn from_config(config: FluidConfig) -> Result<Self, FluidError> {
        init::create_fluid_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, FluidError> {
        init::create_fluid_core(FluidConfig::from_json(json)?)
    }

    pub fn config(&self) -> &FluidConfig { &self.config }

    pub fn grid(&self) -> &FluidGrid { &self.grid }

    pub fn size(&self) -> u32 { self.grid.size() }

    /// Completed steps since construction.
    pub fn frame(&self) -> u64 { self.frame }

    pub fn index(&self, x: u32, y: u32) -> usize { self.grid.index(x, y) }

    /// `index` for untrusted coordinates.
    pub fn checked_index(&self, x: u32, y: u32) -> Result<usize, FluidError> {
        self.grid.checked_index(x, y)
    }

    pub fn coords(&self, idx: usize) -> (u32, u32) { self.grid.coords(idx) }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === INJECTION ===

    pub fn add_density(&mut self, x: u32, y: u32, amount: f32) -> Result<(), FluidError> {
        commands::add_density(self, x, y, amount)
    }

    pub fn add_velocity(&mut self, x: u32, y: u32, dx: f32, dy: f32) -> Result<(), FluidError> {
        commands::add_velocity(self, x, y, dx, dy)
    }

    /// Add density to every cell within `radius` of (cx, cy); cells off the
    /// grid are skipped. Returns the number of cells touched.
    pub fn add_density_in_radius(&mut self, cx: i32, cy: i32, radius: u32, amount: f32) -> u32 {
        commands::add_density_in_radius(self, cx, cy, radius, amount)
    }

    pub fn add_velocity_in_radius(&mut self, cx: i32, cy: i32, radius: u32, dx: f32, dy: f32) -> u32 {
        commands::add_velocity_in_radius(self, cx, cy, radius, dx, dy)
    }

    pub fn fade_density(&mut self, rate: f32) -> Result<(), FluidError> {
        commands::fade_density(self, rate)
    }

    /// Zero all fluid buffers; obstacles stay.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === OBSTACLES ===

    pub fn set_occupied(&mut self, x: u32, y: u32, occupied: bool) -> Result<(), FluidError> {
        commands::set_occupied(self, x, y, occupied)
    }

    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.grid.is_occupied(x, y)
    }

    pub fn set_obstacle_mask(&mut self, mask: &[bool]) -> Result<(), FluidError> {
        commands::set_obstacle_mask(self, mask)
    }

    pub fn clear_obstacles(&mut self) {
        commands::clear_obstacles(self)
    }

    // === STEPPING ===

    /// Advance the fields by one time increment using `iterations`
    /// relaxation sweeps per linear solve.
    pub fn step(&mut self, iterations: u32) -> Result<(), FluidError> {
        step::step(self, iterations)
    }

    /// One host frame: `step` with the configured iterations, then fade.
    pub fn tick(&mut self) -> Result<(), FluidError> {
        step::tick(self)
    }

    // === READ ACCESS ===

    pub fn density(&self) -> &[f32] { self.grid.density() }

    pub fn velocity_x(&self) -> &[f32] { self.grid.velocity_x() }

    pub fn velocity_y(&self) -> &[f32] { self.grid.velocity_y() }

    pub fn obstacles(&self) -> &[bool] { self.grid.obstacles() }

    pub fn density_at(&self, x: u32, y: u32) -> Option<f32> { self.grid.density_at(x, y) }

    pub fn velocity_at(&self, x: u32, y: u32) -> Option<(f32, f32)> { self.grid.velocity_at(x, y) }

    pub fn total_density(&self) -> f64 { self.grid.total_density() }

    pub fn max_divergence(&self) -> f32 { self.grid.max_divergence() }

    pub fn check_stability(&self) -> Result<(), FluidError> { self.grid.check_stability() }

    /// Get pointer to density array (for JS rendering)
    pub fn density_ptr(&self) -> *const f32 { self.grid.density_ptr() }

    pub fn vx_ptr(&self) -> *const f32 { self.grid.vx_ptr() }

    pub fn vy_ptr(&self) -> *const f32 { self.grid.vy_ptr() }

    /// Length of every field buffer
    pub fn len(&self) -> usize { self.grid.len() }

    pub fn is_empty(&self) -> bool { self.grid.is_empty() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
