//! Stable Fluids Engine - grid-based incompressible smoke solver
//!
//! A square grid of velocity and density, advanced per step by
//! diffuse -> project -> advect -> project for velocity and
//! diffuse -> advect for density, with reflective walls and interior
//! obstacle cells.
//!
//! Architecture:
//! - core/        - safety macros
//! - field/       - grid buffers, indexing, injection, diagnostics
//! - solver/      - the numerical passes
//! - domain/      - configuration
//! - simulation/  - orchestration and the wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod error;
pub mod domain;
pub mod field;
pub mod solver;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool initialization for the parallel buffer chores
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Stable Fluids engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::FluidConfig;
pub use error::FluidError;
pub use field::FluidGrid;
pub use simulation::{Fluid, FluidCore, PerfStats};
pub use solver::BoundaryKind;
