//! Field store - Structure of Arrays for the fluid grid
//!
//! Every field is one flat row-major buffer of `N * N` floats, index
//! `x + y * N`. Buffers are allocated once in `new` and never resized.
//!
//! The `*_prev` buffers are staging storage owned by the step pipeline:
//! diffusion writes into them, and projection borrows them (and the live
//! velocity buffers) as pressure/divergence scratch.

use crate::domain::config::MIN_GRID_SIZE;
use crate::error::FluidError;
use crate::solver::Bounds;

mod indexing;
mod accessors;
mod diagnostics;

/// SoA grid - all fluid state in separate arrays
#[derive(Debug)]
pub struct FluidGrid {
    size: u32,
    cells: usize,

    pub(crate) density: Vec<f32>,
    pub(crate) density_prev: Vec<f32>,
    pub(crate) vx: Vec<f32>,
    pub(crate) vy: Vec<f32>,
    pub(crate) vx_prev: Vec<f32>,
    pub(crate) vy_prev: Vec<f32>,

    // Written by the host between steps, read-only while stepping
    pub(crate) obstacles: Vec<bool>,
}

/// Mutable views of every fluid buffer, split so the step pipeline can hand
/// disjoint buffers to one pass.
pub(crate) struct StepBuffers<'a> {
    pub(crate) density: &'a mut [f32],
    pub(crate) density_prev: &'a mut [f32],
    pub(crate) vx: &'a mut [f32],
    pub(crate) vy: &'a mut [f32],
    pub(crate) vx_prev: &'a mut [f32],
    pub(crate) vy_prev: &'a mut [f32],
}

impl FluidGrid {
    pub fn new(size: u32) -> Result<Self, FluidError> {
        if size < MIN_GRID_SIZE {
            return Err(FluidError::invalid(format!(
                "grid size {} is below the minimum of {}",
                size, MIN_GRID_SIZE
            )));
        }
        let cells = (size as usize) * (size as usize);
        Ok(Self {
            size,
            cells,
            density: vec![0.0; cells],
            density_prev: vec![0.0; cells],
            vx: vec![0.0; cells],
            vy: vec![0.0; cells],
            vx_prev: vec![0.0; cells],
            vy_prev: vec![0.0; cells],
            obstacles: vec![false; cells],
        })
    }

    pub(crate) fn split_for_step(&mut self) -> (Bounds<'_>, StepBuffers<'_>) {
        let bounds = Bounds::new(self.size as usize, &self.obstacles);
        let buffers = StepBuffers {
            density: &mut self.density,
            density_prev: &mut self.density_prev,
            vx: &mut self.vx,
            vy: &mut self.vy,
            vx_prev: &mut self.vx_prev,
            vy_prev: &mut self.vy_prev,
        };
        (bounds, buffers)
    }

    /// Approximate heap footprint of the buffers in bytes.
    pub fn memory_bytes(&self) -> usize {
        // six f32 fields + one bool mask
        self.cells * (6 * std::mem::size_of::<f32>() + std::mem::size_of::<bool>())
    }
}
