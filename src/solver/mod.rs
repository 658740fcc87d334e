//! Stable Fluids solver passes
//!
//! Each pass is a free function over flat row-major buffers plus a `Bounds`
//! (grid side and obstacle mask). The step pipeline in `simulation` decides
//! which buffer plays which role; the passes never allocate.
//!
//! - boundary  - edge/corner/obstacle reflection, run after every sweep
//! - lin_solve - in-place relaxation for the implicit systems
//! - diffuse   - implicit diffusion via lin_solve
//! - project   - pressure solve + gradient subtraction
//! - advect    - semi-Lagrangian back-trace with bilinear resampling

mod boundary;
mod lin_solve;
mod diffuse;
mod project;
mod advect;

pub use boundary::{set_bounds, BoundaryKind};
pub use lin_solve::lin_solve;
pub use diffuse::diffuse;
pub use project::{divergence_at, project};
pub use advect::advect;

/// Grid side and obstacle mask shared by every pass.
#[derive(Clone, Copy)]
pub struct Bounds<'a> {
    n: usize,
    obstacles: &'a [bool],
}

impl<'a> Bounds<'a> {
    pub fn new(n: usize, obstacles: &'a [bool]) -> Self {
        debug_assert!(n >= 3, "Bounds: grid side {} has no interior", n);
        debug_assert_eq!(obstacles.len(), n * n, "Bounds: obstacle mask does not match grid");
        Self { n, obstacles }
    }

    #[inline]
    pub fn n(&self) -> usize { self.n }

    #[inline(always)]
    pub fn ix(&self, x: usize, y: usize) -> usize {
        x + y * self.n
    }

    #[inline]
    pub fn is_obstacle(&self, x: usize, y: usize) -> bool {
        *fast!(self.obstacles, [self.ix(x, y)])
    }
}
