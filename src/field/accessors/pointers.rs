use super::super::*;

impl FluidGrid {
    // === Get raw pointers for JS interop ===
    pub fn density_ptr(&self) -> *const f32 {
        self.density.as_ptr()
    }

    pub fn vx_ptr(&self) -> *const f32 {
        self.vx.as_ptr()
    }

    pub fn vy_ptr(&self) -> *const f32 {
        self.vy.as_ptr()
    }
}
