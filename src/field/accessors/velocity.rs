use super::super::*;

impl FluidGrid {
    // === Velocity access ===
    #[inline]
    pub fn velocity_x(&self) -> &[f32] {
        &self.vx
    }

    #[inline]
    pub fn velocity_y(&self) -> &[f32] {
        &self.vy
    }

    pub fn velocity_at(&self, x: u32, y: u32) -> Option<(f32, f32)> {
        let idx = self.checked_index(x, y).ok()?;
        Some((self.vx[idx], self.vy[idx]))
    }

    pub fn add_velocity(&mut self, x: u32, y: u32, dvx: f32, dvy: f32) -> Result<(), FluidError> {
        let idx = self.checked_index(x, y)?;
        self.vx[idx] += dvx;
        self.vy[idx] += dvy;
        Ok(())
    }
}
