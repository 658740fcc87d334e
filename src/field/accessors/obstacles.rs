use super::super::*;

impl FluidGrid {
    // === Obstacle mask ===
    #[inline]
    pub fn obstacles(&self) -> &[bool] {
        &self.obstacles
    }

    /// Edge cells may be marked, but the boundary pass only reads the mask
    /// for interior cells.
    pub fn set_occupied(&mut self, x: u32, y: u32, occupied: bool) -> Result<(), FluidError> {
        let idx = self.checked_index(x, y)?;
        self.obstacles[idx] = occupied;
        Ok(())
    }

    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.checked_index(x, y)
            .map(|idx| self.obstacles[idx])
            .unwrap_or(false)
    }

    /// Replace the whole mask (row-major, one entry per cell).
    pub fn set_obstacle_mask(&mut self, mask: &[bool]) -> Result<(), FluidError> {
        if mask.len() != self.cells {
            return Err(FluidError::invalid(format!(
                "obstacle mask has {} entries, grid has {} cells",
                mask.len(),
                self.cells
            )));
        }
        self.obstacles.copy_from_slice(mask);
        Ok(())
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.fill(false);
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&o| o).count()
    }
}
