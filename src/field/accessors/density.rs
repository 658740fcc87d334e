use super::super::*;

impl FluidGrid {
    // === Density access ===
    #[inline]
    pub fn density(&self) -> &[f32] {
        &self.density
    }

    pub fn density_at(&self, x: u32, y: u32) -> Option<f32> {
        let idx = self.checked_index(x, y).ok()?;
        Some(self.density[idx])
    }

    /// Accumulate `amount` into one cell. Touches nothing else.
    pub fn add_density(&mut self, x: u32, y: u32, amount: f32) -> Result<(), FluidError> {
        let idx = self.checked_index(x, y)?;
        self.density[idx] += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_density_accumulates_into_one_cell() {
        let mut grid = FluidGrid::new(6).unwrap();
        grid.add_density(2, 3, 40.0).unwrap();
        grid.add_density(2, 3, 2.5).unwrap();

        assert_eq!(grid.density_at(2, 3), Some(42.5));
        let touched = grid.density().iter().filter(|&&d| d != 0.0).count();
        assert_eq!(touched, 1);
    }

    #[test]
    fn out_of_range_density_is_rejected_without_side_effects() {
        let mut grid = FluidGrid::new(6).unwrap();
        assert!(grid.add_density(6, 0, 1.0).unwrap_err().is_invalid_argument());
        assert!(grid.density().iter().all(|&d| d == 0.0));
        assert_eq!(grid.density_at(0, 6), None);
    }
}
