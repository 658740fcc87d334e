use super::*;

impl FluidGrid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Number of cells (`N * N`), the length of every buffer.
    #[inline]
    pub fn len(&self) -> usize { self.cells }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells == 0 }

    // === Index conversion ===
    /// Row-major offset of cell (x, y). Only meaningful for `x, y < N`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.size && y < self.size,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.size,
            self.size
        );
        x as usize + (y as usize) * (self.size as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let n = self.size as usize;
        ((idx % n) as u32, (idx / n) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size as i32 && y >= 0 && y < self.size as i32
    }

    /// Cells `1..=N-2` on both axes; everything else is edge.
    #[inline]
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.size && y + 1 < self.size
    }

    pub fn checked_index(&self, x: u32, y: u32) -> Result<usize, FluidError> {
        if x >= self.size || y >= self.size {
            return Err(FluidError::invalid(format!(
                "cell ({}, {}) is outside the {}x{} grid",
                x, y, self.size, self.size
            )));
        }
        Ok(self.index(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_is_a_bijection_over_the_grid() {
        let grid = FluidGrid::new(7).unwrap();
        let mut seen = HashSet::new();
        for y in 0..7 {
            for x in 0..7 {
                let idx = grid.index(x, y);
                assert!(idx < grid.len());
                assert!(seen.insert(idx), "duplicate index {} for ({}, {})", idx, x, y);
                assert_eq!(grid.coords(idx), (x, y));
            }
        }
        assert_eq!(seen.len(), grid.len());
    }

    #[test]
    fn index_is_row_major() {
        let grid = FluidGrid::new(10).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(3, 0), 3);
        assert_eq!(grid.index(3, 2), 23);
        assert_eq!(grid.index(9, 9), 99);
    }

    #[test]
    fn checked_index_rejects_outside_cells() {
        let grid = FluidGrid::new(5).unwrap();
        assert_eq!(grid.checked_index(4, 4), Ok(24));
        assert!(grid.checked_index(5, 0).unwrap_err().is_invalid_argument());
        assert!(grid.checked_index(0, 5).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn interior_excludes_edges() {
        let grid = FluidGrid::new(5).unwrap();
        assert!(grid.is_interior(1, 1));
        assert!(grid.is_interior(3, 3));
        assert!(!grid.is_interior(0, 2));
        assert!(!grid.is_interior(2, 4));
        assert!(grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(-1, 0));
    }
}
