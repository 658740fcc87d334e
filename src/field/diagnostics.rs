//! Whole-buffer chores outside the solver: sums, scans, clears and fades.
//! With the `parallel` feature these run on the rayon pool.

use super::*;
use crate::solver::divergence_at;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn sum_f64(buf: &[f32]) -> f64 {
    #[cfg(feature = "parallel")]
    {
        buf.par_iter().map(|&v| v as f64).sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        buf.iter().map(|&v| v as f64).sum()
    }
}

fn count_non_finite(buf: &[f32]) -> usize {
    #[cfg(feature = "parallel")]
    {
        buf.par_iter().filter(|v| !v.is_finite()).count()
    }
    #[cfg(not(feature = "parallel"))]
    {
        buf.iter().filter(|v| !v.is_finite()).count()
    }
}

fn fill_zero(buf: &mut [f32]) {
    #[cfg(feature = "parallel")]
    {
        buf.par_iter_mut().for_each(|v| *v = 0.0);
    }
    #[cfg(not(feature = "parallel"))]
    {
        buf.fill(0.0);
    }
}

impl FluidGrid {
    /// Sum of density over every cell, edges included.
    pub fn total_density(&self) -> f64 {
        sum_f64(&self.density)
    }

    /// Sum of density over the interior cells only.
    pub fn interior_density(&self) -> f64 {
        let n = self.size as usize;
        (1..n - 1)
            .map(|y| sum_f64(&self.density[y * n + 1..y * n + n - 1]))
            .sum()
    }

    /// Non-finite cell counts per observable field, in `density, vx, vy` order.
    pub fn non_finite_cells(&self) -> [(&'static str, usize); 3] {
        [
            ("density", count_non_finite(&self.density)),
            ("vx", count_non_finite(&self.vx)),
            ("vy", count_non_finite(&self.vy)),
        ]
    }

    /// Fails on the first field holding NaN or infinite values.
    pub fn check_stability(&self) -> Result<(), FluidError> {
        for (field, cells) in self.non_finite_cells() {
            if cells > 0 {
                return Err(FluidError::NumericalInstability { field, cells });
            }
        }
        Ok(())
    }

    /// Largest |divergence| of the live velocity over the interior cells.
    pub fn max_divergence(&self) -> f32 {
        let n = self.size as usize;
        let bounds = Bounds::new(n, &self.obstacles);
        let mut max = 0.0f32;
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                max = max.max(divergence_at(&self.vx, &self.vy, i, j, bounds).abs());
            }
        }
        max
    }

    /// Multiply every density cell by `rate`.
    pub fn fade_density(&mut self, rate: f32) {
        #[cfg(feature = "parallel")]
        {
            self.density.par_iter_mut().for_each(|d| *d *= rate);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.density.iter_mut().for_each(|d| *d *= rate);
        }
    }

    /// Zero every fluid buffer. The obstacle mask is kept.
    pub fn clear(&mut self) {
        fill_zero(&mut self.density);
        fill_zero(&mut self.density_prev);
        fill_zero(&mut self.vx);
        fill_zero(&mut self.vy);
        fill_zero(&mut self.vx_prev);
        fill_zero(&mut self.vy_prev);
    }
}
