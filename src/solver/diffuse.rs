use super::{lin_solve, BoundaryKind, Bounds};

/// Implicit diffusion of `x0` into `x` at `rate` (viscosity for velocity,
/// diffusion for density). `x` is also the initial guess.
pub fn diffuse(
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    rate: f32,
    dt: f32,
    iterations: u32,
    bounds: Bounds<'_>,
) {
    let interior = (bounds.n() - 2) as f32;
    let a = dt * rate * interior * interior;
    lin_solve(kind, x, x0, a, 1.0 + 4.0 * a, iterations, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 12;

    fn interior_sum(x: &[f32], b: Bounds<'_>) -> f64 {
        let mut sum = 0.0;
        for j in 1..N - 1 {
            for i in 1..N - 1 {
                sum += x[b.ix(i, j)] as f64;
            }
        }
        sum
    }

    fn blob() -> Vec<f32> {
        let mut x0 = vec![0.0; N * N];
        for j in 3..9 {
            for i in 3..9 {
                x0[i + j * N] = ((i * 7 + j * 3) % 10) as f32;
            }
        }
        x0
    }

    #[test]
    fn diffusion_is_mass_neutral_with_closed_walls() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let x0 = blob();
        let mut x = vec![0.0; N * N];

        diffuse(BoundaryKind::Scalar, &mut x, &x0, 0.01, 0.1, 40, b);

        let before = interior_sum(&x0, b);
        let after = interior_sum(&x, b);
        assert!((before - after).abs() < 1e-3 * before, "{} vs {}", before, after);
    }

    #[test]
    fn diffusion_smooths_peaks() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut x0 = vec![0.0; N * N];
        x0[b.ix(6, 6)] = 100.0;
        let mut x = vec![0.0; N * N];

        diffuse(BoundaryKind::Scalar, &mut x, &x0, 0.01, 0.1, 20, b);

        assert!(x[b.ix(6, 6)] < 100.0);
        for (i, j) in [(5, 6), (7, 6), (6, 5), (6, 7)] {
            assert!(x[b.ix(i, j)] > 0.0);
        }
    }

    #[test]
    fn zero_rate_is_a_copy() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let x0 = blob();
        let mut x = vec![0.0; N * N];

        diffuse(BoundaryKind::Scalar, &mut x, &x0, 0.0, 0.1, 4, b);

        assert_eq!(interior_sum(&x, b), interior_sum(&x0, b));
        assert_eq!(x[b.ix(5, 5)], x0[b.ix(5, 5)]);
    }
}
