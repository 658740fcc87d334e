use super::{set_bounds, BoundaryKind, Bounds};

/// Relax `x = (x0 + a * (sum of 4 neighbours of x)) / c` over the interior,
/// `iterations` sweeps, with a boundary pass after each sweep.
///
/// Sweeps update `x` in place, so cells later in the sweep already see the
/// new values of cells earlier in it (left and below neighbours). This is
/// the reference scheme and results are bit-compatible with it; it is not
/// textbook Jacobi. There is no residual-based early exit.
pub fn lin_solve(
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iterations: u32,
    bounds: Bounds<'_>,
) {
    debug_assert!(c != 0.0, "lin_solve: diagonal coefficient is zero");
    let n = bounds.n();
    let c_recip = 1.0 / c;

    for _ in 0..iterations {
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                let neighbours = *fast!(x, [bounds.ix(i + 1, j)])
                    + *fast!(x, [bounds.ix(i - 1, j)])
                    + *fast!(x, [bounds.ix(i, j + 1)])
                    + *fast!(x, [bounds.ix(i, j - 1)]);
                let v = (*fast!(x0, [bounds.ix(i, j)]) + a * neighbours) * c_recip;
                fast!(x, [bounds.ix(i, j)] = v);
            }
        }
        set_bounds(kind, x, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::test_support::noise_field;

    const N: usize = 9;

    #[test]
    fn zero_coupling_copies_the_source() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let x0 = noise_field(N, 21);
        let mut x = vec![0.0; N * N];

        lin_solve(BoundaryKind::Scalar, &mut x, &x0, 0.0, 1.0, 3, b);

        for j in 1..N - 1 {
            for i in 1..N - 1 {
                assert_eq!(x[b.ix(i, j)], x0[b.ix(i, j)]);
            }
        }
    }

    #[test]
    fn single_sweep_reads_updated_left_neighbour() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut x0 = vec![0.0; N * N];
        x0[b.ix(2, 2)] = 6.0;
        let mut x = vec![0.0; N * N];

        lin_solve(BoundaryKind::Scalar, &mut x, &x0, 1.0, 6.0, 1, b);

        // (2,2) = 6/6; (3,2) then sees the fresh 1.0 on its left: 1/6.
        assert_eq!(x[b.ix(2, 2)], 1.0);
        assert!((x[b.ix(3, 2)] - 1.0 / 6.0).abs() < 1e-7);
        // (1,2) was visited before (2,2) changed
        assert_eq!(x[b.ix(1, 2)], 0.0);
    }

    #[test]
    fn converges_to_the_linear_system() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let x0 = noise_field(N, 4);
        let mut x = vec![0.0; N * N];
        let (a, c) = (0.5, 3.0);

        lin_solve(BoundaryKind::Scalar, &mut x, &x0, a, c, 200, b);

        for j in 1..N - 1 {
            for i in 1..N - 1 {
                let neighbours = x[b.ix(i + 1, j)] + x[b.ix(i - 1, j)] + x[b.ix(i, j + 1)] + x[b.ix(i, j - 1)];
                let residual = c * x[b.ix(i, j)] - a * neighbours - x0[b.ix(i, j)];
                assert!(residual.abs() < 1e-4, "residual {} at ({}, {})", residual, i, j);
            }
        }
    }

    #[test]
    fn obstacle_cell_holds_reflection_not_relaxation() {
        let mut mask = vec![false; N * N];
        mask[4 + 4 * N] = true;
        let b = Bounds::new(N, &mask);
        let x0 = noise_field(N, 17);

        let mut vx = vec![0.0; N * N];
        lin_solve(BoundaryKind::VelocityX, &mut vx, &x0, 0.25, 2.0, 1, b);
        assert_eq!(vx[b.ix(4, 4)], -vx[b.ix(5, 4)]);

        let mut vy = vec![0.0; N * N];
        lin_solve(BoundaryKind::VelocityY, &mut vy, &x0, 0.25, 2.0, 1, b);
        assert_eq!(vy[b.ix(4, 4)], -vy[b.ix(4, 5)]);

        let mut s = vec![0.0; N * N];
        lin_solve(BoundaryKind::Scalar, &mut s, &x0, 0.25, 2.0, 1, b);
        assert_eq!(s[b.ix(4, 4)], 0.0);
    }
}
