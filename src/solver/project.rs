use super::{lin_solve, set_bounds, BoundaryKind, Bounds};

/// Negative central-difference divergence of (vx, vy) at interior cell (i, j),
/// scaled by the cell size `1/N`.
#[inline]
pub fn divergence_at(vx: &[f32], vy: &[f32], i: usize, j: usize, bounds: Bounds<'_>) -> f32 {
    let n = bounds.n() as f32;
    -0.5 * (*fast!(vx, [bounds.ix(i + 1, j)]) - *fast!(vx, [bounds.ix(i - 1, j)])
        + *fast!(vy, [bounds.ix(i, j + 1)])
        - *fast!(vy, [bounds.ix(i, j - 1)]))
        / n
}

/// Remove the divergent part of (vx, vy).
///
/// `p` and `div` are scratch: both are overwritten. After the call `p` holds
/// the pressure solution and `div` the pre-projection divergence.
pub fn project(
    vx: &mut [f32],
    vy: &mut [f32],
    p: &mut [f32],
    div: &mut [f32],
    iterations: u32,
    bounds: Bounds<'_>,
) {
    let n = bounds.n();

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let d = divergence_at(vx, vy, i, j, bounds);
            fast!(div, [bounds.ix(i, j)] = d);
            fast!(p, [bounds.ix(i, j)] = 0.0);
        }
    }

    set_bounds(BoundaryKind::Scalar, div, bounds);
    set_bounds(BoundaryKind::Scalar, p, bounds);
    lin_solve(BoundaryKind::Scalar, p, div, 1.0, 4.0, iterations, bounds);

    let scale = 0.5;
    let nf = n as f32;
    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let idx = bounds.ix(i, j);
            let gx = scale * (*fast!(p, [bounds.ix(i + 1, j)]) - *fast!(p, [bounds.ix(i - 1, j)])) * nf;
            let gy = scale * (*fast!(p, [bounds.ix(i, j + 1)]) - *fast!(p, [bounds.ix(i, j - 1)])) * nf;
            let vx_new = *fast!(vx, [idx]) - gx;
            let vy_new = *fast!(vy, [idx]) - gy;
            fast!(vx, [idx] = vx_new);
            fast!(vy, [idx] = vy_new);
        }
    }

    set_bounds(BoundaryKind::VelocityX, vx, bounds);
    set_bounds(BoundaryKind::VelocityY, vy, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::test_support::noise_field;

    const N: usize = 10;

    fn divergence_norm(vx: &[f32], vy: &[f32], b: Bounds<'_>) -> (f64, f32) {
        let mut sum_sq = 0.0f64;
        let mut max = 0.0f32;
        for j in 1..N - 1 {
            for i in 1..N - 1 {
                let d = divergence_at(vx, vy, i, j, b);
                sum_sq += (d as f64) * (d as f64);
                max = max.max(d.abs());
            }
        }
        (sum_sq, max)
    }

    #[test]
    fn projection_reduces_divergence_of_a_jet() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut vx = vec![0.0; N * N];
        let mut vy = vec![0.0; N * N];
        vx[b.ix(5, 5)] = 1.0;
        vy[b.ix(3, 4)] = -0.5;
        let (before_sq, before_max) = divergence_norm(&vx, &vy, b);

        let mut p = vec![0.0; N * N];
        let mut div = vec![0.0; N * N];
        project(&mut vx, &mut vy, &mut p, &mut div, 20, b);

        let (after_sq, after_max) = divergence_norm(&vx, &vy, b);
        assert!(after_sq < before_sq, "{} !< {}", after_sq, before_sq);
        assert!(after_max < before_max, "{} !< {}", after_max, before_max);
    }

    #[test]
    fn projection_reduces_divergence_of_noise() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut vx = noise_field(N, 31);
        let mut vy = noise_field(N, 37);
        set_bounds(BoundaryKind::VelocityX, &mut vx, b);
        set_bounds(BoundaryKind::VelocityY, &mut vy, b);
        let (before_sq, _) = divergence_norm(&vx, &vy, b);

        let mut p = vec![0.0; N * N];
        let mut div = vec![0.0; N * N];
        project(&mut vx, &mut vy, &mut p, &mut div, 20, b);

        let (after_sq, _) = divergence_norm(&vx, &vy, b);
        assert!(after_sq < before_sq, "{} !< {}", after_sq, before_sq);
    }

    #[test]
    fn still_fluid_stays_still() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut vx = vec![0.0; N * N];
        let mut vy = vec![0.0; N * N];
        let mut p = noise_field(N, 2);
        let mut div = noise_field(N, 3);

        project(&mut vx, &mut vy, &mut p, &mut div, 4, b);

        assert!(vx.iter().chain(vy.iter()).all(|&v| v == 0.0));
        assert!(p.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn velocity_walls_hold_after_projection() {
        let mask = vec![false; N * N];
        let b = Bounds::new(N, &mask);
        let mut vx = noise_field(N, 41);
        let mut vy = noise_field(N, 43);
        let mut p = vec![0.0; N * N];
        let mut div = vec![0.0; N * N];

        project(&mut vx, &mut vy, &mut p, &mut div, 10, b);

        for k in 1..N - 1 {
            assert_eq!(vx[b.ix(0, k)], -vx[b.ix(1, k)]);
            assert_eq!(vy[b.ix(k, 0)], -vy[b.ix(k, 1)]);
        }
    }
}
