use super::{set_bounds, BoundaryKind, Bounds};

/// Semi-Lagrangian transport of `d0` into `d` along (vx, vy).
///
/// Each interior cell traces back `dt * (N - 2)` grid units and resamples
/// `d0` bilinearly. Trace points are clamped to `[0.5, N - 1.5]` so the
/// stencil never leaves the grid. Obstacles do not stop the trace, so
/// density can cross a one-cell wall when the velocity is large.
pub fn advect(
    kind: BoundaryKind,
    d: &mut [f32],
    d0: &[f32],
    vx: &[f32],
    vy: &[f32],
    dt: f32,
    bounds: Bounds<'_>,
) {
    let n = bounds.n();
    let dt0 = dt * (n - 2) as f32;
    let max = n as f32 - 1.5;

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let idx = bounds.ix(i, j);
            let mut x = i as f32 - dt0 * *fast!(vx, [idx]);
            let mut y = j as f32 - dt0 * *fast!(vy, [idx]);

            if x < 0.5 { x = 0.5; }
            if x > max { x = max; }
            if y < 0.5 { y = 0.5; }
            if y > max { y = max; }

            // NaN traces cast to 0 and stay inside the grid
            let i0 = x as usize;
            let i1 = i0 + 1;
            let j0 = y as usize;
            let j1 = j0 + 1;

            let s1 = x - i0 as f32;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f32;
            let t0 = 1.0 - t1;

            let v = s0 * (t0 * *fast!(d0, [bounds.ix(i0, j0)]) + t1 * *fast!(d0, [bounds.ix(i0, j1)]))
                + s1 * (t0 * *fast!(d0, [bounds.ix(i1, j0)]) + t1 * *fast!(d0, [bounds.ix(i1, j1)]));
            fast!(d, [idx] = v);
        }
    }

    set_bounds(kind, d, bounds);
}
