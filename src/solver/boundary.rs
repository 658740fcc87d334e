use super::Bounds;

/// Which reflection policy a buffer gets at walls and obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Density, pressure, divergence: copied at walls, zeroed inside obstacles.
    Scalar,
    /// Horizontal velocity: negated across the left/right walls.
    VelocityX,
    /// Vertical velocity: negated across the top/bottom walls.
    VelocityY,
}

/// Enforce walls and obstacles on `x`.
///
/// Order matters: obstacle cells first (each reads its forward neighbour
/// before that neighbour is rewritten), then the four edges from the
/// adjacent interior line, then corners as the mean of their two edge
/// neighbours.
pub fn set_bounds(kind: BoundaryKind, x: &mut [f32], bounds: Bounds<'_>) {
    let n = bounds.n();

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            if bounds.is_obstacle(i, j) {
                let v = match kind {
                    BoundaryKind::VelocityX => -*fast!(x, [bounds.ix(i + 1, j)]),
                    BoundaryKind::VelocityY => -*fast!(x, [bounds.ix(i, j + 1)]),
                    BoundaryKind::Scalar => 0.0,
                };
                fast!(x, [bounds.ix(i, j)] = v);
            }
        }
    }

    let flip_x = if kind == BoundaryKind::VelocityX { -1.0 } else { 1.0 };
    let flip_y = if kind == BoundaryKind::VelocityY { -1.0 } else { 1.0 };
    for k in 1..n - 1 {
        x[bounds.ix(0, k)] = flip_x * x[bounds.ix(1, k)];
        x[bounds.ix(n - 1, k)] = flip_x * x[bounds.ix(n - 2, k)];
        x[bounds.ix(k, 0)] = flip_y * x[bounds.ix(k, 1)];
        x[bounds.ix(k, n - 1)] = flip_y * x[bounds.ix(k, n - 2)];
    }

    x[bounds.ix(0, 0)] = 0.5 * (x[bounds.ix(1, 0)] + x[bounds.ix(0, 1)]);
    x[bounds.ix(0, n - 1)] = 0.5 * (x[bounds.ix(1, n - 1)] + x[bounds.ix(0, n - 2)]);
    x[bounds.ix(n - 1, 0)] = 0.5 * (x[bounds.ix(n - 2, 0)] + x[bounds.ix(n - 1, 1)]);
    x[bounds.ix(n - 1, n - 1)] = 0.5 * (x[bounds.ix(n - 2, n - 1)] + x[bounds.ix(n - 1, n - 2)]);
}
