use crate::domain::config::validate_fade_rate;
use crate::error::FluidError;

use super::FluidCore;

pub(super) fn add_density(core: &mut FluidCore, x: u32, y: u32, amount: f32) -> Result<(), FluidError> {
    core.grid.add_density(x, y, amount)
}

pub(super) fn add_velocity(core: &mut FluidCore, x: u32, y: u32, dx: f32, dy: f32) -> Result<(), FluidError> {
    core.grid.add_velocity(x, y, dx, dy)
}

/// Clipped disc of a brush: on-grid bounding box plus squared radius.
/// The centre may lie off the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BrushDisc {
    cx: i64,
    cy: i64,
    r2: i128,
    x_lo: i64,
    x_hi: i64,
    y_lo: i64,
    y_hi: i64,
}

impl BrushDisc {
    fn new(size: u32, cx: i32, cy: i32, radius: u32) -> Self {
        let n = size as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        let r = radius as i64;
        Self {
            cx,
            cy,
            // u32 radius and i32 centres square past i64
            r2: (r as i128) * (r as i128),
            x_lo: (cx - r).max(0),
            x_hi: (cx + r).min(n - 1),
            y_lo: (cy - r).max(0),
            y_hi: (cy + r).min(n - 1),
        }
    }

    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        let (dx, dy) = ((x - self.cx) as i128, (y - self.cy) as i128);
        dx * dx + dy * dy <= self.r2
    }

    /// Visit the flat index of every covered cell, row by row.
    fn for_each(&self, size: u32, mut f: impl FnMut(usize)) -> u32 {
        let n = size as usize;
        let mut touched = 0;
        for y in self.y_lo..=self.y_hi {
            let row = y as usize * n;
            for x in self.x_lo..=self.x_hi {
                if self.contains(x, y) {
                    f(row + x as usize);
                    touched += 1;
                }
            }
        }
        touched
    }
}

pub(super) fn add_density_in_radius(core: &mut FluidCore, cx: i32, cy: i32, radius: u32, amount: f32) -> u32 {
    let size = core.grid.size();
    let density = &mut core.grid.density;
    BrushDisc::new(size, cx, cy, radius).for_each(size, |idx| {
        density[idx] += amount;
    })
}

pub(super) fn add_velocity_in_radius(
    core: &mut FluidCore,
    cx: i32,
    cy: i32,
    radius: u32,
    dx: f32,
    dy: f32,
) -> u32 {
    let size = core.grid.size();
    let (vx, vy) = (&mut core.grid.vx, &mut core.grid.vy);
    BrushDisc::new(size, cx, cy, radius).for_each(size, |idx| {
        vx[idx] += dx;
        vy[idx] += dy;
    })
}

pub(super) fn fade_density(core: &mut FluidCore, rate: f32) -> Result<(), FluidError> {
    validate_fade_rate(rate)?;
    core.grid.fade_density(rate);
    Ok(())
}

pub(super) fn clear(core: &mut FluidCore) {
    core.grid.clear();
    core.instability_reported = false;
}

pub(super) fn set_occupied(core: &mut FluidCore, x: u32, y: u32, occupied: bool) -> Result<(), FluidError> {
    core.grid.set_occupied(x, y, occupied)
}

pub(super) fn set_obstacle_mask(core: &mut FluidCore, mask: &[bool]) -> Result<(), FluidError> {
    core.grid.set_obstacle_mask(mask)?;
    log::debug!("obstacle mask replaced: {} occupied cells", core.grid.obstacle_count());
    Ok(())
}

pub(super) fn clear_obstacles(core: &mut FluidCore) {
    core.grid.clear_obstacles();
}
