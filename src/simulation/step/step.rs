use crate::error::FluidError;
use crate::solver::{advect, diffuse, project, BoundaryKind};

use super::perf_stats::saturating_count;
use super::{FluidCore, PerfTimer};

/// Linear solves per step: three diffusions plus two pressure solves.
const SOLVES_PER_STEP: u32 = 5;

pub(super) fn step(core: &mut FluidCore, iterations: u32) -> Result<(), FluidError> {
    if iterations == 0 {
        return Err(FluidError::invalid("iteration count must be at least 1"));
    }

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.grid_size = core.grid.size();
        core.perf_stats.cell_count = saturating_count(core.grid.len());
        core.perf_stats.memory_bytes = saturating_count(core.grid.memory_bytes());
        core.perf_stats.linear_solves = SOLVES_PER_STEP;
        core.perf_stats.relaxation_sweeps = SOLVES_PER_STEP.saturating_mul(iterations);
    }
    let step_start = PerfTimer::start_if(perf_on);

    let dt = core.config.dt;
    let viscosity = core.config.viscosity;
    let diffusion = core.config.diffusion;

    {
        let (bounds, buf) = core.grid.split_for_step();

        // === VELOCITY ===
        // Diffuse the live velocity into the staging buffers
        let t0 = PerfTimer::start_if(perf_on);
        diffuse(BoundaryKind::VelocityX, buf.vx_prev, buf.vx, viscosity, dt, iterations, bounds);
        diffuse(BoundaryKind::VelocityY, buf.vy_prev, buf.vy, viscosity, dt, iterations, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.diffuse_ms += t0.elapsed_ms();
        }

        // Live buffers are free until advection, use them as pressure/divergence scratch
        let t0 = PerfTimer::start_if(perf_on);
        project(buf.vx_prev, buf.vy_prev, buf.vx, buf.vy, iterations, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.project_ms += t0.elapsed_ms();
        }

        // Both components trace along the pre-advection (staging) velocity
        let t0 = PerfTimer::start_if(perf_on);
        advect(BoundaryKind::VelocityX, buf.vx, buf.vx_prev, buf.vx_prev, buf.vy_prev, dt, bounds);
        advect(BoundaryKind::VelocityY, buf.vy, buf.vy_prev, buf.vx_prev, buf.vy_prev, dt, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.advect_ms += t0.elapsed_ms();
        }

        let t0 = PerfTimer::start_if(perf_on);
        project(buf.vx, buf.vy, buf.vx_prev, buf.vy_prev, iterations, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.project_ms += t0.elapsed_ms();
        }

        // === DENSITY ===
        let t0 = PerfTimer::start_if(perf_on);
        diffuse(BoundaryKind::Scalar, buf.density_prev, buf.density, diffusion, dt, iterations, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.diffuse_ms += t0.elapsed_ms();
        }

        // Density rides the fully updated velocity
        let t0 = PerfTimer::start_if(perf_on);
        advect(BoundaryKind::Scalar, buf.density, buf.density_prev, buf.vx, buf.vy, dt, bounds);
        if let Some(t0) = t0 {
            core.perf_stats.advect_ms += t0.elapsed_ms();
        }
    }

    core.frame += 1;

    if core.config.check_stability {
        let t0 = PerfTimer::start_if(perf_on);
        scan_for_instability(core);
        if let Some(t0) = t0 {
            core.perf_stats.stability_ms = t0.elapsed_ms();
        }
    }

    if let Some(start) = step_start {
        core.perf_stats.step_ms = start.elapsed_ms();
    }

    Ok(())
}

/// `step` with the configured iterations, then the configured density fade.
pub(super) fn tick(core: &mut FluidCore) -> Result<(), FluidError> {
    let iterations = core.config.iterations;
    let fade_rate = core.config.fade_rate;
    step(core, iterations)?;
    core.grid.fade_density(fade_rate);
    Ok(())
}

/// Non-fatal: warn once when the fields first go non-finite.
fn scan_for_instability(core: &mut FluidCore) {
    let counts = core.grid.non_finite_cells();
    let total: usize = counts.iter().map(|(_, cells)| cells).sum();
    core.perf_stats.non_finite_cells = total as u32;

    if total == 0 {
        core.instability_reported = false;
        return;
    }
    if !core.instability_reported {
        core.instability_reported = true;
        log::warn!(
            "fluid went non-finite at frame {} (density: {}, vx: {}, vy: {} cells)",
            core.frame,
            counts[0].1,
            counts[1].1,
            counts[2].1
        );
    }
}
