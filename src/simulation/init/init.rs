use crate::domain::config::FluidConfig;
use crate::error::FluidError;
use crate::field::FluidGrid;

use super::perf_stats::PerfStats;
use super::FluidCore;

pub(super) fn create_fluid_core(config: FluidConfig) -> Result<FluidCore, FluidError> {
    config.validate()?;
    let grid = FluidGrid::new(config.size)?;

    log::debug!(
        "fluid grid {}x{} (diffusion {}, viscosity {}, dt {}, {} iterations)",
        config.size,
        config.size,
        config.diffusion,
        config.viscosity,
        config.dt,
        config.iterations
    );

    Ok(FluidCore {
        config,
        grid,
        frame: 0,
        instability_reported: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
