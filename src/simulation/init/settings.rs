use super::perf_stats::PerfStats;
use super::FluidCore;

pub(super) fn enable_perf_metrics(core: &mut FluidCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &FluidCore) -> PerfStats {
    core.perf_stats.clone()
}
