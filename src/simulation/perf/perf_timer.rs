//! Step timing. The browser build reads `Date.now()` (millisecond
//! resolution); native builds use a monotonic `Instant`.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[inline]
fn mark() -> Mark {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn millis_since(started: &Mark) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - started
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        started.elapsed().as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Mark,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started: mark() }
    }

    /// `None` while metrics are off; the clock is never read.
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(Self::start)
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_since(&self.started)
    }
}
