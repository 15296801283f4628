/// Wall-clock milliseconds, matching `Date.now()` in the browser.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Stopwatch over `now_ms`, used to time placement cycles.
#[derive(Clone, Copy, Debug)]
pub struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub fn start() -> Self {
        Self { start_ms: now_ms() }
    }

    /// Never negative, even if the wall clock steps back.
    pub fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}
