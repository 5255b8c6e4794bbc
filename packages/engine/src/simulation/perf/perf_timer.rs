/// Milliseconds on a monotonic-enough clock: the browser's `Date` on wasm32
/// (no `Instant` there), a process-wide `Instant` anchor elsewhere.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    let now = js_sys::Date::now();

    #[cfg(not(target_arch = "wasm32"))]
    let now = {
        static ANCHOR: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
        ANCHOR.get_or_init(std::time::Instant::now).elapsed().as_secs_f64() * 1000.0
    };

    now
}

/// Phase stopwatch for the step loop
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        // Date::now can step backwards
        (now_ms() - self.start_ms).max(0.0)
    }

    /// Milliseconds since the last lap (or start), then restart.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let ms = (now - self.start_ms).max(0.0);
        self.start_ms = now;
        ms
    }
}
