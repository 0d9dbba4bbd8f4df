//! Lightweight operation timing.
//!
//! Public operations wrap their body in a [`Timer`]; elapsed time is reported
//! through `tracing` at debug level. Timing is off unless enabled
//! programmatically or via the `TC_TIMING` environment variable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable operation timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable operation timing globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("TC_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and emit the result if enabled.
    pub fn stop_and_report(self) {
        let label = self.label;
        if let Some(elapsed) = self.stop() {
            tracing::debug!(operation = label, elapsed_ms = elapsed * 1e3, "timing");
        }
    }
}

/// Run `f` inside a [`Timer`] labelled `label`.
pub fn timed<T>(label: &'static str, f: impl FnOnce() -> T) -> T {
    let timer = Timer::start(label);
    let out = f();
    timer.stop_and_report();
    out
}
