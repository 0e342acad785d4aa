//! Lightweight timing for gesture and render hot paths.
//!
//! Gesture samples arrive at display rate, so the code they run (hit tests,
//! render passes) is instrumented with `profile_scope!`. The macro expands to
//! nothing unless the crate is built with the `profiling` feature:
//!
//! ```ignore
//! fn render(&self) {
//!     profile_scope!("render");
//!     // ...
//! }
//! ```

use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Budget for one frame at 60 FPS
pub const FRAME_BUDGET: Duration = Duration::from_micros(16_667);

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::FRAME_BUDGET);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $budget:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $budget);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget);
    };
}

pub use crate::profile_scope;

/// Logs how long it lived when dropped; warns if it exceeded its budget.
pub struct ScopedTimer {
    name: &'static str,
    budget: Duration,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, budget: Duration) -> Self {
        Self {
            name,
            budget,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        let ms = elapsed.as_secs_f64() * 1000.0;
        if elapsed > self.budget {
            warn!(operation = self.name, elapsed_ms = ms, "Slow operation");
        } else {
            trace!(operation = self.name, elapsed_ms = ms, "Timed operation");
        }
    }
}
