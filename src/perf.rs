//! Performance instrumentation for input hot paths.
//!
//! Pointer-move handlers run 60+ times per second during a drag, so timing
//! lives behind the `profiling` cargo feature and compiles to nothing
//! otherwise. Use the [`profile_scope!`](crate::profile_scope) macro:
//!
//! ```ignore
//! fn on_pointer_move(&mut self, ...) {
//!     profile_scope!("timeline_pointer_move");
//!     // ... hot path ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Default threshold above which a scope logs a warning, in milliseconds.
/// Half a 60 FPS frame; an input handler slower than this is visible.
pub const SLOW_SCOPE_MS: f64 = 8.0;

/// Time a scope with the given name. Zero-cost when the `profiling`
/// feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer: logs elapsed time when dropped, warning if the scope ran
/// longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self { name, threshold_ms, start: Instant::now() }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms = elapsed, "slow input scope");
        } else {
            trace!(scope = self.name, elapsed_ms = elapsed, "scope timing");
        }
    }
}
