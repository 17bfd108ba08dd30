//! Minimum-interval write guard
//!
//! Training-progress saves fire on every interaction; persisting each one
//! would hammer the backend. [`SaveThrottle`] enforces the contract
//! "at most one write per interval" with a last-write timestamp, free of
//! any UI-framework lifecycle.

use std::time::{Duration, Instant};

use tracing::trace;

/// Default minimum interval between progress writes
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(5);

/// Last-write-timestamp guard over a minimum write interval
///
/// The first call to [`SaveThrottle::try_write`] always passes; each
/// subsequent call passes only after the configured interval has elapsed
/// since the last passing call. Suppressed calls do not push the window
/// out.
#[derive(Debug)]
pub struct SaveThrottle {
    min_interval: Duration,
    last_write: Option<Instant>,
}

impl SaveThrottle {
    /// Creates a throttle with the default 5-second interval
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_MIN_INTERVAL)
    }

    /// Creates a throttle with a custom minimum interval
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_write: None,
        }
    }

    /// Returns true if a write is permitted now, recording the timestamp
    ///
    /// Returns false while the interval since the last permitted write
    /// has not elapsed.
    pub fn try_write(&mut self) -> bool {
        let now = Instant::now();
        match self.last_write {
            Some(last) if now.duration_since(last) < self.min_interval => {
                trace!("progress write suppressed by throttle");
                false
            }
            _ => {
                self.last_write = Some(now);
                true
            }
        }
    }

    /// Time until the next write is permitted; zero if permitted now
    pub fn time_until_ready(&self) -> Duration {
        match self.last_write {
            Some(last) => self
                .min_interval
                .saturating_sub(Instant::now().duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl Default for SaveThrottle {
    fn default() -> Self {
        Self::new()
    }
}
