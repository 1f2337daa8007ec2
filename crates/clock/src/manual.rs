use chrono::Duration;
use microtime_ports::{Clock, Timestamp};
use std::sync::{PoisonError, RwLock};

/// Clock frozen at a fixed instant
///
/// Time only moves through [`ManualClock::advance`] or
/// [`ManualClock::set_time`], which makes captured timestamps deterministic
/// in tests.
#[derive(Debug)]
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `initial_time`
    pub fn new(initial_time: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(initial_time),
        }
    }

    /// Move the clock forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut current = self
            .current_time
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current += duration;
    }

    /// Explicitly set the clock time
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self
            .current_time
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = time;
    }

    /// Read the frozen time
    pub fn time(&self) -> Timestamp {
        *self
            .current_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.time()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
