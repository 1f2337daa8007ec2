use chrono::Utc;
use microtime_ports::{Clock, Timestamp};

/// Wall clock behind `Microtime::from_now`-style captures
///
/// Reads `Utc::now()` on every call; successive readings follow the host
/// clock, including any step it takes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_reads_wall_time() {
        let clock = SystemClock::new();
        let before = Utc::now();
        let captured = clock.now();
        let after = Utc::now();

        assert!(before <= captured && captured <= after);
        assert!(captured.timestamp() > 0);
    }

    #[test]
    fn test_system_clock_has_microsecond_fraction() {
        let captured = SystemClock::new().now();
        assert!(captured.timestamp_subsec_micros() < 1_000_000);
    }

    #[test]
    fn test_system_clock_name() {
        assert_eq!(SystemClock::new().name(), "SystemClock");
    }
}
