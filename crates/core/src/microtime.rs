use microtime_ports::{MicrotimeError, Timestamp};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::format;
use crate::traits::Microtimestamp;

const MICROS_PER_SECOND: u32 = 1_000_000;

/// An instant resolved to whole microseconds
///
/// Stored as whole seconds since the Unix epoch plus microseconds-of-second.
/// Values are immutable; every conversion returns a new value.
///
/// ```
/// use microtime_core::{Microtime, Microtimestamp};
///
/// let time = Microtime::from_string("0.66153000 1590417215").unwrap();
/// assert_eq!(time.to_string(), "1590417215661530");
/// assert_eq!(time.to_int(), 1_590_417_215_661_530);
/// assert_eq!(time.to_microtime(), "0.66153000 1590417215");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Microtime {
    seconds: i64,
    micros: u32,
}

impl Microtimestamp for Microtime {
    fn from_parts(seconds: i64, micros: u32) -> Self {
        Self {
            seconds: seconds.saturating_add(i64::from(micros / MICROS_PER_SECOND)),
            micros: micros % MICROS_PER_SECOND,
        }
    }

    fn seconds(&self) -> i64 {
        self.seconds
    }

    fn subsec_micros(&self) -> u32 {
        self.micros
    }
}

impl fmt::Display for Microtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_text(f, self.seconds, self.micros)
    }
}

impl FromStr for Microtime {
    type Err = MicrotimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Microtime {
    type Error = MicrotimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

/// Microseconds since the epoch
impl From<i64> for Microtime {
    fn from(micros: i64) -> Self {
        Self::from_int(micros)
    }
}

impl From<Timestamp> for Microtime {
    fn from(date_time: Timestamp) -> Self {
        Self::from_date_time(&date_time)
    }
}

impl From<SystemTime> for Microtime {
    fn from(time: SystemTime) -> Self {
        Self::from_date_time(&time)
    }
}

impl From<Microtime> for Timestamp {
    fn from(time: Microtime) -> Self {
        time.to_date_time()
    }
}

impl From<Microtime> for SystemTime {
    fn from(time: Microtime) -> Self {
        time.to_system_time()
    }
}
