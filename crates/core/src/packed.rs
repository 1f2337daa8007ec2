use microtime_ports::MicrotimeError;
use std::fmt;
use std::str::FromStr;

use crate::format::{self, MICROS_PER_SECOND};
use crate::microtime::Microtime;
use crate::traits::Microtimestamp;

/// An instant stored as a single count of microseconds since the epoch
///
/// Same contract as [`Microtime`] in eight bytes. Instants beyond
/// `i64::MAX` microseconds (roughly year 294247) saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedMicrotime(i64);

impl Microtimestamp for PackedMicrotime {
    fn from_parts(seconds: i64, micros: u32) -> Self {
        Self(
            seconds
                .saturating_mul(MICROS_PER_SECOND)
                .saturating_add(i64::from(micros)),
        )
    }

    fn seconds(&self) -> i64 {
        self.0.div_euclid(MICROS_PER_SECOND)
    }

    fn subsec_micros(&self) -> u32 {
        self.0.rem_euclid(MICROS_PER_SECOND) as u32
    }

    fn from_microseconds(micros: i64) -> Self {
        Self(micros)
    }

    fn to_int(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PackedMicrotime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_text(f, self.seconds(), self.subsec_micros())
    }
}

impl FromStr for PackedMicrotime {
    type Err = MicrotimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Microtime> for PackedMicrotime {
    fn from(time: Microtime) -> Self {
        Self::from_parts(time.seconds(), time.subsec_micros())
    }
}

impl From<PackedMicrotime> for Microtime {
    fn from(time: PackedMicrotime) -> Self {
        Self::from_parts(time.seconds(), time.subsec_micros())
    }
}
