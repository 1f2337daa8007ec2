use chrono::{DateTime, Utc};
use microtime_ports::{CalendarTime, Clock, MicrotimeResult, Timestamp};
use std::fmt;
use std::time::SystemTime;

use crate::format::{self, MICROS_PER_SECOND, Shape};

/// Public contract of a microsecond timestamp
///
/// Implementors supply a representation through three primitives:
/// [`from_parts`](Microtimestamp::from_parts),
/// [`seconds`](Microtimestamp::seconds) and
/// [`subsec_micros`](Microtimestamp::subsec_micros).
/// Every constructor and exporter is built on those, so two representations
/// of the same instant always produce the same text and numbers.
///
/// `Display` is the string export: whole seconds immediately followed by
/// the six-digit microseconds, e.g. `"1590417215661530"`.
///
/// Instants before the epoch keep a non-negative microseconds-of-second, but
/// their text forms are unsupported: `Display` and
/// [`to_microtime`](Microtimestamp::to_microtime) do not round-trip them.
pub trait Microtimestamp: Sized + Copy + fmt::Display {
    /// Build from whole seconds and microseconds-of-second
    ///
    /// Microseconds past `999_999` carry into the seconds.
    fn from_parts(seconds: i64, micros: u32) -> Self;

    /// Whole seconds since the Unix epoch
    fn seconds(&self) -> i64;

    /// Microseconds-of-second, in `[0, 999_999]`
    fn subsec_micros(&self) -> u32;

    /// Capture the current wall-clock time
    fn from_now() -> Self {
        Self::from_date_time(&<Timestamp as CalendarTime>::now())
    }

    /// Capture the current time of `clock`
    fn from_clock(clock: &dyn Clock) -> Self {
        Self::from_date_time(&clock.now())
    }

    /// Parse any of the accepted string layouts
    ///
    /// - `"0.mmmmmmmm ssssssssss"`: microtime text
    /// - `"mmmmmmmmmmmmmmmm"`: microseconds since the epoch
    /// - `"ssssssssss.mmmmmm"`: float seconds since the epoch
    ///
    /// See [`Shape::detect`] for how ambiguous text is resolved.
    fn from_string(text: &str) -> MicrotimeResult<Self> {
        match Shape::detect(text)? {
            Shape::Microtime => Self::from_microtime(text),
            Shape::Microseconds(micros) => Ok(Self::from_int(micros)),
            Shape::Seconds(seconds) => Ok(Self::from_float(seconds)),
        }
    }

    /// Microseconds since the epoch
    fn from_int(int: i64) -> Self {
        Self::from_microseconds(int)
    }

    /// Float seconds since the epoch
    ///
    /// Only the fraction digits the float actually shows are kept, so large
    /// second counts lose microseconds.
    fn from_float(float: f64) -> Self {
        let (seconds, micros) = format::split_float(float);
        Self::from_parts(seconds, micros)
    }

    /// Microseconds since the epoch
    fn from_microseconds(micros: i64) -> Self {
        Self::from_parts(
            micros.div_euclid(MICROS_PER_SECOND),
            micros.rem_euclid(MICROS_PER_SECOND) as u32,
        )
    }

    /// Whole seconds since the epoch
    fn from_seconds(seconds: i64) -> Self {
        Self::from_parts(seconds, 0)
    }

    /// Parse `"0.mmmmmmmm ssssssssss"` text
    ///
    /// Only the first six fraction digits are read.
    fn from_microtime(text: &str) -> MicrotimeResult<Self> {
        let (seconds, micros) = format::parse_microtime(text)?;
        Ok(Self::from_parts(seconds, micros))
    }

    /// Read an instant from a calendar value, truncated to microseconds
    fn from_date_time<D: CalendarTime>(date_time: &D) -> Self {
        Self::from_parts(date_time.epoch_seconds(), date_time.subsec_micros())
    }

    /// Microseconds since the epoch, saturating at the `i64` bounds
    fn to_int(&self) -> i64 {
        self.seconds()
            .saturating_mul(MICROS_PER_SECOND)
            .saturating_add(i64::from(self.subsec_micros()))
    }

    /// Float seconds since the epoch
    fn to_float(&self) -> f64 {
        format::float_seconds(self.seconds(), self.subsec_micros())
    }

    /// `"0.mmmmmm00 ssssssssss"`, the layout [`from_microtime`](Microtimestamp::from_microtime) reads
    fn to_microtime(&self) -> String {
        format::microtime_text(self.seconds(), self.subsec_micros())
    }

    /// Convert to any calendar type, `None` if it cannot hold the instant
    fn to_calendar<D: CalendarTime>(&self) -> Option<D> {
        D::from_epoch(self.seconds(), self.subsec_micros())
    }

    /// Owned UTC date-time, clamped to chrono's supported range
    fn to_date_time(&self) -> Timestamp {
        self.to_calendar().unwrap_or(if self.seconds() < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Same instant as a standard library `SystemTime`
    fn to_system_time(&self) -> SystemTime {
        self.to_calendar()
            .unwrap_or_else(|| SystemTime::from(self.to_date_time()))
    }

    /// True for instants before 1970-01-01T00:00:00Z
    fn is_pre_epoch(&self) -> bool {
        self.seconds() < 0
    }
}
