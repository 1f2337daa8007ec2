use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MAX_SUBSEC_MICROS: u32 = 999_999;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Port for the host calendar date-time library
///
/// A timestamp only needs four things from a calendar type: capture the
/// current instant, build one from epoch seconds plus a microsecond fraction,
/// and read those two fields back. Adapting a calendar library means
/// implementing this trait for its date-time type.
///
/// Pre-epoch values are split with floored seconds and a non-negative
/// fraction, the way chrono stores them.
pub trait CalendarTime: Sized {
    /// Capture the current wall-clock instant
    fn now() -> Self;

    /// Build a value from whole epoch seconds and microseconds-of-second
    ///
    /// Returns `None` when the instant is outside the type's range.
    fn from_epoch(seconds: i64, micros: u32) -> Option<Self>;

    /// Whole seconds since the Unix epoch
    fn epoch_seconds(&self) -> i64;

    /// Sub-second fraction truncated to microseconds, in `[0, 999_999]`
    fn subsec_micros(&self) -> u32;
}

impl CalendarTime for DateTime<Utc> {
    fn now() -> Self {
        Utc::now()
    }

    fn from_epoch(seconds: i64, micros: u32) -> Option<Self> {
        DateTime::from_timestamp(seconds, micros.checked_mul(1_000)?)
    }

    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }

    fn subsec_micros(&self) -> u32 {
        // Leap seconds report a fraction past one second.
        self.timestamp_subsec_micros().min(MAX_SUBSEC_MICROS)
    }
}

impl CalendarTime for DateTime<Local> {
    fn now() -> Self {
        Local::now()
    }

    fn from_epoch(seconds: i64, micros: u32) -> Option<Self> {
        DateTime::<Utc>::from_epoch(seconds, micros).map(|utc| utc.with_timezone(&Local))
    }

    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }

    fn subsec_micros(&self) -> u32 {
        self.timestamp_subsec_micros().min(MAX_SUBSEC_MICROS)
    }
}

/// Values built through this port carry a zero offset.
impl CalendarTime for DateTime<FixedOffset> {
    fn now() -> Self {
        Utc::now().fixed_offset()
    }

    fn from_epoch(seconds: i64, micros: u32) -> Option<Self> {
        DateTime::<Utc>::from_epoch(seconds, micros).map(|utc| utc.fixed_offset())
    }

    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }

    fn subsec_micros(&self) -> u32 {
        self.timestamp_subsec_micros().min(MAX_SUBSEC_MICROS)
    }
}

/// Naive values are read and written as UTC.
impl CalendarTime for NaiveDateTime {
    fn now() -> Self {
        Utc::now().naive_utc()
    }

    fn from_epoch(seconds: i64, micros: u32) -> Option<Self> {
        DateTime::<Utc>::from_epoch(seconds, micros).map(|utc| utc.naive_utc())
    }

    fn epoch_seconds(&self) -> i64 {
        self.and_utc().timestamp()
    }

    fn subsec_micros(&self) -> u32 {
        self.and_utc().timestamp_subsec_micros().min(MAX_SUBSEC_MICROS)
    }
}

impl CalendarTime for SystemTime {
    fn now() -> Self {
        SystemTime::now()
    }

    fn from_epoch(seconds: i64, micros: u32) -> Option<Self> {
        let whole = Duration::from_secs(seconds.unsigned_abs());
        let base = if seconds >= 0 {
            UNIX_EPOCH.checked_add(whole)?
        } else {
            UNIX_EPOCH.checked_sub(whole)?
        };
        base.checked_add(Duration::from_micros(u64::from(micros)))
    }

    fn epoch_seconds(&self) -> i64 {
        system_time_parts(self).0
    }

    fn subsec_micros(&self) -> u32 {
        system_time_parts(self).1
    }
}

/// Split a `SystemTime` into floored epoch seconds and microseconds-of-second
fn system_time_parts(time: &SystemTime) -> (i64, u32) {
    let nanos = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_nanos() as i128,
        Err(before) => -(before.duration().as_nanos() as i128),
    };

    let seconds = nanos.div_euclid(NANOS_PER_SECOND);
    let micros = (nanos.rem_euclid(NANOS_PER_SECOND) / 1_000) as u32;

    let seconds = i64::try_from(seconds).unwrap_or(if seconds < 0 { i64::MIN } else { i64::MAX });
    (seconds, micros)
}
