//! Microtime Core
//!
//! A timestamp resolved to whole microseconds since the Unix epoch, with
//! conversions to and from the representations timestamps usually travel in:
//!
//! | Representation | Example | Constructor | Exporter |
//! |---|---|---|---|
//! | microseconds (integer) | `1590417215661530` | `from_int`, `from_microseconds` | `to_int` |
//! | microseconds (text) | `"1590417215661530"` | `from_string` | `to_string` |
//! | seconds (integer) | `1590417215` | `from_seconds` | |
//! | seconds (float) | `1590417215.66153` | `from_float` | `to_float` |
//! | microtime text | `"0.66153000 1590417215"` | `from_microtime` | `to_microtime` |
//! | calendar date-time | `DateTime<Utc>`, `SystemTime` | `from_date_time` | `to_date_time`, `to_system_time` |
//!
//! The conversions are defined once on the [`Microtimestamp`] trait.
//! [`Microtime`] stores a seconds + microseconds pair and [`PackedMicrotime`]
//! stores a single microsecond count; both behave identically.
//!
//! Float conversions lose precision once the second count needs more digits
//! than an `f64` mantissa holds. That loss is kept as-is.
//!
//! This crate contains no async and no I/O apart from reading the clock.

pub mod format;
mod microtime;
mod packed;
mod serialization;
mod traits;

pub use microtime::Microtime;
pub use packed::PackedMicrotime;
pub use traits::Microtimestamp;

// Re-export port types used in signatures
pub use microtime_ports::{CalendarTime, Clock, MicrotimeError, MicrotimeResult, Timestamp};
