//! Microtime Clock Infrastructure
//!
//! Provides the time sources a `Microtime` can be captured from:
//!
//! - [`SystemClock`]: the real wall clock
//! - [`ManualClock`]: frozen time that only moves when told to
//!
//! ## Usage
//!
//! ```ignore
//! use microtime_clock::{ManualClock, SystemClock};
//! use microtime_core::{Microtime, Microtimestamp};
//! use chrono::{DateTime, Duration};
//!
//! let live = Microtime::from_clock(&SystemClock::new());
//!
//! let start = DateTime::from_timestamp(1_590_417_215, 661_530_000).unwrap();
//! let clock = ManualClock::new(start);
//! clock.advance(Duration::microseconds(1));
//! assert_eq!(Microtime::from_clock(&clock).to_int(), 1_590_417_215_661_531);
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use microtime_ports::Clock;
