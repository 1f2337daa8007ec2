//! Microtime Ports
//!
//! Port definitions (traits) for the Microtime value type.
//! These define the boundaries between the timestamp logic and the host
//! calendar library or clock it reads from.

mod calendar;
mod clock;
mod error;

use chrono::{DateTime, Utc};

pub use calendar::CalendarTime;
pub use clock::Clock;
pub use error::{MicrotimeError, MicrotimeResult};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
