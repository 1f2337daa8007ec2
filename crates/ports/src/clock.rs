use crate::Timestamp;

/// Source a timestamp is captured from
///
/// `from_clock` reads exactly one instant per call, so a fixed clock makes
/// captures reproducible while the wall clock gives live values.
pub trait Clock: Send + Sync {
    /// Current instant of this source, in UTC
    fn now(&self) -> Timestamp;

    /// Label used when logging which source produced a capture
    fn name(&self) -> &str {
        "Clock"
    }
}
