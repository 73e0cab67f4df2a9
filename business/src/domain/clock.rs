use chrono::{DateTime, Utc};

/// Time source for cooldowns, cache expiry and record timestamps.
/// Kept behind a trait so tests can pin the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch, the unit stored in rate-limit and
    /// cache records.
    fn now_millis(&self) -> i64;
}
