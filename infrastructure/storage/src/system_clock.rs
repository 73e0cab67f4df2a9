use business::domain::clock::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock implementation of the clock port.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
