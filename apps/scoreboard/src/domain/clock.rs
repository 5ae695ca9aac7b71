//! Time source for the engine.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};

/// Supplies the current wall-clock time. Holds no engine state.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> OffsetDateTime;
}

/// UTC system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Settable clock shared between clones; tests drive time with it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: OffsetDateTime) {
        *self.now.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    pub fn advance_ms(&self, ms: i64) {
        self.advance(Duration::milliseconds(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}

/// Whole milliseconds from `since` to `now`, clamped at zero.
pub fn millis_between(since: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let ms = (now - since).whole_milliseconds();
    ms.clamp(0, i64::MAX as i128) as i64
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(datetime!(2024-03-01 18:00 UTC));
        let other = clock.clone();

        clock.advance_ms(1_500);
        assert_eq!(other.now(), datetime!(2024-03-01 18:00:01.5 UTC));

        other.set(datetime!(2024-03-02 09:00 UTC));
        assert_eq!(clock.now(), datetime!(2024-03-02 09:00 UTC));
    }

    #[test]
    fn millis_between_clamps_backwards_time() {
        let t0 = datetime!(2024-03-01 18:00 UTC);
        let t1 = datetime!(2024-03-01 18:00:02.250 UTC);
        assert_eq!(millis_between(t0, t1), 2_250);
        assert_eq!(millis_between(t1, t0), 0);
    }
}
