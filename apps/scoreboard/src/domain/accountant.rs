//! Elapsed-time bookkeeping for the open turn.
//!
//! No timer runs in the background: the elapsed value is derived on read as
//! `accumulated_ms + (paused ? 0 : now - since)`, so pausing and resuming
//! never drifts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::clock::millis_between;

/// Running accumulator of the currently open turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    pub accumulated_ms: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub since: OffsetDateTime,
    pub is_paused: bool,
}

impl TurnClock {
    /// A fresh, running turn starting at `now`.
    pub fn started(now: OffsetDateTime) -> Self {
        Self {
            accumulated_ms: 0,
            since: now,
            is_paused: false,
        }
    }

    /// Elapsed time of the open turn as of `now`.
    pub fn elapsed_ms(&self, now: OffsetDateTime) -> i64 {
        if self.is_paused {
            self.accumulated_ms
        } else {
            self.accumulated_ms
                .saturating_add(millis_between(self.since, now))
        }
    }

    /// Fold the running interval and stop. Returns false if already paused.
    pub fn pause(&mut self, now: OffsetDateTime) -> bool {
        if self.is_paused {
            return false;
        }
        self.accumulated_ms = self.elapsed_ms(now);
        self.since = now;
        self.is_paused = true;
        debug!(accumulated_ms = self.accumulated_ms, "turn clock paused");
        true
    }

    /// Restart the running interval. Returns false if not paused.
    pub fn resume(&mut self, now: OffsetDateTime) -> bool {
        if !self.is_paused {
            return false;
        }
        self.since = now;
        self.is_paused = false;
        debug!(accumulated_ms = self.accumulated_ms, "turn clock resumed");
        true
    }

    /// Close the open turn: return its total elapsed time and reset the
    /// accumulator for the next turn. The pause flag is left as is.
    pub fn close_interval(&mut self, now: OffsetDateTime) -> i64 {
        let closed = self.elapsed_ms(now);
        self.accumulated_ms = 0;
        self.since = now;
        debug!(closed_ms = closed, "turn interval closed");
        closed
    }

    /// Reopen a previously closed turn with its frozen duration, running from `now`.
    pub fn reopen(duration_ms: i64, now: OffsetDateTime) -> Self {
        Self {
            accumulated_ms: duration_ms.max(0),
            since: now,
            is_paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use time::macros::datetime;
    use time::Duration;

    use super::*;

    const T0: OffsetDateTime = datetime!(2024-03-01 18:00 UTC);

    fn at(ms: i64) -> OffsetDateTime {
        T0 + Duration::milliseconds(ms)
    }

    #[test]
    fn running_clock_grows_with_wall_time() {
        let clock = TurnClock::started(T0);
        assert_eq!(clock.elapsed_ms(T0), 0);
        assert_eq!(clock.elapsed_ms(at(4_000)), 4_000);
    }

    #[test]
    fn pause_freezes_and_is_idempotent() {
        let mut clock = TurnClock::started(T0);
        assert!(clock.pause(at(1_000)));
        let once = clock;
        assert!(!clock.pause(at(5_000)));
        assert_eq!(clock, once);
        assert_eq!(clock.elapsed_ms(at(60_000)), 1_000);
    }

    #[test]
    fn resume_is_idempotent() {
        let mut clock = TurnClock::started(T0);
        clock.pause(at(1_000));
        assert!(clock.resume(at(2_000)));
        let once = clock;
        assert!(!clock.resume(at(3_000)));
        assert_eq!(clock, once);
        assert_eq!(clock.elapsed_ms(at(2_500)), 1_500);
    }

    #[test]
    fn close_interval_resets_for_next_turn() {
        let mut clock = TurnClock::started(T0);
        clock.pause(at(700));
        clock.resume(at(1_000));
        assert_eq!(clock.close_interval(at(1_300)), 1_000);
        assert_eq!(clock.accumulated_ms, 0);
        assert_eq!(clock.since, at(1_300));
        assert_eq!(clock.elapsed_ms(at(1_800)), 500);
    }

    #[test]
    fn close_interval_while_paused_keeps_pause() {
        let mut clock = TurnClock::started(T0);
        clock.pause(at(2_000));
        assert_eq!(clock.close_interval(at(9_000)), 2_000);
        assert!(clock.is_paused);
        assert_eq!(clock.elapsed_ms(at(20_000)), 0);
    }

    #[test]
    fn reopen_runs_from_frozen_duration() {
        let clock = TurnClock::reopen(3_000, at(10_000));
        assert!(!clock.is_paused);
        assert_eq!(clock.elapsed_ms(at(10_000)), 3_000);
        assert_eq!(clock.elapsed_ms(at(11_000)), 4_000);
    }

    proptest! {
        #[test]
        fn pausing_subtracts_exactly_the_paused_interval(
            t1 in 0i64..1_000_000,
            paused_for in 0i64..1_000_000,
            after in 0i64..1_000_000,
        ) {
            let t2 = t1 + paused_for;
            let t3 = t2 + after;

            let never_paused = TurnClock::started(T0);

            let mut paused = TurnClock::started(T0);
            paused.pause(at(t1));
            paused.resume(at(t2));

            prop_assert_eq!(
                paused.elapsed_ms(at(t3)),
                never_paused.elapsed_ms(at(t3)) - (t2 - t1)
            );
        }
    }
}
