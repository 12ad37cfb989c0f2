//! The global simulated clock.

use crate::common::Tick;

/// Monotonically non-decreasing simulated time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    now: Tick,
}

impl Clock {
    /// A clock at time zero.
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Current time.
    #[inline(always)]
    pub const fn now(self) -> Tick {
        self.now
    }

    /// Moves forward by `duration`, returning the `(start, end)` of the interval.
    ///
    /// Returns `None`, leaving the clock untouched, if the end time is not
    /// representable.
    pub const fn advance_by(&mut self, duration: Tick) -> Option<(Tick, Tick)> {
        let start = self.now;
        let Some(end) = start.checked_add(duration) else {
            return None;
        };
        self.now = end;
        Some((start, end))
    }

    /// Moves forward to `time`; never moves backwards. Returns the time skipped.
    pub fn advance_to(&mut self, time: Tick) -> Tick {
        let skipped = time.saturating_sub(self.now);
        self.now = self.now.max(time);
        skipped
    }
}
