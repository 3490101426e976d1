use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

use crate::interval::truncate_to_millis;

/// Source of the current instant.
///
/// The controller never reads the wall clock directly; whoever drives it
/// picks the clock, which keeps every tick-dependent behavior testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock truncated to millisecond resolution, matching the precision
/// the share payload can carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(Utc::now())
    }
}

/// Clock that only moves when told to. Test double.
#[derive(Debug)]
pub struct ManualClock(Cell<DateTime<Utc>>);

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self(Cell::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        self.0.set(self.0.get() + delta);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.0.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}
