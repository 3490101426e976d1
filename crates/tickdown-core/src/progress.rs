use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Elapsed share of the interval at `now`, as a percentage truncated to
/// two decimal places.
///
/// `now` is pinned into the interval first, so the result stays within
/// 0..=100 no matter how far outside the interval the clock sits. A
/// zero-length interval counts as fully elapsed; an inverted one counts
/// as not started.
pub fn percentage_complete(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    if start == end {
        return 100.0;
    }
    if end < start {
        return 0.0;
    }
    let pinned = now.min(end).max(start);
    let elapsed = pinned.signed_duration_since(start).num_milliseconds() as f64;
    let span = end.signed_duration_since(start).num_milliseconds() as f64;
    let completed = elapsed / span;
    ((completed * 10_000.0).floor() / 100.0).clamp(0.0, 100.0)
}

/// Time left until the end instant, broken into display units.
///
/// Each field is the whole number of that unit left after the larger
/// units are taken out, so the four fields always recompose into the
/// total. Days are uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Decompose the time from `now` to `end` into days, hours, minutes and
/// seconds. A clock at or past the end yields all zeros; sub-second
/// remainders are dropped, never rounded up.
pub fn remaining(now: DateTime<Utc>, end: DateTime<Utc>) -> Remaining {
    let mut ms = end.signed_duration_since(now).num_milliseconds().max(0);

    let days = ms / MS_PER_DAY;
    ms -= days * MS_PER_DAY;
    let hours = ms / MS_PER_HOUR;
    ms -= hours * MS_PER_HOUR;
    let minutes = ms / MS_PER_MINUTE;
    ms -= minutes * MS_PER_MINUTE;
    let seconds = ms / MS_PER_SECOND;

    Remaining {
        days,
        hours,
        minutes,
        seconds,
    }
}
