use chrono::{DateTime, Utc};

use crate::progress::{Remaining, remaining};

/// What the countdown readout should show at a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownView {
    /// At least one endpoint is unset; nothing meaningful to count
    Placeholder,
    /// The end instant has been reached or passed
    Finished,
    /// Counting down toward the end instant
    Counting(Remaining),
}

/// Decide the countdown rendering for `now` against an interval that may
/// be partially set. The start endpoint only gates presence; the time
/// left depends on the end alone.
pub fn countdown_view(
    now: DateTime<Utc>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> CountdownView {
    let (Some(_), Some(end)) = (start, end) else {
        return CountdownView::Placeholder;
    };
    if now >= end {
        CountdownView::Finished
    } else {
        CountdownView::Counting(remaining(now, end))
    }
}
