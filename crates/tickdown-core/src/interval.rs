use chrono::{DateTime, Duration, TimeZone, Utc};

/// Which end of the interval an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// The pair of instants being counted between.
///
/// Endpoints are optional: either one can be cleared from the widget, and
/// decoding a share link can fail to produce them. An interval whose start
/// lies after its end stays representable; the widget flags it instead of
/// rejecting the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Interval {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// Interval covering `span` from `start`, used as the state a fresh
    /// widget mounts with when no link is present.
    pub fn spanning(start: DateTime<Utc>, span: Duration) -> Self {
        let end = start.checked_add_signed(span).unwrap_or(start);
        Self::new(start, end)
    }

    /// Both endpoints when both are set, in start/end order as stored.
    pub fn endpoints(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_fully_set(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// An interval is invalid only when both endpoints are set and the
    /// start lies strictly after the end. Partial intervals are valid.
    pub fn is_valid(&self) -> bool {
        match self.endpoints() {
            Some((start, end)) => start <= end,
            None => true,
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<DateTime<Utc>> {
        match endpoint {
            Endpoint::Start => self.start_time,
            Endpoint::End => self.end_time,
        }
    }

    pub fn set(&mut self, endpoint: Endpoint, value: Option<DateTime<Utc>>) {
        match endpoint {
            Endpoint::Start => self.start_time = value,
            Endpoint::End => self.end_time = value,
        }
    }
}

/// Drop sub-millisecond precision from an instant.
///
/// The share payload stores milliseconds, so every instant that enters the
/// widget state is truncated first; a round-trip through the link then
/// reproduces the state exactly.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(instant.timestamp_millis())
        .single()
        .unwrap_or(instant)
}
