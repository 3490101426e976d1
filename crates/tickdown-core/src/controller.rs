use chrono::{DateTime, Duration, Utc};

use crate::codec;
use crate::display::{CountdownView, countdown_view};
use crate::interval::{Endpoint, Interval};
use crate::link::LinkSlot;
use crate::progress::percentage_complete;

/// Root state holder for the countdown widget.
///
/// Owns the interval, the last observed instant, the validity flag and the
/// share link slot. Everything the widget renders derives from these four;
/// the render layer holds no state of its own.
pub struct Controller {
    interval: Interval,
    now: DateTime<Utc>,
    in_error_state: bool,
    link: Box<dyn LinkSlot>,
}

impl Controller {
    /// Bring the widget up at `now`.
    ///
    /// Adopts the interval from the link slot when one decodes, and falls
    /// back to `default_span` starting at `now` otherwise. Either way the
    /// active state is written straight back to the slot, which upgrades
    /// legacy links to the current token format on first load.
    pub fn mount(now: DateTime<Utc>, default_span: Duration, link: Box<dyn LinkSlot>) -> Self {
        let interval = link
            .current()
            .and_then(codec::decode)
            .unwrap_or_else(|| Interval::spanning(now, default_span));
        let mut controller = Self {
            interval,
            now,
            in_error_state: false,
            link,
        };
        controller.revalidate();
        controller.sync_link();
        controller
    }

    /// Advance the observed instant. Display state only: ticking never
    /// revalidates the interval and never touches the link.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    /// Apply an edited endpoint, then recompute validity and refresh the
    /// link. `None` clears the endpoint.
    pub fn set_endpoint(&mut self, endpoint: Endpoint, value: Option<DateTime<Utc>>) {
        self.interval.set(endpoint, value);
        self.revalidate();
        self.sync_link();
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Whether the interval is currently inverted (start after end). The
    /// flag drives the warning banner; it never blocks edits or encoding.
    pub fn in_error_state(&self) -> bool {
        self.in_error_state
    }

    pub fn share_link(&self) -> Option<&str> {
        self.link.current()
    }

    /// Elapsed percentage for the progress gauge. An interval that is not
    /// fully set reads as nothing elapsed.
    pub fn percentage(&self) -> f64 {
        match self.interval.endpoints() {
            Some((start, end)) => percentage_complete(start, end, self.now),
            None => 0.0,
        }
    }

    /// The countdown readout decision at the current instant.
    pub fn view(&self) -> CountdownView {
        countdown_view(self.now, self.interval.start_time, self.interval.end_time)
    }

    fn revalidate(&mut self) {
        self.in_error_state = !self.interval.is_valid();
    }

    /// Partial intervals are not encodable, so the slot keeps the last
    /// fully-set state until the missing endpoint comes back.
    fn sync_link(&mut self) {
        if let Ok(token) = codec::encode(&self.interval) {
            self.link.replace(token);
        }
    }
}
