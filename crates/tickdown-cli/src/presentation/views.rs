use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use owo_colors::OwoColorize;
use tickdown_core::{Controller, CountdownView, Interval, percentage_complete, remaining};

use crate::config::DisplayConfig;
use crate::presentation::meter::meter;

pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn endpoint_text(value: Option<DateTime<Utc>>) -> String {
    value.map(format_utc).unwrap_or_else(|| "-".to_string())
}

// --------------------------------------------------------
// Snapshot View
// --------------------------------------------------------

/// One-shot rendering of the whole widget for non-interactive stdout.
/// Uncolored: it only renders when output is piped.
pub struct SnapshotView<'a> {
    controller: &'a Controller,
    display: &'a DisplayConfig,
}

impl<'a> SnapshotView<'a> {
    pub fn new(controller: &'a Controller, display: &'a DisplayConfig) -> Self {
        Self {
            controller,
            display,
        }
    }
}

impl fmt::Display for SnapshotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interval = self.controller.interval();
        writeln!(f, "tickdown")?;
        writeln!(f, "  {:<9} {}", "Start", endpoint_text(interval.start_time))?;
        writeln!(f, "  {:<9} {}", "End", endpoint_text(interval.end_time))?;

        let pct = self.controller.percentage();
        writeln!(
            f,
            "  {:<9} {} {:.2}%",
            "Progress",
            meter(pct, 40, self.display.unicode),
            pct
        )?;

        let readout = match self.controller.view() {
            CountdownView::Placeholder => "-".to_string(),
            CountdownView::Finished => self.display.finished_text.clone(),
            CountdownView::Counting(remaining) => remaining.to_string(),
        };
        writeln!(f, "  {:<9} {}", "Remaining", readout)?;

        if self.controller.in_error_state() {
            writeln!(f, "  Warning: start is after end")?;
        }
        writeln!(
            f,
            "  {:<9} {}",
            "Link",
            self.controller.share_link().unwrap_or("-")
        )
    }
}

// --------------------------------------------------------
// Share Summary
// --------------------------------------------------------

/// Human-oriented footnote printed under a freshly minted share token.
pub struct ShareSummary<'a> {
    interval: &'a Interval,
}

impl<'a> ShareSummary<'a> {
    pub fn new(interval: &'a Interval) -> Self {
        Self { interval }
    }
}

impl fmt::Display for ShareSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((start, end)) = self.interval.endpoints() else {
            return Ok(());
        };
        if start <= end {
            let note = format!(
                "  spans {} from {} to {}",
                remaining(start, end),
                format_utc(start),
                format_utc(end)
            );
            writeln!(f, "{}", note.dimmed())
        } else {
            let note = format!(
                "  inverted: {} is after {}",
                format_utc(start),
                format_utc(end)
            );
            writeln!(f, "{}", note.red())
        }
    }
}

// --------------------------------------------------------
// Inspect View
// --------------------------------------------------------

/// What a share link carries, judged at the current instant.
pub struct InspectView<'a> {
    token: &'a str,
    interval: &'a Interval,
    now: DateTime<Utc>,
}

impl<'a> InspectView<'a> {
    pub fn new(token: &'a str, interval: &'a Interval, now: DateTime<Utc>) -> Self {
        Self {
            token,
            interval,
            now,
        }
    }
}

impl fmt::Display for InspectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((start, end)) = self.interval.endpoints() else {
            return Ok(());
        };
        let valid = self.interval.is_valid();

        writeln!(f, "{} {}", "Share link".bold(), self.token.dimmed())?;
        writeln!(f, "  {:<9} {}", "Start", format_utc(start))?;
        writeln!(f, "  {:<9} {}", "End", format_utc(end))?;
        if valid {
            writeln!(f, "  {:<9} {}", "Span", remaining(start, end))?;
        }

        if !valid {
            writeln!(
                f,
                "  {:<9} {}",
                "Status",
                "invalid: start is after end".red()
            )?;
        } else if self.now >= end {
            writeln!(f, "  {:<9} {}", "Status", "finished".cyan())?;
        } else {
            writeln!(f, "  {:<9} {}", "Status", "counting".green())?;
        }

        writeln!(
            f,
            "  {:<9} {:.2}%",
            "Progress",
            percentage_complete(start, end, self.now)
        )?;
        writeln!(f, "  {:<9} {}", "Remaining", remaining(self.now, end))
    }
}
