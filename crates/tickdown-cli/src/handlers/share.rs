use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, Duration, Utc};
use is_terminal::IsTerminal;
use tickdown_core::{Clock, Interval, SystemClock, codec, truncate_to_millis};

use crate::context::ExecutionContext;
use crate::presentation::views::ShareSummary;

pub fn handle(
    ctx: &ExecutionContext,
    start: Option<String>,
    end: Option<String>,
    duration: Option<u64>,
) -> Result<()> {
    let config = ctx.config()?;
    let now = SystemClock.now();

    let start = match start {
        Some(raw) => parse_timestamp(&raw)?,
        None => now,
    };

    let end = match end {
        Some(raw) => parse_timestamp(&raw)?,
        None => {
            let secs = duration.unwrap_or(config.defaults.duration_secs);
            let span = i64::try_from(secs)
                .ok()
                .and_then(Duration::try_seconds)
                .ok_or_else(|| anyhow!("duration of {} seconds does not fit the calendar", secs))?;
            start
                .checked_add_signed(span)
                .ok_or_else(|| anyhow!("duration of {} seconds does not fit the calendar", secs))?
        }
    };

    let interval = Interval::new(start, end);
    if !interval.is_valid() {
        eprintln!("Warning: start is after end; the link will open flagged as invalid");
    }

    let token = codec::encode(&interval)?;
    println!("{}", token);

    if std::io::stdout().is_terminal() {
        print!("{}", ShareSummary::new(&interval));
    }

    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Ok(truncate_to_millis(parsed.with_timezone(&Utc))),
        Err(err) => bail!(
            "'{}' is not an RFC 3339 timestamp (try 2026-08-23T18:00:00Z): {}",
            raw,
            err
        ),
    }
}
