use anyhow::{Result, bail};
use serde::Serialize;
use tickdown_core::{Clock, Remaining, SystemClock, codec, percentage_complete, remaining};

use crate::presentation::views::{InspectView, format_utc};
use crate::types::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectReport<'a> {
    token: &'a str,
    start_time: String,
    end_time: String,
    valid: bool,
    status: &'static str,
    percentage_complete: f64,
    remaining: Remaining,
}

pub fn handle(link: &str, format: OutputFormat) -> Result<()> {
    let interval = match codec::decode_checked(link) {
        Ok(interval) => interval,
        Err(err) => bail!("not a valid share link: {}", err),
    };
    let Some((start, end)) = interval.endpoints() else {
        bail!("not a valid share link: interval is missing an endpoint");
    };

    let now = SystemClock.now();

    match format {
        OutputFormat::Plain => {
            print!("{}", InspectView::new(link, &interval, now));
        }
        OutputFormat::Json => {
            let status = if !interval.is_valid() {
                "invalid"
            } else if now >= end {
                "finished"
            } else {
                "counting"
            };
            let report = InspectReport {
                token: link,
                start_time: format_utc(start),
                end_time: format_utc(end),
                valid: interval.is_valid(),
                status,
                percentage_complete: percentage_complete(start, end, now),
                remaining: remaining(now, end),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
