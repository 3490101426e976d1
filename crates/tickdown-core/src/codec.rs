use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interval::{Interval, truncate_to_millis};

/// Scheme prefix carried by every token the encoder emits
pub const SCHEME: &str = "tickdown:";

/// Wire shape of a share token: RFC 3339 UTC timestamps with millisecond
/// precision, camelCase keys. Both fields are required on decode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SharePayload {
    start_time: String,
    end_time: String,
}

/// Encode a fully-set interval as a share token.
///
/// The token is the scheme prefix followed by unpadded URL-safe base64 of
/// the JSON payload, so it survives copy/paste through chat clients and
/// URL fragments without escaping.
pub fn encode(interval: &Interval) -> Result<String> {
    let (start, end) = interval.endpoints().ok_or(Error::PartialInterval)?;
    let payload = SharePayload {
        start_time: format_instant(start),
        end_time: format_instant(end),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(format!("{}{}", SCHEME, URL_SAFE_NO_PAD.encode(json)))
}

/// Decode a share token, quietly absorbing every malformed input.
///
/// This is the entry point widget state goes through: a bad link means
/// "no shared state", never an error the user has to deal with.
pub fn decode(token: &str) -> Option<Interval> {
    decode_checked(token).ok()
}

/// Decode a share token, keeping the failure reason for callers that
/// report on tokens instead of mounting from them.
pub fn decode_checked(token: &str) -> Result<Interval> {
    let trimmed = token.trim();
    let body = trimmed
        .strip_prefix("tickdown://")
        .or_else(|| trimmed.strip_prefix(SCHEME))
        .unwrap_or(trimmed);

    if let Some(interval) = decode_legacy(body) {
        return Ok(interval);
    }

    let bytes = decode_base64(body)?;
    let payload: SharePayload = serde_json::from_slice(&bytes)?;
    Ok(Interval::new(
        parse_instant(&payload.start_time)?,
        parse_instant(&payload.end_time)?,
    ))
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    // RFC 3339 admits more precision than the wire format; clip it so
    // decoded instants sit on the same millisecond grid as everything
    // else entering the widget state.
    let parsed = DateTime::parse_from_rfc3339(raw)?;
    Ok(truncate_to_millis(parsed.with_timezone(&Utc)))
}

/// Tokens are generated unpadded and URL-safe, but links that went through
/// other encoders come back padded or with the standard alphabet. Accept
/// all three on the way in.
fn decode_base64(body: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(body)
        .or_else(|_| URL_SAFE.decode(body))
        .or_else(|_| STANDARD.decode(body))
        .map_err(Error::from)
}

/// First-generation tokens were bare query pairs of epoch milliseconds,
/// `s=<start>&e=<end>`. Decoded for compatibility; never emitted.
fn decode_legacy(body: &str) -> Option<Interval> {
    let body = body.trim_start_matches(['#', '?']);
    let mut start_ms = None;
    let mut end_ms = None;
    for pair in body.split('&') {
        let (key, value) = pair.split_once('=')?;
        let ms: i64 = value.parse().ok()?;
        match key {
            "s" => start_ms = Some(ms),
            "e" => end_ms = Some(ms),
            _ => return None,
        }
    }
    Some(Interval::new(
        Utc.timestamp_millis_opt(start_ms?).single()?,
        Utc.timestamp_millis_opt(end_ms?).single()?,
    ))
}
