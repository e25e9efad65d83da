//! OCEL document parsing and timestamp normalization.

use super::schema::{OcelEvent, OcelLog};
use crate::utils::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;

/// Offset-carrying layouts tried after RFC 3339
///
/// `%#z` takes `+09`, `+0900` and `+09:00` alike.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
];

/// Layouts without an offset; read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
];

/// Parse a raw OCEL JSON document
///
/// **Public** - main entry point for OCEL input
///
/// # Errors
/// * `ParseError::JsonError` - not valid JSON, or a required field
///   (`objects[].id`, `objects[].type`, `events[].timestamp`) is missing
pub fn parse_ocel(raw: &str) -> Result<OcelLog, ParseError> {
    let log: OcelLog = serde_json::from_str(raw)?;

    debug!(
        "Parsed OCEL: {} objects, {} events",
        log.objects.len(),
        log.events.len()
    );

    Ok(log)
}

/// Parse an ISO-8601 timestamp into a UTC instant
///
/// A trailing `Z` means `+00:00`. Timestamps without an offset are taken
/// as UTC, and a bare date as midnight UTC. Also accepted: hour-only times
/// (`2024-03-01T09`), hour-only offsets (`+09`), a comma before the
/// fraction, and the basic `20240301T093000` form with seconds.
/// Returns `None` when nothing matches.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim().replace(',', ".");
    let normalized = match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => value.clone(),
    };
    let normalized = expand_hour_only(&normalized).unwrap_or(normalized);

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// `2024-03-01T09[offset]` -> `2024-03-01T09:00[offset]`
fn expand_hour_only(value: &str) -> Option<String> {
    if !matches!(value.get(10..11), Some("T") | Some(" ")) {
        return None;
    }

    let time = &value[11..];
    let digits = time.bytes().take_while(u8::is_ascii_digit).count();
    if digits != 2 || time[2..].starts_with(':') {
        return None;
    }

    Some(format!("{}{}:00{}", &value[..11], &time[..2], &time[2..]))
}

/// Parse the timestamp of one event
///
/// # Errors
/// * `ParseError::MalformedTimestamp` - names the event and the raw value
pub fn event_timestamp(event: &OcelEvent) -> Result<DateTime<Utc>, ParseError> {
    parse_timestamp(&event.timestamp).ok_or_else(|| ParseError::MalformedTimestamp {
        event_id: event.id.clone(),
        value: event.timestamp.clone(),
    })
}
