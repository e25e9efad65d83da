//! Tabular event log (CSV) parsing.
//!
//! The pipeline only needs the rows as string maps; the report counts them.

use crate::utils::error::ParseError;
use csv::ReaderBuilder;
use log::debug;
use std::collections::HashMap;

/// One CSV row keyed by header name
pub type EventLogRow = HashMap<String, String>;

/// Parse CSV text with a header row into string maps
///
/// **Public** - main entry point for event log input
///
/// Ragged rows are tolerated: missing cells become empty strings and
/// cells beyond the header are dropped.
///
/// # Errors
/// * `ParseError::CsvError` - malformed quoting or invalid UTF-8
pub fn parse_event_log(raw: &str) -> Result<Vec<EventLogRow>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    debug!("Parsed event log: {} columns, {} rows", headers.len(), rows.len());

    Ok(rows)
}
