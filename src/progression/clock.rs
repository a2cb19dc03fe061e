//! Parsing of caller-supplied "now" and activity timestamps.
//!
//! The engine works on one wall clock, the collaborator's local zone.
//! Timestamps with an explicit offset are converted into that zone; naive
//! timestamps are taken as already on it.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use super::types::ProgressionError;

/// Accepted naive layouts, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string into local wall clock time.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, ProgressionError> {
    parse_timestamp_in(input, &Local)
}

/// Parse a timestamp string into wall clock time in `zone`.
pub fn parse_timestamp_in<Tz: TimeZone>(
    input: &str,
    zone: &Tz,
) -> Result<NaiveDateTime, ProgressionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProgressionError::ClockInput("timestamp is empty".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(zone).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    // Bare dates anchor at midnight
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(ProgressionError::ClockInput(format!(
        "unrecognized timestamp: {trimmed}"
    )))
}

/// Parse an optional timestamp, treating absence as a clock error.
pub fn require_timestamp(input: Option<&str>) -> Result<NaiveDateTime, ProgressionError> {
    match input {
        Some(s) => parse_timestamp(s),
        None => Err(ProgressionError::ClockInput("timestamp is missing".to_string())),
    }
}
