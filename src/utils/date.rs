//! Date/time helpers for the backend's zone-less ISO timestamps.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats accepted on the command line for `--at`.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a user-entered event date/time.
pub fn parse_input(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Render a date/time the way the backend's `LocalDateTime.parse` expects.
pub fn to_wire(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

/// Parse a timestamp coming from the backend: a local ISO date-time with
/// optional fractional seconds, or an RFC 3339 string.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// `YYYY-MM-DD HH:MM`, or the input unchanged when it cannot be parsed.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
