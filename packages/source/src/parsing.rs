//! Shared timestamp parsing utilities.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a report timestamp string.
///
/// Accepts RFC 3339 (the default applied when a source record has no
/// datetime) and naive Socrata timestamps with or without fractional
/// seconds (`2024-03-01T10:00:00.000`). Naive timestamps are taken as UTC.
#[must_use]
pub fn parse_report_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}
