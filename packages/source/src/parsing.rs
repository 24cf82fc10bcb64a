//! Date parsing for well registration timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a registration date string.
///
/// Accepts RFC 3339 (with offset), ISO 8601 without offset (with or
/// without fractional seconds), and a bare `YYYY-MM-DD` date, which is
/// taken as midnight UTC. Returns `None` for anything else.
#[must_use]
pub fn parse_registration_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}
