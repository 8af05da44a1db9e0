//! Date and timestamp parsing shared by the comparison and type predicates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a string as a point in time.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+02:00`)
/// - `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`, read as UTC
/// - `YYYY-MM-DD`, read as midnight UTC
///
/// Bare numbers are not treated as epochs; callers compare those numerically.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    if raw.len() == 10 && raw.chars().filter(|c| *c == '-').count() == 2 {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }

    None
}
