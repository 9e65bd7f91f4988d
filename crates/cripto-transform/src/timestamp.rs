//! Timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive layouts tried after RFC 3339, interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601-like timestamp into UTC.
///
/// Accepts RFC 3339 with any offset, a naive date-time with `T` or space
/// separator, or a bare `YYYY-MM-DD` date (midnight). Surrounding whitespace
/// is ignored. Returns `None` for anything else.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cripto_transform::parse_timestamp;
///
/// let parsed = parse_timestamp("2024-01-01T00:00:00.000Z").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
