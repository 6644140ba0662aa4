//! Date inference for filtering and sorting.
//!
//! Only ISO-8601 shaped text is treated as a date. Everything else stays a
//! string so that labels like "Ring-Ceremony" never turn into dates.

use crate::record::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse ISO date or date-time text. Offsets are dropped; the calendar day
/// is the one written in the string.
pub fn parse_date_str(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.len() < 10 {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Date view of a field value, if it has one.
pub fn as_date(value: &FieldValue) -> Option<NaiveDateTime> {
    match value {
        FieldValue::Date(dt) => Some(*dt),
        FieldValue::Text(s) => parse_date_str(s),
        _ => None,
    }
}

/// Field names containing "date" are compared as dates.
pub fn is_date_key(key: &str) -> bool {
    key.to_ascii_lowercase().contains("date")
}

/// Calendar-day equality; time of day is ignored.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
