//! Filter specification and the default matcher.

use super::{
    dates::{as_date, is_date_key, parse_date_str, same_day},
    predicates,
};
use crate::record::{FieldValue, Record};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Date(NaiveDate),
}

impl FilterValue {
    /// Empty values are no-ops. "all" is the UI's "no selection".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.eq_ignore_ascii_case("all")
            }
            Self::List(items) => items.iter().all(|s| s.trim().is_empty()),
            Self::Number(_) | Self::Bool(_) | Self::Date(_) => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(v: &[&str]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Filter key → value. Keys are ANDed.
pub type FilterSpec = BTreeMap<String, FilterValue>;

/// True when the record passes every non-empty filter entry.
pub fn passes_filters(record: &Record, filters: &FilterSpec) -> bool {
    filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .all(|(key, value)| matches_filter(record, key, value))
}

/// Evaluate one filter entry: named predicate first, default matcher
/// when the key is unregistered or the predicate declines.
pub fn matches_filter(record: &Record, key: &str, value: &FilterValue) -> bool {
    if let Some(predicate) = predicates::lookup(key) {
        if let Some(verdict) = predicate(record, value) {
            return verdict;
        }
    }
    default_match(record, key, value)
}

fn default_match(record: &Record, key: &str, filter: &FilterValue) -> bool {
    let field = record.value(key);
    if field.is_null() {
        return false;
    }

    if let Some(verdict) = date_match(key, field, filter) {
        return verdict;
    }

    let text = field.to_display_string().to_lowercase();
    match filter {
        FilterValue::List(items) => items.iter().any(|i| i.trim().to_lowercase() == text),
        FilterValue::Number(n) => match field.as_number() {
            Some(x) => x == *n,
            None => text.contains(&FieldValue::Number(*n).to_display_string()),
        },
        FilterValue::Bool(b) => match field {
            FieldValue::Bool(x) => x == b,
            _ => text == b.to_string(),
        },
        FilterValue::Text(t) => text.contains(&t.trim().to_lowercase()),
        // A date filter against a value that is not a date.
        FilterValue::Date(_) => false,
    }
}

/// `Some` when the comparison is a date comparison, `None` to fall back
/// to string matching.
fn date_match(key: &str, field: &FieldValue, filter: &FilterValue) -> Option<bool> {
    let wanted = match filter {
        FilterValue::Date(d) => Some(d.and_time(NaiveTime::MIN)),
        FilterValue::Text(t) => parse_date_str(t),
        _ => return None,
    };
    let date_context = is_date_key(key)
        || matches!(field, FieldValue::Date(_))
        || matches!(filter, FilterValue::Date(_))
        || wanted.is_some();
    if !date_context {
        return None;
    }
    match (as_date(field), wanted) {
        (Some(have), Some(want)) => Some(same_day(have, want)),
        _ if matches!(filter, FilterValue::Date(_)) => Some(false),
        _ => None,
    }
}
