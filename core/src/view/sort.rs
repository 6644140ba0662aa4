//! Typed comparator for the single active sort key.
//!
//! Order of inference: nulls, then dates, then numbers, then strings.
//! Nulls trail in both directions. Unparseable values in the date branch
//! trail valid dates in both directions.

use super::dates::{as_date, is_date_key};
use crate::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: &str) -> Self {
        Self { key: key.to_string(), direction: SortDirection::Asc }
    }

    pub fn desc(key: &str) -> Self {
        Self { key: key.to_string(), direction: SortDirection::Desc }
    }
}

pub fn compare_records(a: &Record, b: &Record, spec: &SortSpec) -> Ordering {
    compare_values(&spec.key, a.value(&spec.key), b.value(&spec.key), spec.direction)
}

fn compare_values(key: &str, a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let date_like =
        is_date_key(key) || matches!(a, FieldValue::Date(_)) || matches!(b, FieldValue::Date(_));
    if date_like {
        return match (as_date(a), as_date(b)) {
            (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
    }

    if let (FieldValue::Number(x), FieldValue::Number(y)) = (a, b) {
        return direction.apply(x.partial_cmp(y).unwrap_or(Ordering::Equal));
    }

    direction.apply(locale_compare(&a.to_display_string(), &b.to_display_string()))
}

/// Case-insensitive ordering with the exact text as a tie break.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
