//! Uniform records consumed by the view engine.
//!
//! A record is an ordered field-name → value map. Ledger rows and list
//! screens both flatten into records through `ToRecord`.

use crate::ledger::{
    AccountingEntryRow, EventRow, ExpenseRow, FreelancerPaymentRow, PaymentMethod, PaymentRow,
    StaffPaymentRow,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String coercion used by search and default filter matching.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
            Self::Date(dt) => {
                if dt.time().num_seconds_from_midnight() == 0 {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                }
            }
        }
    }

    /// Numeric view of the value. Numeric text counts as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    /// Absent fields read as `None`; present nulls as `Some(Null)`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Value of `key`, treating an absent field as null.
    pub fn value(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&FieldValue::Null)
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_null())
            .map(FieldValue::to_display_string)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

/// Flatten a typed row into a `Record` for the view engine.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

impl ToRecord for PaymentRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("event_id", self.event_id.clone())
            .with("event_title", self.event_title.clone())
            .with("amount", self.amount)
            .with("payment_date", self.payment_date)
            .with("payment_method", self.payment_method.clone())
            .with("payment_mode", PaymentMethod::parse(self.payment_method.as_deref()).label())
    }
}

impl ToRecord for EventRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("title", self.title.as_str())
            .with("event_type", self.event_type.as_str())
            .with("client_name", self.client_name.clone())
            .with("event_date", self.event_date)
            .with("total_amount", self.total_amount)
            .with("advance_amount", self.advance_amount)
            .with("closing_adjustment", self.closing_adjustment)
    }
}

impl ToRecord for ExpenseRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("category", self.category.as_str())
            .with("description", self.description.clone())
            .with("amount", self.amount)
            .with("expense_date", self.expense_date)
            .with("payment_method", self.payment_method.clone())
            .with("payment_mode", PaymentMethod::parse(self.payment_method.as_deref()).label())
    }
}

impl ToRecord for StaffPaymentRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("staff_name", self.staff_name.as_str())
            .with("amount", self.amount)
            .with("payment_date", self.payment_date)
            .with("payment_method", self.payment_method.clone())
            .with("description", self.description.clone())
    }
}

impl ToRecord for FreelancerPaymentRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("freelancer_name", self.freelancer_name.as_str())
            .with("amount", self.amount)
            .with("payment_date", self.payment_date)
            .with("payment_method", self.payment_method.clone())
            .with("description", self.description.clone())
    }
}

impl ToRecord for AccountingEntryRow {
    fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("title", self.title.as_str())
            .with("category", self.category.as_str())
            .with("entry_type", self.entry_type.as_str())
            .with("amount", self.amount)
            .with("entry_date", self.entry_date)
            .with("payment_method", self.payment_method.clone())
            .with("reflect_to_company", self.reflect_to_company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_string_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(25000.0).to_display_string(), "25000");
        assert_eq!(FieldValue::Number(12.5).to_display_string(), "12.5");
    }

    #[test]
    fn midnight_dates_render_as_plain_days() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(FieldValue::from(d).to_display_string(), "2024-03-09");
    }

    #[test]
    fn absent_and_null_fields_read_the_same() {
        let r = Record::new().with("client", FieldValue::Null);
        assert!(r.value("client").is_null());
        assert!(r.value("missing").is_null());
        assert!(r.has_field("client"));
        assert!(!r.has_field("missing"));
    }
}
