//! Ledger row shapes, one struct per ledger.
//!
//! Rows are read-only snapshots fetched per report. Every row carries the
//! firm it belongs to; amounts are non-negative currency values.

use crate::{
    error::{StudioError, StudioResult},
    types::{EntityId, FirmId, Money},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The six ledgers a firm's books are assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ledger {
    Payments,
    Events,
    Expenses,
    StaffPayments,
    FreelancerPayments,
    AccountingEntries,
}

impl Ledger {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Payments => "payments",
            Self::Events => "events",
            Self::Expenses => "expenses",
            Self::StaffPayments => "staff_payments",
            Self::FreelancerPayments => "freelancer_payments",
            Self::AccountingEntries => "accounting_entries",
        }
    }

    /// Date column the report window is projected onto.
    pub fn date_column(&self) -> &'static str {
        match self {
            Self::Payments | Self::StaffPayments | Self::FreelancerPayments => "payment_date",
            Self::Events => "event_date",
            Self::Expenses => "expense_date",
            Self::AccountingEntries => "entry_date",
        }
    }
}

// ── Payment method ─────────────────────────────────────────────

/// Binary payment-method bucket used by every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Digital,
}

impl PaymentMethod {
    /// Normalize a free-form method string. Anything not recognized as
    /// cash, including a missing value, is digital.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Digital;
        };
        let normalized = raw
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "cash" | "by cash" | "in cash" | "cash payment" | "hand cash" => Self::Cash,
            _ => Self::Digital,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Digital => "Digital",
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, Self::Cash)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Accounting entry type ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        }
    }
}

impl FromStr for EntryType {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(StudioError::UnknownEntryType { value: s.to_string() }),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rows ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub event_id: Option<EntityId>,
    /// Title of the linked event, joined in by the source.
    pub event_title: Option<String>,
    pub amount: Money,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub title: String,
    pub event_type: String,
    pub client_name: Option<String>,
    pub event_date: NaiveDate,
    pub total_amount: Money,
    pub advance_amount: Money,
    pub advance_payment_method: Option<String>,
    /// Discount or write-off recorded when the event was closed.
    pub closing_adjustment: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub category: String,
    pub description: Option<String>,
    pub amount: Money,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPaymentRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub staff_name: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerPaymentRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub freelancer_name: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingEntryRow {
    pub id: EntityId,
    pub firm_id: FirmId,
    pub title: String,
    pub category: String,
    pub entry_type: EntryType,
    pub amount: Money,
    pub entry_date: NaiveDate,
    pub payment_method: Option<String>,
    pub reflect_to_company: bool,
}
