//! Per-payee rollups of the staff and freelancer payout ledgers.
//!
//! The payout ledgers hold settled amounts only, so a payee's earnings
//! within a window equal what was paid out in it. Each payout counts as
//! one assignment.

use crate::{
    ledger::{FreelancerPaymentRow, StaffPaymentRow},
    record::{Record, ToRecord},
    types::Money,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayeeRole {
    Staff,
    Freelancer,
}

impl PayeeRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Freelancer => "freelancer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayeeSummary {
    pub name: String,
    pub role: PayeeRole,
    pub total_earnings: Money,
    pub total_paid: Money,
    pub total_assignments: u32,
    pub last_paid: Option<NaiveDate>,
}

impl PayeeSummary {
    fn new(name: &str, role: PayeeRole) -> Self {
        Self {
            name: name.to_string(),
            role,
            total_earnings: 0.0,
            total_paid: 0.0,
            total_assignments: 0,
            last_paid: None,
        }
    }

    fn add(&mut self, amount: Money, on: NaiveDate) {
        self.total_earnings += amount;
        self.total_paid += amount;
        self.total_assignments += 1;
        self.last_paid = self.last_paid.max(Some(on));
    }
}

/// One summary per (role, trimmed name), staff first, then by name.
/// Names are matched exactly after trimming.
pub fn summarize_payees(
    staff: &[StaffPaymentRow],
    freelancers: &[FreelancerPaymentRow],
) -> Vec<PayeeSummary> {
    let mut by_payee: BTreeMap<(PayeeRole, String), PayeeSummary> = BTreeMap::new();
    let payouts = staff
        .iter()
        .map(|p| (PayeeRole::Staff, p.staff_name.as_str(), p.amount, p.payment_date))
        .chain(freelancers.iter().map(|p| {
            (PayeeRole::Freelancer, p.freelancer_name.as_str(), p.amount, p.payment_date)
        }));

    for (role, name, amount, on) in payouts {
        let name = name.trim();
        by_payee
            .entry((role, name.to_string()))
            .or_insert_with(|| PayeeSummary::new(name, role))
            .add(amount, on);
    }
    by_payee.into_values().collect()
}

impl ToRecord for PayeeSummary {
    fn to_record(&self) -> Record {
        Record::new()
            .with("name", self.name.as_str())
            .with("role", self.role.label())
            .with("total_earnings", self.total_earnings)
            .with("total_paid", self.total_paid)
            .with("total_assignments", i64::from(self.total_assignments))
            .with("last_paid", self.last_paid)
    }
}
