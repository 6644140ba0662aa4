//! Fetched ledger snapshots.
//!
//! A snapshot is everything one report computation reads, fetched once
//! and discarded after the statement is built.

use crate::{
    ledger::{
        AccountingEntryRow, EventRow, ExpenseRow, FreelancerPaymentRow, PaymentRow,
        StaffPaymentRow,
    },
    types::FirmId,
};
use serde::{Deserialize, Serialize};

/// All six ledgers for one firm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub firm_id: FirmId,
    pub payments: Vec<PaymentRow>,
    pub events: Vec<EventRow>,
    pub expenses: Vec<ExpenseRow>,
    pub staff_payments: Vec<StaffPaymentRow>,
    pub freelancer_payments: Vec<FreelancerPaymentRow>,
    pub accounting_entries: Vec<AccountingEntryRow>,
}

impl LedgerSnapshot {
    pub fn empty(firm_id: &str) -> Self {
        Self {
            firm_id: firm_id.to_string(),
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.payments.len()
            + self.events.len()
            + self.expenses.len()
            + self.staff_payments.len()
            + self.freelancer_payments.len()
            + self.accounting_entries.len()
    }
}
