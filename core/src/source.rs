//! Ledger source trait.
//!
//! RULE: Aggregation code never talks to storage directly. It asks a
//! `LedgerSource` for rows scoped to one firm and one date window, and
//! every ledger read is independent of the others.

use crate::{
    error::StudioResult,
    ledger::{
        AccountingEntryRow, EventRow, ExpenseRow, FreelancerPaymentRow, PaymentRow,
        StaffPaymentRow,
    },
    snapshot::LedgerSnapshot,
    window::DateWindow,
};

/// The contract every ledger backend must fulfill.
///
/// The window is projected onto each ledger's own date column:
/// `payment_date`, `event_date`, `expense_date`, `entry_date`.
pub trait LedgerSource {
    fn payments(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<PaymentRow>>;

    fn events(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<EventRow>>;

    fn expenses(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<ExpenseRow>>;

    fn staff_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<StaffPaymentRow>>;

    fn freelancer_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<FreelancerPaymentRow>>;

    fn accounting_entries(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<AccountingEntryRow>>;
}

impl<S: LedgerSource + ?Sized> LedgerSource for &S {
    fn payments(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<PaymentRow>> {
        (**self).payments(firm_id, window)
    }

    fn events(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<EventRow>> {
        (**self).events(firm_id, window)
    }

    fn expenses(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<ExpenseRow>> {
        (**self).expenses(firm_id, window)
    }

    fn staff_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<StaffPaymentRow>> {
        (**self).staff_payments(firm_id, window)
    }

    fn freelancer_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<FreelancerPaymentRow>> {
        (**self).freelancer_payments(firm_id, window)
    }

    fn accounting_entries(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<AccountingEntryRow>> {
        (**self).accounting_entries(firm_id, window)
    }
}

/// An in-memory snapshot serves as a source too (tests, demo runs).
/// Rows of other firms are never returned.
impl LedgerSource for LedgerSnapshot {
    fn payments(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<PaymentRow>> {
        Ok(self
            .payments
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.payment_date))
            .cloned()
            .collect())
    }

    fn events(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<EventRow>> {
        Ok(self
            .events
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.event_date))
            .cloned()
            .collect())
    }

    fn expenses(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<ExpenseRow>> {
        Ok(self
            .expenses
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.expense_date))
            .cloned()
            .collect())
    }

    fn staff_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<StaffPaymentRow>> {
        Ok(self
            .staff_payments
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.payment_date))
            .cloned()
            .collect())
    }

    fn freelancer_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<FreelancerPaymentRow>> {
        Ok(self
            .freelancer_payments
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.payment_date))
            .cloned()
            .collect())
    }

    fn accounting_entries(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<AccountingEntryRow>> {
        Ok(self
            .accounting_entries
            .iter()
            .filter(|r| r.firm_id == firm_id && window.contains(r.entry_date))
            .cloned()
            .collect())
    }
}
