//! The report engine: fetches one firm's ledgers and builds statements.
//!
//! FETCH ORDER (fixed, each read independent of the others):
//!   1. payments
//!   2. events
//!   3. expenses
//!   4. staff payments        (balance sheet only)
//!   5. freelancer payments   (balance sheet only)
//!   6. accounting entries
//!
//! RULES:
//!   - Rows are combined only after every read has returned.
//!   - A failed accounting-entries read is logged and treated as an empty
//!     ledger. Any other failed read aborts the statement.
//!   - Statements are computed from the fetched snapshot only; nothing is
//!     cached between calls.

use crate::{
    balance_sheet::{compute_balance_sheet, BalanceSheetStatement},
    error::StudioResult,
    event_balance::{event_balances, EventBalance},
    finance_report::{compute_finance_report, FinanceStatement},
    ledger::AccountingEntryRow,
    payee_summary::{summarize_payees, PayeeSummary},
    snapshot::LedgerSnapshot,
    source::LedgerSource,
    window::{DateWindow, TimeRange},
};
use chrono::NaiveDate;

pub struct ReportEngine<S> {
    source: S,
}

impl<S: LedgerSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All six ledgers within `window`.
    pub fn fetch_snapshot(&self, firm_id: &str, window: &DateWindow) -> StudioResult<LedgerSnapshot> {
        let payments = self.source.payments(firm_id, window)?;
        let events = self.source.events(firm_id, window)?;
        let expenses = self.source.expenses(firm_id, window)?;
        let staff_payments = self.source.staff_payments(firm_id, window)?;
        let freelancer_payments = self.source.freelancer_payments(firm_id, window)?;
        let accounting_entries = self.accounting_entries_or_empty(firm_id, window);

        let snapshot = LedgerSnapshot {
            firm_id: firm_id.to_string(),
            payments,
            events,
            expenses,
            staff_payments,
            freelancer_payments,
            accounting_entries,
        };
        log::debug!("firm={firm_id} fetched {} ledger rows", snapshot.row_count());
        Ok(snapshot)
    }

    pub fn balance_sheet(&self, firm_id: &str) -> StudioResult<BalanceSheetStatement> {
        let snapshot = self.fetch_snapshot(firm_id, &DateWindow::all_time())?;
        Ok(compute_balance_sheet(&snapshot))
    }

    /// Payouts to staff and freelancers are not read for this report.
    pub fn finance_report(
        &self,
        firm_id: &str,
        range: TimeRange,
        today: NaiveDate,
    ) -> StudioResult<FinanceStatement> {
        let window = range.window(today);

        let payments = self.source.payments(firm_id, &window)?;
        let events = self.source.events(firm_id, &window)?;
        let expenses = self.source.expenses(firm_id, &window)?;
        let accounting_entries = self.accounting_entries_or_empty(firm_id, &window);

        let snapshot = LedgerSnapshot {
            firm_id: firm_id.to_string(),
            payments,
            events,
            expenses,
            accounting_entries,
            ..LedgerSnapshot::default()
        };
        Ok(compute_finance_report(&snapshot, range, today))
    }

    /// Outstanding balance per event, largest first.
    pub fn event_balances(&self, firm_id: &str) -> StudioResult<Vec<EventBalance>> {
        let window = DateWindow::all_time();
        let payments = self.source.payments(firm_id, &window)?;
        let events = self.source.events(firm_id, &window)?;
        let mut balances = event_balances(&events, &payments);
        balances.sort_by(|a, b| b.outstanding.total_cmp(&a.outstanding));
        Ok(balances)
    }

    /// Staff and freelancer payouts rolled up per payee within `range`.
    pub fn payee_summaries(
        &self,
        firm_id: &str,
        range: TimeRange,
        today: NaiveDate,
    ) -> StudioResult<Vec<PayeeSummary>> {
        let window = range.window(today);
        let staff = self.source.staff_payments(firm_id, &window)?;
        let freelancers = self.source.freelancer_payments(firm_id, &window)?;
        Ok(summarize_payees(&staff, &freelancers))
    }

    fn accounting_entries_or_empty(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> Vec<AccountingEntryRow> {
        match self.source.accounting_entries(firm_id, window) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("firm={firm_id} accounting entries unavailable, continuing without them: {e}");
                Vec::new()
            }
        }
    }
}
