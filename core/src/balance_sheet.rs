//! Balance sheet: assets, liabilities and residual equity for one firm.
//!
//! Design:
//!   - Cash            = payments + positive event advances
//!   - Receivable      = sum of per-event outstanding balances
//!   - Other assets    = Debit accounting entries
//!   - Payable         = expenses + staff payouts + freelancer payouts
//!   - Acct. liability = Credit accounting entries
//!   - Equity          = assets − liabilities (residual)
//!
//! Expenses are never subtracted from cash; they only show as payables.
//! Accounting entries count here whether or not they reflect to company.

use crate::{
    event_balance::event_balance,
    ledger::EntryType,
    snapshot::LedgerSnapshot,
    types::{FirmId, Money},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSheetStatement {
    pub firm_id: FirmId,
    // Assets
    pub cash: Money,
    pub accounts_receivable: Money,
    pub other_assets: Money,
    pub total_assets: Money,
    // Liabilities
    pub accounts_payable: Money,
    pub accounting_liabilities: Money,
    pub total_liabilities: Money,
    // Equity
    pub retained_earnings: Money,
    pub total_equity: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceCheck {
    Balanced,
    Unbalanced,
}

impl BalanceCheck {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::Unbalanced => "UNBALANCED",
        }
    }
}

impl BalanceSheetStatement {
    /// Display check: assets against liabilities + equity within
    /// `tolerance` currency units. Equity is residual, so this holds
    /// unless the statement was edited after computation.
    pub fn check(&self, tolerance: Money) -> BalanceCheck {
        let delta = self.total_assets - (self.total_liabilities + self.total_equity);
        if delta.abs() < tolerance {
            BalanceCheck::Balanced
        } else {
            BalanceCheck::Unbalanced
        }
    }
}

pub fn compute_balance_sheet(snapshot: &LedgerSnapshot) -> BalanceSheetStatement {
    // ── Assets ─────────────────────────────────────────────

    let payments_total: Money = snapshot.payments.iter().map(|p| p.amount).sum();
    let advances_total: Money = snapshot
        .events
        .iter()
        .map(|e| e.advance_amount)
        .filter(|a| *a > 0.0)
        .sum();
    let cash = payments_total + advances_total;

    let accounts_receivable: Money = snapshot
        .events
        .iter()
        .map(|e| event_balance(e, &snapshot.payments).outstanding)
        .sum();

    let other_assets = sum_entries(snapshot, EntryType::Debit);

    let total_assets = cash + accounts_receivable + other_assets;

    // ── Liabilities ────────────────────────────────────────

    let accounts_payable: Money = snapshot.expenses.iter().map(|e| e.amount).sum::<Money>()
        + snapshot.staff_payments.iter().map(|s| s.amount).sum::<Money>()
        + snapshot.freelancer_payments.iter().map(|f| f.amount).sum::<Money>();

    let accounting_liabilities = sum_entries(snapshot, EntryType::Credit);

    let total_liabilities = accounts_payable + accounting_liabilities;

    // ── Equity ─────────────────────────────────────────────

    let retained_earnings = total_assets - total_liabilities;

    log::debug!(
        "firm={} balance sheet: assets={total_assets:.2} liabilities={total_liabilities:.2} equity={retained_earnings:.2}",
        snapshot.firm_id
    );

    BalanceSheetStatement {
        firm_id: snapshot.firm_id.clone(),
        cash,
        accounts_receivable,
        other_assets,
        total_assets,
        accounts_payable,
        accounting_liabilities,
        total_liabilities,
        retained_earnings,
        total_equity: retained_earnings,
    }
}

fn sum_entries(snapshot: &LedgerSnapshot, entry_type: EntryType) -> Money {
    snapshot
        .accounting_entries
        .iter()
        .filter(|e| e.entry_type == entry_type)
        .map(|e| e.amount)
        .sum()
}
