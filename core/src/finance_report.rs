//! Finance report: windowed money in / money out with cash vs digital split.
//!
//! Inflows:  payments, event advances (dated by the event), Credit
//!           accounting entries flagged `reflect_to_company`.
//! Outflows: expenses, Debit accounting entries flagged `reflect_to_company`.
//!
//! Staff and freelancer payouts are not outflows here: salary is expected
//! to be booked as an expense row as well, and counting both would double
//! it. The balance sheet still carries them as payables.

use crate::{
    ledger::{EntryType, PaymentMethod},
    snapshot::LedgerSnapshot,
    types::{FirmId, Money},
    window::{DateWindow, TimeRange},
};
use chrono::NaiveDate;
use serde::Serialize;

/// Projection shared by every flow row regardless of ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLine {
    pub date: NaiveDate,
    pub amount: Money,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InflowEntry {
    Payment {
        line: FlowLine,
        event_title: Option<String>,
    },
    Advance {
        line: FlowLine,
        event_title: String,
        client_name: Option<String>,
    },
    AccountingCredit {
        line: FlowLine,
        title: String,
        category: String,
    },
}

impl InflowEntry {
    pub fn line(&self) -> &FlowLine {
        match self {
            Self::Payment { line, .. }
            | Self::Advance { line, .. }
            | Self::AccountingCredit { line, .. } => line,
        }
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Payment { .. } => "Payment",
            Self::Advance { .. } => "Advance",
            Self::AccountingCredit { .. } => "Accounting",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Payment { event_title, .. } => event_title
                .clone()
                .unwrap_or_else(|| "Payment received".to_string()),
            Self::Advance { event_title, .. } => format!("Advance - {event_title}"),
            Self::AccountingCredit { title, category, .. } => format!("{title} ({category})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutflowEntry {
    Expense {
        line: FlowLine,
        category: String,
        description: Option<String>,
    },
    AccountingDebit {
        line: FlowLine,
        title: String,
        category: String,
    },
}

impl OutflowEntry {
    pub fn line(&self) -> &FlowLine {
        match self {
            Self::Expense { line, .. } | Self::AccountingDebit { line, .. } => line,
        }
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Expense { .. } => "Expense",
            Self::AccountingDebit { .. } => "Accounting",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Expense { category, description: Some(d), .. } => format!("{category} - {d}"),
            Self::Expense { category, description: None, .. } => category.clone(),
            Self::AccountingDebit { title, category, .. } => format!("{title} ({category})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceStatement {
    pub firm_id: FirmId,
    pub range: TimeRange,
    pub window: DateWindow,
    pub inflows: Vec<InflowEntry>,
    pub outflows: Vec<OutflowEntry>,
    pub cash_in: Money,
    pub digital_in: Money,
    pub cash_out: Money,
    pub digital_out: Money,
    pub total_in: Money,
    pub total_out: Money,
    pub net_profit: Money,
}

impl FinanceStatement {
    pub fn inflow_pages(&self, page_size: usize) -> Vec<&[InflowEntry]> {
        paginate(&self.inflows, page_size)
    }

    pub fn outflow_pages(&self, page_size: usize) -> Vec<&[OutflowEntry]> {
        paginate(&self.outflows, page_size)
    }
}

/// Split rows into display pages. Always at least one (possibly empty) page.
pub fn paginate<T>(rows: &[T], page_size: usize) -> Vec<&[T]> {
    if rows.is_empty() {
        return vec![rows];
    }
    rows.chunks(page_size.max(1)).collect()
}

pub fn compute_finance_report(
    snapshot: &LedgerSnapshot,
    range: TimeRange,
    today: NaiveDate,
) -> FinanceStatement {
    let window = range.window(today);

    // ── Money in ───────────────────────────────────────────

    let mut inflows: Vec<InflowEntry> = Vec::new();

    inflows.extend(
        snapshot
            .payments
            .iter()
            .filter(|p| window.contains(p.payment_date))
            .map(|p| InflowEntry::Payment {
                line: FlowLine {
                    date: p.payment_date,
                    amount: p.amount,
                    method: PaymentMethod::parse(p.payment_method.as_deref()),
                },
                event_title: p.event_title.clone(),
            }),
    );

    inflows.extend(
        snapshot
            .events
            .iter()
            .filter(|e| e.advance_amount > 0.0 && window.contains(e.event_date))
            .map(|e| InflowEntry::Advance {
                line: FlowLine {
                    date: e.event_date,
                    amount: e.advance_amount,
                    method: PaymentMethod::parse(e.advance_payment_method.as_deref()),
                },
                event_title: e.title.clone(),
                client_name: e.client_name.clone(),
            }),
    );

    let reflected = snapshot
        .accounting_entries
        .iter()
        .filter(|a| a.reflect_to_company && window.contains(a.entry_date));

    inflows.extend(
        reflected
            .clone()
            .filter(|a| a.entry_type == EntryType::Credit)
            .map(|a| InflowEntry::AccountingCredit {
                line: FlowLine {
                    date: a.entry_date,
                    amount: a.amount,
                    method: PaymentMethod::parse(a.payment_method.as_deref()),
                },
                title: a.title.clone(),
                category: a.category.clone(),
            }),
    );

    // ── Money out ──────────────────────────────────────────

    let mut outflows: Vec<OutflowEntry> = Vec::new();

    outflows.extend(
        snapshot
            .expenses
            .iter()
            .filter(|e| window.contains(e.expense_date))
            .map(|e| OutflowEntry::Expense {
                line: FlowLine {
                    date: e.expense_date,
                    amount: e.amount,
                    method: PaymentMethod::parse(e.payment_method.as_deref()),
                },
                category: e.category.clone(),
                description: e.description.clone(),
            }),
    );

    outflows.extend(
        reflected
            .filter(|a| a.entry_type == EntryType::Debit)
            .map(|a| OutflowEntry::AccountingDebit {
                line: FlowLine {
                    date: a.entry_date,
                    amount: a.amount,
                    method: PaymentMethod::parse(a.payment_method.as_deref()),
                },
                title: a.title.clone(),
                category: a.category.clone(),
            }),
    );

    // Newest first; ties keep ledger order.
    inflows.sort_by(|a, b| b.line().date.cmp(&a.line().date));
    outflows.sort_by(|a, b| b.line().date.cmp(&a.line().date));

    // ── Totals ─────────────────────────────────────────────

    let (cash_in, digital_in) = split_by_method(inflows.iter().map(InflowEntry::line));
    let (cash_out, digital_out) = split_by_method(outflows.iter().map(OutflowEntry::line));
    let total_in = cash_in + digital_in;
    let total_out = cash_out + digital_out;
    let net_profit = total_in - total_out;

    log::debug!(
        "firm={} finance report ({}): in={total_in:.2} out={total_out:.2} net={net_profit:.2}",
        snapshot.firm_id,
        range.label()
    );

    FinanceStatement {
        firm_id: snapshot.firm_id.clone(),
        range,
        window,
        inflows,
        outflows,
        cash_in,
        digital_in,
        cash_out,
        digital_out,
        total_in,
        total_out,
        net_profit,
    }
}

/// (cash, digital) totals.
fn split_by_method<'a>(lines: impl Iterator<Item = &'a FlowLine>) -> (Money, Money) {
    lines.fold((0.0, 0.0), |(cash, digital), line| match line.method {
        PaymentMethod::Cash => (cash + line.amount, digital),
        PaymentMethod::Digital => (cash, digital + line.amount),
    })
}
