//! Per-event outstanding balance (accounts receivable).

use crate::{
    ledger::{EventRow, PaymentRow},
    types::{EntityId, Money},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBalance {
    pub event_id: EntityId,
    pub title: String,
    pub client_name: Option<String>,
    pub billed: Money,
    pub received: Money,
    pub advance: Money,
    pub closing_adjustment: Money,
    pub outstanding: Money,
}

/// billed − payments received − advance − closing adjustment, floored at
/// zero. Only payments linked to this event count.
pub fn event_balance(event: &EventRow, payments: &[PaymentRow]) -> EventBalance {
    let received: Money = payments
        .iter()
        .filter(|p| p.event_id.as_deref() == Some(event.id.as_str()))
        .map(|p| p.amount)
        .sum();
    let advance = event.advance_amount.max(0.0);
    let outstanding =
        (event.total_amount - received - advance - event.closing_adjustment).max(0.0);

    EventBalance {
        event_id: event.id.clone(),
        title: event.title.clone(),
        client_name: event.client_name.clone(),
        billed: event.total_amount,
        received,
        advance,
        closing_adjustment: event.closing_adjustment,
        outstanding,
    }
}

pub fn event_balances(events: &[EventRow], payments: &[PaymentRow]) -> Vec<EventBalance> {
    events.iter().map(|e| event_balance(e, payments)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(total: f64, advance: f64, closing: f64) -> EventRow {
        EventRow {
            id: "ev-1".into(),
            firm_id: "firm".into(),
            title: "Sharma Wedding".into(),
            event_type: "Wedding".into(),
            client_name: Some("Asha Sharma".into()),
            event_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            total_amount: total,
            advance_amount: advance,
            advance_payment_method: None,
            closing_adjustment: closing,
        }
    }

    fn payment(event_id: &str, amount: f64) -> PaymentRow {
        PaymentRow {
            id: format!("pay-{amount}"),
            firm_id: "firm".into(),
            event_id: Some(event_id.into()),
            event_title: None,
            amount,
            payment_date: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
            payment_method: Some("UPI".into()),
        }
    }

    #[test]
    fn outstanding_subtracts_every_settlement() {
        let b = event_balance(
            &event(100_000.0, 20_000.0, 5_000.0),
            &[payment("ev-1", 30_000.0), payment("ev-2", 99_000.0)],
        );
        assert_eq!(b.received, 30_000.0);
        assert_eq!(b.outstanding, 45_000.0);
    }

    #[test]
    fn overpaid_event_has_no_receivable() {
        let b = event_balance(&event(10_000.0, 8_000.0, 0.0), &[payment("ev-1", 5_000.0)]);
        assert_eq!(b.outstanding, 0.0);
    }
}
