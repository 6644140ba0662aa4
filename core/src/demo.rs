//! Deterministic demo firm: a year of plausible studio books.
//!
//! Same (firm_id, seed, today) always yields the same snapshot. Amounts are
//! whole currency units so every derived total is exact.

use crate::{
    ledger::{
        AccountingEntryRow, EntryType, EventRow, ExpenseRow, FreelancerPaymentRow, PaymentRow,
        StaffPaymentRow,
    },
    name_generator::NameGenerator,
    rng::{DemoRng, LedgerSlot, RngBank},
    snapshot::LedgerSnapshot,
};
use chrono::{Datelike, Days, Months, NaiveDate};

const EVENT_COUNT: usize = 24;
const EXPENSE_COUNT: usize = 40;
const FREELANCER_PAYOUT_COUNT: usize = 15;
const ACCOUNTING_ENTRY_COUNT: usize = 10;
const PAYMENT_METHODS: &[&str] = &["Cash", "UPI", "Bank Transfer", "Card", "cash", "Cheque"];

pub struct DemoFirm;

impl DemoFirm {
    pub fn generate(firm_id: &str, seed: u64, today: NaiveDate) -> LedgerSnapshot {
        let bank = RngBank::new(seed);

        let events = Self::events(firm_id, &mut bank.for_ledger(LedgerSlot::Events), today);
        let payments = Self::payments(firm_id, &events, &mut bank.for_ledger(LedgerSlot::Payments));
        let expenses = Self::expenses(firm_id, &mut bank.for_ledger(LedgerSlot::Expenses), today);
        let staff_payments =
            Self::staff_payments(firm_id, &mut bank.for_ledger(LedgerSlot::StaffPayments), today);
        let freelancer_payments = Self::freelancer_payments(
            firm_id,
            &mut bank.for_ledger(LedgerSlot::FreelancerPayments),
            today,
        );
        let accounting_entries = Self::accounting_entries(
            firm_id,
            &mut bank.for_ledger(LedgerSlot::AccountingEntries),
            today,
        );

        let snapshot = LedgerSnapshot {
            firm_id: firm_id.to_string(),
            payments,
            events,
            expenses,
            staff_payments,
            freelancer_payments,
            accounting_entries,
        };
        log::debug!("demo firm={firm_id} seed={seed}: {} rows", snapshot.row_count());
        snapshot
    }

    fn events(firm_id: &str, rng: &mut DemoRng, today: NaiveDate) -> Vec<EventRow> {
        (0..EVENT_COUNT)
            .map(|i| {
                let event_type = *rng.pick(NameGenerator::event_types());
                // ~15% of bookings are still ahead of us.
                let event_date = if rng.chance(0.15) {
                    days_after(today, rng.below(60) + 1)
                } else {
                    days_before(today, rng.below(365))
                };
                let total_amount = rng.amount(25_000, 250_000, 500);
                let advance_amount = if rng.chance(0.2) {
                    0.0
                } else {
                    rng.amount(2_000, (total_amount * 0.3) as u64, 500)
                };
                let closing_adjustment = if rng.chance(0.1) {
                    rng.amount(500, 5_000, 500)
                } else {
                    0.0
                };
                EventRow {
                    id: format!("{firm_id}-ev-{i:03}"),
                    firm_id: firm_id.to_string(),
                    title: NameGenerator::generate_event_title(rng, event_type),
                    event_type: event_type.to_string(),
                    client_name: Some(NameGenerator::generate_full_name(rng)),
                    event_date,
                    total_amount,
                    advance_amount,
                    advance_payment_method: Some(rng.pick(PAYMENT_METHODS).to_string()),
                    closing_adjustment,
                }
            })
            .collect()
    }

    /// Zero to three instalments per event, never more than what is owed.
    fn payments(firm_id: &str, events: &[EventRow], rng: &mut DemoRng) -> Vec<PaymentRow> {
        let mut rows = Vec::new();
        for event in events {
            let mut remaining = (event.total_amount - event.advance_amount) as u64;
            for _ in 0..3 {
                if remaining < 1_000 || !rng.chance(0.6) {
                    break;
                }
                let amount = rng.amount(1_000, remaining, 500);
                remaining -= amount as u64;
                rows.push(PaymentRow {
                    id: format!("{firm_id}-pay-{:04}", rows.len()),
                    firm_id: firm_id.to_string(),
                    event_id: Some(event.id.clone()),
                    event_title: Some(event.title.clone()),
                    amount,
                    payment_date: days_after(event.event_date, rng.below(30)),
                    payment_method: Some(rng.pick(PAYMENT_METHODS).to_string()),
                });
            }
        }
        rows
    }

    fn expenses(firm_id: &str, rng: &mut DemoRng, today: NaiveDate) -> Vec<ExpenseRow> {
        (0..EXPENSE_COUNT)
            .map(|i| ExpenseRow {
                id: format!("{firm_id}-exp-{i:03}"),
                firm_id: firm_id.to_string(),
                category: rng.pick(NameGenerator::expense_categories()).to_string(),
                description: rng.chance(0.7).then(|| NameGenerator::generate_vendor(rng)),
                amount: rng.amount(500, 30_000, 100),
                expense_date: days_before(today, rng.below(365)),
                payment_method: Some(rng.pick(PAYMENT_METHODS).to_string()),
            })
            .collect()
    }

    /// Two salaried staff, paid on the first of each of the last 12 months.
    fn staff_payments(firm_id: &str, rng: &mut DemoRng, today: NaiveDate) -> Vec<StaffPaymentRow> {
        let staff = [
            NameGenerator::generate_full_name(rng),
            NameGenerator::generate_full_name(rng),
        ];
        let mut rows = Vec::new();
        for month in 0..12u32 {
            let Some(payday) = today
                .checked_sub_months(Months::new(month))
                .and_then(|d| d.with_day(1))
            else {
                continue;
            };
            for name in &staff {
                let method = if rng.chance(0.3) { "Cash" } else { "Bank Transfer" };
                rows.push(StaffPaymentRow {
                    id: format!("{firm_id}-sal-{:03}", rows.len()),
                    firm_id: firm_id.to_string(),
                    staff_name: name.clone(),
                    amount: rng.amount(15_000, 40_000, 1_000),
                    payment_date: payday,
                    payment_method: Some(method.to_string()),
                    description: Some("Monthly salary".into()),
                });
            }
        }
        rows
    }

    fn freelancer_payments(
        firm_id: &str,
        rng: &mut DemoRng,
        today: NaiveDate,
    ) -> Vec<FreelancerPaymentRow> {
        (0..FREELANCER_PAYOUT_COUNT)
            .map(|i| FreelancerPaymentRow {
                id: format!("{firm_id}-fl-{i:03}"),
                firm_id: firm_id.to_string(),
                freelancer_name: NameGenerator::generate_full_name(rng),
                amount: rng.amount(3_000, 20_000, 500),
                payment_date: days_before(today, rng.below(365)),
                payment_method: Some(rng.pick(PAYMENT_METHODS).to_string()),
                description: Some("Second shooter".into()),
            })
            .collect()
    }

    fn accounting_entries(
        firm_id: &str,
        rng: &mut DemoRng,
        today: NaiveDate,
    ) -> Vec<AccountingEntryRow> {
        const KINDS: &[(&str, &str, EntryType)] = &[
            ("Owner capital", "Capital", EntryType::Credit),
            ("Equipment loan", "Loan", EntryType::Credit),
            ("GST refund", "Tax", EntryType::Credit),
            ("Camera body purchase", "Asset", EntryType::Debit),
            ("Studio security deposit", "Deposit", EntryType::Debit),
            ("Loan repayment", "Loan", EntryType::Debit),
        ];
        (0..ACCOUNTING_ENTRY_COUNT)
            .map(|i| {
                let (title, category, entry_type) = *rng.pick(KINDS);
                AccountingEntryRow {
                    id: format!("{firm_id}-acc-{i:03}"),
                    firm_id: firm_id.to_string(),
                    title: title.to_string(),
                    category: category.to_string(),
                    entry_type,
                    amount: rng.amount(1_000, 50_000, 500),
                    entry_date: days_before(today, rng.below(365)),
                    payment_method: Some(rng.pick(PAYMENT_METHODS).to_string()),
                    reflect_to_company: rng.chance(0.7),
                }
            })
            .collect()
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}

fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}
