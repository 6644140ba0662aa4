use chrono::NaiveDate;
use studio_core::{
    balance_sheet::{compute_balance_sheet, BalanceCheck},
    demo::DemoFirm,
    engine::ReportEngine,
    ledger::{
        AccountingEntryRow, EntryType, EventRow, ExpenseRow, PaymentRow, StaffPaymentRow,
    },
    snapshot::LedgerSnapshot,
};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn event(id: &str, total: f64, advance: f64) -> EventRow {
    EventRow {
        id: id.into(),
        firm_id: "f1".into(),
        title: format!("Event {id}"),
        event_type: "Wedding".into(),
        client_name: None,
        event_date: day(2, 1),
        total_amount: total,
        advance_amount: advance,
        advance_payment_method: Some("Cash".into()),
        closing_adjustment: 0.0,
    }
}

fn payment(id: &str, event_id: Option<&str>, amount: f64) -> PaymentRow {
    PaymentRow {
        id: id.into(),
        firm_id: "f1".into(),
        event_id: event_id.map(String::from),
        event_title: None,
        amount,
        payment_date: day(2, 10),
        payment_method: Some("UPI".into()),
    }
}

fn entry(id: &str, entry_type: EntryType, amount: f64, reflect: bool) -> AccountingEntryRow {
    AccountingEntryRow {
        id: id.into(),
        firm_id: "f1".into(),
        title: format!("Entry {id}"),
        category: "General".into(),
        entry_type,
        amount,
        entry_date: day(3, 1),
        payment_method: None,
        reflect_to_company: reflect,
    }
}

/// payments 500, advance 100, expenses 200, staff 50, credit 30, debit 20.
fn reference_snapshot() -> LedgerSnapshot {
    LedgerSnapshot {
        firm_id: "f1".into(),
        payments: vec![payment("p1", None, 500.0)],
        events: vec![event("e1", 100.0, 100.0)],
        expenses: vec![ExpenseRow {
            id: "x1".into(),
            firm_id: "f1".into(),
            category: "Travel".into(),
            description: None,
            amount: 200.0,
            expense_date: day(2, 5),
            payment_method: Some("Cash".into()),
        }],
        staff_payments: vec![StaffPaymentRow {
            id: "s1".into(),
            firm_id: "f1".into(),
            staff_name: "Neha Joshi".into(),
            amount: 50.0,
            payment_date: day(2, 28),
            payment_method: None,
            description: None,
        }],
        freelancer_payments: vec![],
        accounting_entries: vec![
            entry("a1", EntryType::Credit, 30.0, false),
            entry("a2", EntryType::Debit, 20.0, false),
        ],
    }
}

#[test]
fn reference_books_balance() {
    let s = compute_balance_sheet(&reference_snapshot());

    assert_eq!(s.cash, 600.0);
    assert_eq!(s.accounts_receivable, 0.0);
    assert_eq!(s.other_assets, 20.0);
    assert_eq!(s.total_assets, 620.0);

    assert_eq!(s.accounts_payable, 250.0);
    assert_eq!(s.accounting_liabilities, 30.0);
    assert_eq!(s.total_liabilities, 280.0);

    assert_eq!(s.retained_earnings, 340.0);
    assert_eq!(s.total_equity, 340.0);
    assert_eq!(s.total_liabilities + s.total_equity, s.total_assets);
    assert_eq!(s.check(1.0), BalanceCheck::Balanced);
}

#[test]
fn receivable_counts_only_linked_payments() {
    let mut snapshot = LedgerSnapshot::empty("f1");
    snapshot.events = vec![event("e1", 1_000.0, 200.0), event("e2", 500.0, 0.0)];
    snapshot.payments = vec![
        payment("p1", Some("e1"), 300.0),
        payment("p2", Some("e2"), 100.0),
        payment("p3", None, 999.0),
    ];

    let s = compute_balance_sheet(&snapshot);
    // e1: 1000 - 300 - 200 = 500; e2: 500 - 100 = 400
    assert_eq!(s.accounts_receivable, 900.0);
    assert_eq!(s.cash, 300.0 + 100.0 + 999.0 + 200.0);
}

#[test]
fn overpaid_events_do_not_go_negative() {
    let mut snapshot = LedgerSnapshot::empty("f1");
    let mut closed = event("e1", 1_000.0, 400.0);
    closed.closing_adjustment = 100.0;
    snapshot.events = vec![closed];
    snapshot.payments = vec![payment("p1", Some("e1"), 700.0)];

    let s = compute_balance_sheet(&snapshot);
    assert_eq!(s.accounts_receivable, 0.0);
}

#[test]
fn negative_advances_are_not_cash() {
    let mut snapshot = LedgerSnapshot::empty("f1");
    snapshot.events = vec![event("e1", 0.0, -50.0)];
    assert_eq!(compute_balance_sheet(&snapshot).cash, 0.0);
}

#[test]
fn accounting_entries_count_regardless_of_reflect_flag() {
    let mut snapshot = LedgerSnapshot::empty("f1");
    snapshot.accounting_entries = vec![
        entry("a1", EntryType::Debit, 10.0, true),
        entry("a2", EntryType::Debit, 15.0, false),
        entry("a3", EntryType::Credit, 7.0, true),
    ];
    let s = compute_balance_sheet(&snapshot);
    assert_eq!(s.other_assets, 25.0);
    assert_eq!(s.accounting_liabilities, 7.0);
}

#[test]
fn empty_books_are_all_zero_and_balanced() {
    let s = compute_balance_sheet(&LedgerSnapshot::empty("f1"));
    assert_eq!(s.total_assets, 0.0);
    assert_eq!(s.total_liabilities, 0.0);
    assert_eq!(s.total_equity, 0.0);
    assert_eq!(s.check(1.0), BalanceCheck::Balanced);
}

#[test]
fn edited_statement_fails_the_check() {
    let mut s = compute_balance_sheet(&reference_snapshot());
    s.total_equity += 5.0;
    assert_eq!(s.check(1.0), BalanceCheck::Unbalanced);
    assert_eq!(s.check(10.0), BalanceCheck::Balanced);
}

#[test]
fn synthesized_books_always_balance() {
    let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    for seed in [1u64, 7, 42, 2024, 0xDEAD_BEEF] {
        let snapshot = DemoFirm::generate("demo", seed, today);
        let engine = ReportEngine::new(&snapshot);
        let s = engine.balance_sheet("demo").expect("balance sheet");

        assert_eq!(
            s.total_assets,
            s.total_liabilities + s.total_equity,
            "seed {seed} does not balance"
        );
        assert!(s.accounts_receivable >= 0.0);
        assert_eq!(s.check(1.0), BalanceCheck::Balanced);
    }
}
