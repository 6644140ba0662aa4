//! Search, filter and sort over loosely-typed records.

use chrono::NaiveDate;
use studio_core::{
    ledger::{ExpenseRow, StaffPaymentRow},
    payee_summary::summarize_payees,
    record::{FieldValue, Record, ToRecord},
    view::{compute_view, PaymentStatus, SortSpec, ViewMemo, ViewQuery},
};

fn client(name: &str, amount: Option<f64>) -> Record {
    Record::new()
        .with("client_name", name)
        .with("amount", amount)
}

fn ids(view: &[Record]) -> Vec<String> {
    view.iter().map(|r| r.value("id").to_display_string()).collect()
}

fn names(view: &[Record]) -> Vec<String> {
    view.iter()
        .map(|r| r.value("client_name").to_display_string())
        .collect()
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let data = vec![
        client("Ananya Mehta", Some(100.0)),
        client("Rohan Shah", Some(200.0)),
        client("Kavya MEHTA", None),
    ];

    let query = ViewQuery::new().search("  mEhTa ", &["client_name"]);
    assert_eq!(names(&compute_view(&data, &query)), ["Ananya Mehta", "Kavya MEHTA"]);

    let query = ViewQuery::new().search("iyer", &["client_name"]);
    assert!(compute_view(&data, &query).is_empty());

    // Blank search keeps everything.
    let query = ViewQuery::new().search("   ", &["client_name"]);
    assert_eq!(compute_view(&data, &query).len(), 3);
}

#[test]
fn search_ignores_fields_not_listed() {
    let data = vec![Record::new()
        .with("client_name", "Dev Rao")
        .with("notes", "mehta referral")];
    let query = ViewQuery::new().search("mehta", &["client_name"]);
    assert!(compute_view(&data, &query).is_empty());
}

#[test]
fn numeric_sort_ascending_puts_nulls_last() {
    let data = vec![
        client("a", Some(300.0)),
        client("b", None),
        client("c", Some(100.0)),
        Record::new().with("client_name", "d"),
        client("e", Some(200.0)),
    ];

    let view = compute_view(&data, &ViewQuery::new().sort(SortSpec::asc("amount")));
    let amounts: Vec<Option<f64>> = view.iter().map(|r| r.number("amount")).collect();
    assert_eq!(amounts[..3], [Some(100.0), Some(200.0), Some(300.0)]);
    assert!(amounts[3..].iter().all(Option::is_none));

    let present: Vec<f64> = amounts.iter().flatten().copied().collect();
    assert!(present.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn descending_sort_still_puts_nulls_last() {
    let data = vec![client("a", None), client("b", Some(5.0)), client("c", Some(50.0))];
    let view = compute_view(&data, &ViewQuery::new().sort(SortSpec::desc("amount")));
    assert_eq!(names(&view), ["c", "b", "a"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let data = vec![
        client("first", Some(10.0)),
        client("second", Some(10.0)),
        client("third", Some(5.0)),
    ];
    let view = compute_view(&data, &ViewQuery::new().sort(SortSpec::asc("amount")));
    assert_eq!(names(&view), ["third", "first", "second"]);
}

#[test]
fn date_keys_sort_chronologically_across_formats() {
    let data = vec![
        Record::new().with("client_name", "x").with("event_date", "2024-03-01"),
        Record::new()
            .with("client_name", "y")
            .with("event_date", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        Record::new().with("client_name", "z").with("event_date", "2024-02-10T09:30:00Z"),
        Record::new().with("client_name", "bad").with("event_date", "someday"),
    ];
    let view = compute_view(&data, &ViewQuery::new().sort(SortSpec::asc("event_date")));
    assert_eq!(names(&view), ["y", "z", "x", "bad"]);
}

#[test]
fn payment_status_partitions_every_record() {
    let cases = [
        (0.0, 0.0, PaymentStatus::NoEarnings),
        (-10.0, 5.0, PaymentStatus::NoEarnings),
        (100.0, 150.0, PaymentStatus::Overpaid),
        (100.0, 100.0, PaymentStatus::FullyPaid),
        (100.0, 40.0, PaymentStatus::PartialPaid),
        (100.0, 0.0, PaymentStatus::PendingPayment),
    ];
    let data: Vec<Record> = cases
        .iter()
        .map(|(earned, paid, _)| {
            Record::new()
                .with("total_earnings", *earned)
                .with("total_paid", *paid)
        })
        .collect();

    let mut seen = vec![0usize; data.len()];
    for status in PaymentStatus::ALL {
        let query = ViewQuery::new().filter("payment_status", status.token());
        let view = compute_view(&data, &query);
        for (i, record) in data.iter().enumerate() {
            if view.contains(record) {
                seen[i] += 1;
                assert_eq!(cases[i].2, status, "record {i} landed in {status:?}");
            }
        }
    }
    assert!(seen.iter().all(|n| *n == 1), "every record in exactly one status: {seen:?}");
}

#[test]
fn event_type_filter_uses_canonical_values() {
    let data = vec![
        Record::new().with("id", "1").with("event_type", "Ring-Ceremony"),
        Record::new().with("id", "2").with("event_type", "Pre-Wedding"),
        Record::new().with("id", "3").with("event_type", "Wedding"),
    ];
    let ids = |view: Vec<Record>| -> Vec<String> {
        view.iter().map(|r| r.value("id").to_display_string()).collect()
    };

    let query = ViewQuery::new().filter("event_type", "ring ceremony");
    assert_eq!(ids(compute_view(&data, &query)), ["1"]);

    let query = ViewQuery::new().filter("event_type", &["wedding", "pre wedding"][..]);
    assert_eq!(ids(compute_view(&data, &query)), ["2", "3"]);
}

#[test]
fn all_and_blank_filter_values_are_ignored() {
    let data = vec![client("a", Some(1.0)), client("b", Some(2.0))];
    let query = ViewQuery::new()
        .filter("client_name", "all")
        .filter("amount", "")
        .filter("role", Vec::<String>::new());
    assert_eq!(compute_view(&data, &query).len(), 2);
}

#[test]
fn unknown_band_tokens_keep_the_record() {
    let data = vec![Record::new().with("total_earnings", 3_000.0)];
    let query = ViewQuery::new().filter("earning_range", "between_friends");
    assert_eq!(compute_view(&data, &query).len(), 1);

    let query = ViewQuery::new().filter("earning_range", "above_75k");
    assert!(compute_view(&data, &query).is_empty());

    let query = ViewQuery::new().filter("earning_range", "under_5k");
    assert_eq!(compute_view(&data, &query).len(), 1);
}

#[test]
fn filters_on_missing_fields_exclude_the_record() {
    let data = vec![
        Record::new().with("category", "Travel"),
        Record::new().with("category", FieldValue::Null),
        Record::new(),
    ];
    let query = ViewQuery::new().filter("category", "trav");
    assert_eq!(compute_view(&data, &query).len(), 1);
}

#[test]
fn date_filter_matches_same_calendar_day() {
    let expense = |id: &str, day: u32| ExpenseRow {
        id: id.into(),
        firm_id: "f1".into(),
        category: "Travel".into(),
        description: None,
        amount: 100.0,
        expense_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        payment_method: Some("UPI".into()),
    };
    let data = vec![expense("e1", 3).to_record(), expense("e2", 4).to_record()];

    let query = ViewQuery::new().filter("expense_date", NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
    let view = compute_view(&data, &query);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].value("id").to_display_string(), "e2");

    let query = ViewQuery::new().filter("expense_date", "2024-05-03T18:45:00");
    assert_eq!(compute_view(&data, &query).len(), 1);
}

#[test]
fn engine_is_idempotent() {
    let data = vec![
        client("Meera Iyer", Some(20.0)),
        client("Isha Nair", Some(20.0)),
        client("Zara Iyer", None),
        client("Dev Iyer", Some(5.0)),
    ];
    let query = ViewQuery::new()
        .search("iyer", &["client_name"])
        .sort(SortSpec::desc("amount"));

    let first = compute_view(&data, &query);
    let second = compute_view(&data, &query);
    assert_eq!(first, second);
    assert_eq!(names(&first), ["Meera Iyer", "Dev Iyer", "Zara Iyer"]);
}

#[test]
fn memo_recomputes_only_when_inputs_change() {
    let data = vec![client("a", Some(2.0)), client("b", Some(1.0))];
    let query = ViewQuery::new().sort(SortSpec::asc("amount"));
    let mut memo = ViewMemo::new();

    assert_eq!(names(memo.view(&data, &query)), ["b", "a"]);
    assert_eq!(names(memo.view(&data, &query)), ["b", "a"]);
    assert_eq!(memo.recomputations(), 1);

    let query = query.sort(SortSpec::desc("amount"));
    assert_eq!(names(memo.view(&data, &query)), ["a", "b"]);
    assert_eq!(memo.recomputations(), 2);

    let mut data = data;
    data.push(client("c", Some(3.0)));
    assert_eq!(names(memo.view(&data, &query)), ["c", "a", "b"]);
    assert_eq!(memo.recomputations(), 3);
}

#[test]
fn role_matches_case_insensitively_or_by_membership() {
    let data = vec![
        Record::new().with("id", "1").with("role", "Photographer"),
        Record::new().with("id", "2").with("role", "Editor"),
        Record::new().with("id", "3").with("role", "ASSISTANT"),
        Record::new().with("id", "4"),
    ];

    let query = ViewQuery::new().filter("role", "photographer");
    assert_eq!(ids(&compute_view(&data, &query)), ["1"]);

    let query = ViewQuery::new().filter("role", &["editor", " Assistant "][..]);
    assert_eq!(ids(&compute_view(&data, &query)), ["2", "3"]);

    // Equality, not substring.
    let query = ViewQuery::new().filter("role", "photo");
    assert!(compute_view(&data, &query).is_empty());
}

#[test]
fn assignment_bands_cover_both_sets() {
    let data: Vec<Record> = [0.0, 2.0, 4.0, 7.0, 12.0, 20.0]
        .iter()
        .map(|n| {
            Record::new()
                .with("id", format!("{n}"))
                .with("total_assignments", *n)
        })
        .collect();
    let band = |token: &str| ids(&compute_view(&data, &ViewQuery::new().filter("assignment_count", token)));

    assert_eq!(band("no_assignments"), ["0"]);
    assert_eq!(band("1_3"), ["2"]);
    assert_eq!(band("4_10"), ["4", "7"]);
    assert_eq!(band("above_10"), ["12", "20"]);
    assert_eq!(band("1_5"), ["2", "4"]);
    assert_eq!(band("6_15"), ["7", "12"]);
    assert_eq!(band("above_15"), ["20"]);

    let query = ViewQuery::new().filter("assignment_count", &["no_assignments", "above_15"][..]);
    assert_eq!(ids(&compute_view(&data, &query)), ["0", "20"]);
}

#[test]
fn task_completion_buckets() {
    let task = |id: &str, total: f64, completed: f64| {
        Record::new()
            .with("id", id)
            .with("total_tasks", total)
            .with("completed_tasks", completed)
    };
    let data = vec![
        task("done", 4.0, 4.0),
        task("open", 4.0, 1.0),
        task("empty", 0.0, 0.0),
        Record::new().with("id", "untracked"),
    ];
    let bucket = |token: &str| ids(&compute_view(&data, &ViewQuery::new().filter("task_completion", token)));

    assert_eq!(bucket("all_completed"), ["done"]);
    assert_eq!(bucket("pending_tasks"), ["open"]);
    // Zero tasks is its own bucket, never "all completed".
    assert_eq!(bucket("no_tasks"), ["empty"]);
}

#[test]
fn band_filters_skip_records_without_band_fields() {
    let payout = StaffPaymentRow {
        id: "s1".into(),
        firm_id: "f1".into(),
        staff_name: "Ravi Kumar".into(),
        amount: 40_000.0,
        payment_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        payment_method: Some("Bank Transfer".into()),
        description: None,
    };
    let data = vec![payout.to_record()];

    for (key, token) in [
        ("earning_range", "under_5k"),
        ("assignment_count", "no_assignments"),
        ("task_completion", "no_tasks"),
    ] {
        let query = ViewQuery::new().filter(key, token);
        assert!(compute_view(&data, &query).is_empty(), "{key}={token} kept a payout row");
    }

    // The per-payee rollup carries the fields, so the bands apply.
    let summaries: Vec<Record> = summarize_payees(&[payout], &[])
        .iter()
        .map(ToRecord::to_record)
        .collect();
    let band = |key: &str, token: &str| compute_view(&summaries, &ViewQuery::new().filter(key, token)).len();
    assert_eq!(band("earning_range", "under_5k"), 0);
    assert_eq!(band("earning_range", "25k_75k"), 1);
    assert_eq!(band("assignment_count", "1_3"), 1);
    assert_eq!(band("role", "staff"), 1);
}

#[test]
fn skip_list_keys_never_filter() {
    let data = vec![
        Record::new().with("id", "1").with("status", "cancelled").with("amount", 10.0),
        Record::new().with("id", "2"),
    ];
    let query = ViewQuery::new()
        .filter("status", "confirmed")
        .filter("amount_range", "above_50k")
        .filter("client_id", "c-404")
        .filter("staff_assignment_status", "unassigned")
        .filter("date_range", "this_week")
        .filter("mix_mode", "both");
    assert_eq!(ids(&compute_view(&data, &query)), ["1", "2"]);
}

#[test]
fn mix_mode_other_than_both_uses_default_matching() {
    let data = vec![
        Record::new().with("id", "1").with("mix_mode", "staff"),
        Record::new().with("id", "2").with("mix_mode", "freelancer"),
        Record::new().with("id", "3"),
    ];
    let query = ViewQuery::new().filter("mix_mode", "Staff");
    assert_eq!(ids(&compute_view(&data, &query)), ["1"]);

    let query = ViewQuery::new().filter("mix_mode", "BOTH");
    assert_eq!(compute_view(&data, &query).len(), 3);
}
