//! studio-report: headless statement runner for a studio's books.
//!
//! Usage:
//!   studio-report --db books.db --firm <id> --report balance
//!   studio-report --db books.db --firm <id> --report finance --range quarter --json
//!   studio-report --seed 7 --report view --ledger expenses --search travel --sort amount --desc
//!   studio-report --seed 7 --report finance --range custom --start 2026-01-01 --end 2026-03-31
//!   studio-report --seed 7 --report payees --range year --filter role=freelancer --filter earning_range=10k_50k

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::env;
use studio_core::{
    balance_sheet::BalanceSheetStatement,
    config::ReportConfig,
    demo::DemoFirm,
    engine::ReportEngine,
    error::StudioError,
    event_balance::EventBalance,
    finance_report::FinanceStatement,
    format::format_money,
    ledger::Ledger,
    record::{Record, ToRecord},
    source::LedgerSource,
    store::StudioStore,
    view::{compute_view, FilterValue, SortSpec, ViewQuery},
    window::{DateWindow, TimeRange},
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let report = flag_value(&args, "--report").unwrap_or("balance");
    let json = args.iter().any(|a| a == "--json");
    let seed: Option<u64> = flag_value(&args, "--seed")
        .map(|s| s.parse::<u64>().with_context(|| format!("--seed expects a number, got '{s}'")))
        .transpose()?;
    let today = match flag_value(&args, "--today") {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let config = ReportConfig::load(data_dir).unwrap_or_else(|e| {
        log::warn!("{e}; using built-in report defaults");
        ReportConfig::default()
    });

    let mut store = if db == ":memory:" {
        StudioStore::in_memory()?
    } else {
        StudioStore::open(db)?
    };
    store.migrate()?;

    let firm_id = match (flag_value(&args, "--firm"), seed) {
        (Some(firm), Some(seed)) => {
            if store.firm_name(firm)?.is_none() {
                store.insert_firm(firm, "Demo Studio")?;
            }
            seed_demo(&mut store, firm, seed, today)?;
            firm.to_string()
        }
        (None, Some(seed)) => {
            let firm = store.create_firm("Demo Studio")?;
            seed_demo(&mut store, &firm, seed, today)?;
            firm
        }
        (Some(firm), None) => firm.to_string(),
        (None, None) => bail!("--firm is required unless --seed is given"),
    };
    let firm_name = store.require_firm(&firm_id)?;

    if !json {
        println!("Studio books: {firm_name}");
        println!("  firm:      {firm_id}");
        println!("  db:        {db}");
        println!("  today:     {today}");
        println!();
    }

    let engine = ReportEngine::new(&store);
    match report {
        "balance" => {
            let statement = engine.balance_sheet(&firm_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                print_balance_sheet(&statement, &config);
            }
        }
        "finance" => {
            let range = parse_range(&args, "month")?;
            let statement = engine.finance_report(&firm_id, range, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                print_finance_report(&statement, &config);
            }
        }
        "events" => {
            let balances = engine.event_balances(&firm_id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&balances)?);
            } else {
                print_event_balances(&balances, &config);
            }
        }
        "view" => {
            let ledger = parse_ledger(flag_value(&args, "--ledger").unwrap_or("expenses"))?;
            let records = ledger_records(&store, ledger, &firm_id)?;
            let query = build_query(&args, search_fields(ledger));
            let view = compute_view(&records, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(ledger.name(), &view, records.len());
            }
        }
        "payees" => {
            let range = parse_range(&args, "year")?;
            let summaries = engine.payee_summaries(&firm_id, range, today)?;
            let records = to_records(summaries);
            let query = build_query(&args, &["name", "role"]);
            let view = compute_view(&records, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_band_options(&config);
                print_view("payees", &view, records.len());
            }
        }
        other => bail!("unknown report '{other}' (expected balance, finance, events, view or payees)"),
    }

    Ok(())
}

fn seed_demo(store: &mut StudioStore, firm_id: &str, seed: u64, today: NaiveDate) -> Result<()> {
    let snapshot = DemoFirm::generate(firm_id, seed, today);
    store
        .insert_snapshot(&snapshot)
        .with_context(|| format!("seeding demo books for firm {firm_id}"))?;
    Ok(())
}

// ── Argument parsing ───────────────────────────────────────────

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn flag_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].as_str())
        .collect()
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow::Error::from(StudioError::InvalidDate {
            value: raw.to_string(),
        })
    })
}

fn parse_range(args: &[String], default: &str) -> Result<TimeRange> {
    let start = flag_value(args, "--start").map(parse_date).transpose()?;
    let end = flag_value(args, "--end").map(parse_date).transpose()?;
    match flag_value(args, "--range").unwrap_or(default) {
        "custom" => match start {
            Some(start) => Ok(TimeRange::Custom { start, end }),
            None => bail!("--range custom needs --start YYYY-MM-DD"),
        },
        named => Ok(named.parse::<TimeRange>()?),
    }
}

fn parse_ledger(raw: &str) -> Result<Ledger> {
    Ok(match raw {
        "payments" => Ledger::Payments,
        "events" => Ledger::Events,
        "expenses" => Ledger::Expenses,
        "staff_payments" | "staff" => Ledger::StaffPayments,
        "freelancer_payments" | "freelancers" => Ledger::FreelancerPayments,
        "accounting_entries" | "accounting" => Ledger::AccountingEntries,
        other => bail!("unknown ledger '{other}'"),
    })
}

/// `--filter key=value`, repeatable. Comma-separated values become a list.
fn build_query(args: &[String], fields: &[&str]) -> ViewQuery {
    let mut query = ViewQuery::new();
    if let Some(term) = flag_value(args, "--search") {
        query = query.search(term, fields);
    }
    if let Some(key) = flag_value(args, "--sort") {
        let desc = args.iter().any(|a| a == "--desc");
        query = query.sort(if desc { SortSpec::desc(key) } else { SortSpec::asc(key) });
    }
    for raw in flag_values(args, "--filter") {
        let Some((key, value)) = raw.split_once('=') else {
            log::warn!("ignoring filter '{raw}' (expected key=value)");
            continue;
        };
        let value = if value.contains(',') {
            FilterValue::List(value.split(',').map(|v| v.trim().to_string()).collect())
        } else {
            FilterValue::Text(value.to_string())
        };
        query = query.filter(key.trim(), value);
    }
    query
}

fn search_fields(ledger: Ledger) -> &'static [&'static str] {
    match ledger {
        Ledger::Payments => &["event_title", "payment_method"],
        Ledger::Events => &["title", "client_name", "event_type"],
        Ledger::Expenses => &["category", "description", "payment_method"],
        Ledger::StaffPayments => &["staff_name", "description"],
        Ledger::FreelancerPayments => &["freelancer_name", "description"],
        Ledger::AccountingEntries => &["title", "category"],
    }
}

fn ledger_records(store: &StudioStore, ledger: Ledger, firm_id: &str) -> Result<Vec<Record>> {
    let all = DateWindow::all_time();
    Ok(match ledger {
        Ledger::Payments => to_records(store.payments(firm_id, &all)?),
        Ledger::Events => to_records(store.events(firm_id, &all)?),
        Ledger::Expenses => to_records(store.expenses(firm_id, &all)?),
        Ledger::StaffPayments => to_records(store.staff_payments(firm_id, &all)?),
        Ledger::FreelancerPayments => to_records(store.freelancer_payments(firm_id, &all)?),
        Ledger::AccountingEntries => to_records(store.accounting_entries(firm_id, &all)?),
    })
}

fn to_records<T: ToRecord>(rows: Vec<T>) -> Vec<Record> {
    rows.iter().map(ToRecord::to_record).collect()
}

// ── Output ─────────────────────────────────────────────────────

fn print_balance_sheet(s: &BalanceSheetStatement, config: &ReportConfig) {
    let money = |v| format_money(v, &config.currency_symbol);
    println!("=== BALANCE SHEET ===");
    println!("  ASSETS");
    println!("    cash:                  {}", money(s.cash));
    println!("    accounts receivable:   {}", money(s.accounts_receivable));
    println!("    other assets:          {}", money(s.other_assets));
    println!("    total assets:          {}", money(s.total_assets));
    println!("  LIABILITIES");
    println!("    accounts payable:      {}", money(s.accounts_payable));
    println!("    accounting entries:    {}", money(s.accounting_liabilities));
    println!("    total liabilities:     {}", money(s.total_liabilities));
    println!("  EQUITY");
    println!("    retained earnings:     {}", money(s.retained_earnings));
    println!("    total equity:          {}", money(s.total_equity));
    println!();
    println!("  check: {}", s.check(config.balance_tolerance).label());
}

fn print_finance_report(s: &FinanceStatement, config: &ReportConfig) {
    let money = |v| format_money(v, &config.currency_symbol);
    println!("=== FINANCE REPORT ({}) ===", s.range.label());
    println!("  money in:    {}  (cash {}, digital {})", money(s.total_in), money(s.cash_in), money(s.digital_in));
    println!("  money out:   {}  (cash {}, digital {})", money(s.total_out), money(s.cash_out), money(s.digital_out));
    println!("  net profit:  {}", money(s.net_profit));

    let pages = s.inflow_pages(config.page_size);
    for (i, page) in pages.iter().enumerate() {
        println!();
        println!("  --- Money in, page {}/{} ---", i + 1, pages.len());
        if page.is_empty() {
            println!("  (no inflows in this period)");
        }
        for entry in page.iter() {
            let line = entry.line();
            println!(
                "  {} | {:<10} | {:<8} | {:>14} | {}",
                line.date,
                entry.source_label(),
                line.method.label(),
                money(line.amount),
                entry.description()
            );
        }
    }

    let pages = s.outflow_pages(config.page_size);
    for (i, page) in pages.iter().enumerate() {
        println!();
        println!("  --- Money out, page {}/{} ---", i + 1, pages.len());
        if page.is_empty() {
            println!("  (no outflows in this period)");
        }
        for entry in page.iter() {
            let line = entry.line();
            println!(
                "  {} | {:<10} | {:<8} | {:>14} | {}",
                line.date,
                entry.source_label(),
                line.method.label(),
                money(line.amount),
                entry.description()
            );
        }
    }
}

fn print_event_balances(balances: &[EventBalance], config: &ReportConfig) {
    let money = |v| format_money(v, &config.currency_symbol);
    let outstanding: f64 = balances.iter().map(|b| b.outstanding).sum();
    println!("=== EVENT BALANCES ===");
    println!("  events:       {}", balances.len());
    println!("  outstanding:  {}", money(outstanding));
    println!();
    for b in balances.iter().filter(|b| b.outstanding > 0.0) {
        println!(
            "  {:<36} | billed {:>14} | received {:>14} | due {:>14}",
            b.title,
            money(b.billed),
            money(b.received + b.advance),
            money(b.outstanding)
        );
    }
}

fn print_band_options(config: &ReportConfig) {
    println!("=== BAND FILTERS ===");
    for (role, set) in [("staff", config.staff_band_set), ("freelancer", config.freelancer_band_set)] {
        let earning: Vec<&str> = set.earning_options().iter().map(|b| b.token()).collect();
        let assignments: Vec<&str> = set.assignment_options().iter().map(|b| b.token()).collect();
        println!("  {role:<10} earning_range:    {}", earning.join(" | "));
        println!("  {role:<10} assignment_count: {}", assignments.join(" | "));
    }
    println!();
}

fn print_view(title: &str, view: &[Record], total: usize) {
    println!("=== {title} ({} of {total}) ===", view.len());
    for record in view {
        let line = record
            .fields()
            .filter(|(key, _)| key.as_str() != "firm_id")
            .map(|(key, value)| format!("{key}={}", value.to_display_string()))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("  {line}");
    }
}
