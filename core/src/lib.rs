//! Studio back-office core: record views over ledger rows and the
//! financial statements built from a firm's books.

pub mod balance_sheet;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod event_balance;
pub mod finance_report;
pub mod format;
pub mod ledger;
pub mod name_generator;
pub mod payee_summary;
pub mod record;
pub mod rng;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod types;
pub mod view;
pub mod window;
