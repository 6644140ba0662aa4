//! Firm books in SQLite.
//!
//! SQL lives in this module and nowhere else. Statements see the books only
//! through `LedgerSource`.

use crate::{
    error::{StudioError, StudioResult},
    snapshot::LedgerSnapshot,
    types::FirmId,
};
mod ledger;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

pub struct StudioStore {
    conn: Connection,
}

impl StudioStore {
    /// Books database at `path`, created on first use.
    pub fn open(path: &str) -> StudioResult<Self> {
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        log::debug!("opened books at {path} (journal_mode={mode})");
        Self::with_connection(conn)
    }

    pub fn in_memory() -> StudioResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StudioResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Creates the firm and ledger tables; safe to repeat.
    pub fn migrate(&self) -> StudioResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_studio.sql"))?;
        Ok(())
    }

    // ── Firm ───────────────────────────────────────────────────

    pub fn insert_firm(&self, firm_id: &str, name: &str) -> StudioResult<()> {
        self.conn.execute(
            "INSERT INTO firm (firm_id, name, created_at) VALUES (?1, ?2, ?3)",
            params![firm_id, name, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Register a firm under a fresh id.
    pub fn create_firm(&self, name: &str) -> StudioResult<FirmId> {
        let firm_id = Uuid::new_v4().to_string();
        self.insert_firm(&firm_id, name)?;
        log::info!("created firm {firm_id} ({name})");
        Ok(firm_id)
    }

    pub fn firm_name(&self, firm_id: &str) -> StudioResult<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT name FROM firm WHERE firm_id = ?1",
                params![firm_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name)
    }

    /// Like `firm_name`, but a missing firm is an error.
    pub fn require_firm(&self, firm_id: &str) -> StudioResult<String> {
        self.firm_name(firm_id)?
            .ok_or_else(|| StudioError::FirmNotFound {
                firm_id: firm_id.to_string(),
            })
    }

    pub fn list_firms(&self) -> StudioResult<Vec<(FirmId, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT firm_id, name FROM firm ORDER BY name ASC, firm_id ASC")?;
        let firms = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(firms)
    }

    // ── Bulk load ──────────────────────────────────────────────

    /// Write every row of a snapshot in one transaction.
    /// The firm must already exist.
    pub fn insert_snapshot(&mut self, snapshot: &LedgerSnapshot) -> StudioResult<()> {
        let tx = self.conn.transaction()?;
        for event in &snapshot.events {
            ledger::insert_event(&tx, event)?;
        }
        for payment in &snapshot.payments {
            ledger::insert_payment(&tx, payment)?;
        }
        for expense in &snapshot.expenses {
            ledger::insert_expense(&tx, expense)?;
        }
        for row in &snapshot.staff_payments {
            ledger::insert_staff_payment(&tx, row)?;
        }
        for row in &snapshot.freelancer_payments {
            ledger::insert_freelancer_payment(&tx, row)?;
        }
        for entry in &snapshot.accounting_entries {
            ledger::insert_accounting_entry(&tx, entry)?;
        }
        tx.commit()?;
        log::info!(
            "stored {} rows for firm {}",
            snapshot.row_count(),
            snapshot.firm_id
        );
        Ok(())
    }
}
