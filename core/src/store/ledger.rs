use super::StudioStore;
use crate::{
    error::{StudioError, StudioResult},
    ledger::{
        AccountingEntryRow, EntryType, EventRow, ExpenseRow, FreelancerPaymentRow, Ledger,
        PaymentRow, StaffPaymentRow,
    },
    source::LedgerSource,
    window::DateWindow,
};
use rusqlite::{
    params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    Connection, Row, ToSql,
};

impl ToSql for EntryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

/// Stored types are matched case-insensitively; anything else is a read error.
impl FromSql for EntryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: StudioError| FromSqlError::Other(Box::new(e)))
    }
}

// ── Inserts ────────────────────────────────────────────────────

pub(super) fn insert_event(conn: &Connection, e: &EventRow) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO event
         (id, firm_id, title, event_type, client_name, event_date,
          total_amount, advance_amount, advance_payment_method, closing_adjustment)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10)",
        params![
            e.id,
            e.firm_id,
            e.title,
            e.event_type,
            e.client_name,
            e.event_date,
            e.total_amount,
            e.advance_amount,
            e.advance_payment_method,
            e.closing_adjustment,
        ],
    )?;
    Ok(())
}

/// `event_title` is not stored; reads join it from the event table.
pub(super) fn insert_payment(conn: &Connection, p: &PaymentRow) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO payment (id, firm_id, event_id, amount, payment_date, payment_method)
         VALUES (?1,?2,?3,?4,?5,?6)",
        params![
            p.id,
            p.firm_id,
            p.event_id,
            p.amount,
            p.payment_date,
            p.payment_method,
        ],
    )?;
    Ok(())
}

pub(super) fn insert_expense(conn: &Connection, e: &ExpenseRow) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO expense
         (id, firm_id, category, description, amount, expense_date, payment_method)
         VALUES (?1,?2,?3,?4,?5,?6,?7)",
        params![
            e.id,
            e.firm_id,
            e.category,
            e.description,
            e.amount,
            e.expense_date,
            e.payment_method,
        ],
    )?;
    Ok(())
}

pub(super) fn insert_staff_payment(conn: &Connection, s: &StaffPaymentRow) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO staff_payment
         (id, firm_id, staff_name, amount, payment_date, payment_method, description)
         VALUES (?1,?2,?3,?4,?5,?6,?7)",
        params![
            s.id,
            s.firm_id,
            s.staff_name,
            s.amount,
            s.payment_date,
            s.payment_method,
            s.description,
        ],
    )?;
    Ok(())
}

pub(super) fn insert_freelancer_payment(
    conn: &Connection,
    f: &FreelancerPaymentRow,
) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO freelancer_payment
         (id, firm_id, freelancer_name, amount, payment_date, payment_method, description)
         VALUES (?1,?2,?3,?4,?5,?6,?7)",
        params![
            f.id,
            f.firm_id,
            f.freelancer_name,
            f.amount,
            f.payment_date,
            f.payment_method,
            f.description,
        ],
    )?;
    Ok(())
}

pub(super) fn insert_accounting_entry(
    conn: &Connection,
    a: &AccountingEntryRow,
) -> StudioResult<()> {
    conn.execute(
        "INSERT INTO accounting_entry
         (id, firm_id, title, category, entry_type, amount, entry_date,
          payment_method, reflect_to_company)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
        params![
            a.id,
            a.firm_id,
            a.title,
            a.category,
            a.entry_type,
            a.amount,
            a.entry_date,
            a.payment_method,
            a.reflect_to_company,
        ],
    )?;
    Ok(())
}

/// Single-row writes for callers that append to an existing firm's books.
impl StudioStore {
    pub fn insert_event(&self, row: &EventRow) -> StudioResult<()> {
        insert_event(&self.conn, row)
    }

    pub fn insert_payment(&self, row: &PaymentRow) -> StudioResult<()> {
        insert_payment(&self.conn, row)
    }

    pub fn insert_expense(&self, row: &ExpenseRow) -> StudioResult<()> {
        insert_expense(&self.conn, row)
    }

    pub fn insert_staff_payment(&self, row: &StaffPaymentRow) -> StudioResult<()> {
        insert_staff_payment(&self.conn, row)
    }

    pub fn insert_freelancer_payment(&self, row: &FreelancerPaymentRow) -> StudioResult<()> {
        insert_freelancer_payment(&self.conn, row)
    }

    pub fn insert_accounting_entry(&self, row: &AccountingEntryRow) -> StudioResult<()> {
        insert_accounting_entry(&self.conn, row)
    }
}

// ── Row mappers ────────────────────────────────────────────────

fn map_payment_row(row: &Row) -> rusqlite::Result<PaymentRow> {
    Ok(PaymentRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        event_id: row.get(2)?,
        event_title: row.get(3)?,
        amount: row.get(4)?,
        payment_date: row.get(5)?,
        payment_method: row.get(6)?,
    })
}

fn map_event_row(row: &Row) -> rusqlite::Result<EventRow> {
    Ok(EventRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        title: row.get(2)?,
        event_type: row.get(3)?,
        client_name: row.get(4)?,
        event_date: row.get(5)?,
        total_amount: row.get(6)?,
        advance_amount: row.get(7)?,
        advance_payment_method: row.get(8)?,
        closing_adjustment: row.get(9)?,
    })
}

fn map_expense_row(row: &Row) -> rusqlite::Result<ExpenseRow> {
    Ok(ExpenseRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        amount: row.get(4)?,
        expense_date: row.get(5)?,
        payment_method: row.get(6)?,
    })
}

fn map_staff_payment_row(row: &Row) -> rusqlite::Result<StaffPaymentRow> {
    Ok(StaffPaymentRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        staff_name: row.get(2)?,
        amount: row.get(3)?,
        payment_date: row.get(4)?,
        payment_method: row.get(5)?,
        description: row.get(6)?,
    })
}

fn map_freelancer_payment_row(row: &Row) -> rusqlite::Result<FreelancerPaymentRow> {
    Ok(FreelancerPaymentRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        freelancer_name: row.get(2)?,
        amount: row.get(3)?,
        payment_date: row.get(4)?,
        payment_method: row.get(5)?,
        description: row.get(6)?,
    })
}

fn map_accounting_entry_row(row: &Row) -> rusqlite::Result<AccountingEntryRow> {
    Ok(AccountingEntryRow {
        id: row.get(0)?,
        firm_id: row.get(1)?,
        title: row.get(2)?,
        category: row.get(3)?,
        entry_type: row.get(4)?,
        amount: row.get(5)?,
        entry_date: row.get(6)?,
        payment_method: row.get(7)?,
        reflect_to_company: row.get(8)?,
    })
}

// ── Windowed reads ─────────────────────────────────────────────

impl StudioStore {
    /// Run a firm + window scoped SELECT. `sql` must take the firm as ?1 and
    /// the inclusive window bounds as ?2 / ?3 (NULL = unbounded).
    fn select_windowed<T>(
        &self,
        ledger: Ledger,
        sql: &str,
        firm_id: &str,
        window: &DateWindow,
        map: fn(&Row) -> rusqlite::Result<T>,
    ) -> StudioResult<Vec<T>> {
        let read = || -> rusqlite::Result<Vec<T>> {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt
                .query_map(params![firm_id, window.start, window.end], map)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        };
        let rows = read().map_err(|e| StudioError::LedgerUnavailable {
            ledger: ledger.name(),
            reason: e.to_string(),
        })?;
        log::debug!("{} rows from {} for firm {firm_id}", rows.len(), ledger.name());
        Ok(rows)
    }
}

impl LedgerSource for StudioStore {
    fn payments(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<PaymentRow>> {
        self.select_windowed(
            Ledger::Payments,
            "SELECT p.id, p.firm_id, p.event_id, e.title, p.amount, p.payment_date, p.payment_method
             FROM payment p
             LEFT JOIN event e ON e.id = p.event_id AND e.firm_id = p.firm_id
             WHERE p.firm_id = ?1
               AND (?2 IS NULL OR p.payment_date >= ?2)
               AND (?3 IS NULL OR p.payment_date <= ?3)
             ORDER BY p.payment_date DESC, p.id ASC",
            firm_id,
            window,
            map_payment_row,
        )
    }

    fn events(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<EventRow>> {
        self.select_windowed(
            Ledger::Events,
            "SELECT id, firm_id, title, event_type, client_name, event_date,
                    total_amount, advance_amount, advance_payment_method, closing_adjustment
             FROM event
             WHERE firm_id = ?1
               AND (?2 IS NULL OR event_date >= ?2)
               AND (?3 IS NULL OR event_date <= ?3)
             ORDER BY event_date DESC, id ASC",
            firm_id,
            window,
            map_event_row,
        )
    }

    fn expenses(&self, firm_id: &str, window: &DateWindow) -> StudioResult<Vec<ExpenseRow>> {
        self.select_windowed(
            Ledger::Expenses,
            "SELECT id, firm_id, category, description, amount, expense_date, payment_method
             FROM expense
             WHERE firm_id = ?1
               AND (?2 IS NULL OR expense_date >= ?2)
               AND (?3 IS NULL OR expense_date <= ?3)
             ORDER BY expense_date DESC, id ASC",
            firm_id,
            window,
            map_expense_row,
        )
    }

    fn staff_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<StaffPaymentRow>> {
        self.select_windowed(
            Ledger::StaffPayments,
            "SELECT id, firm_id, staff_name, amount, payment_date, payment_method, description
             FROM staff_payment
             WHERE firm_id = ?1
               AND (?2 IS NULL OR payment_date >= ?2)
               AND (?3 IS NULL OR payment_date <= ?3)
             ORDER BY payment_date DESC, id ASC",
            firm_id,
            window,
            map_staff_payment_row,
        )
    }

    fn freelancer_payments(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<FreelancerPaymentRow>> {
        self.select_windowed(
            Ledger::FreelancerPayments,
            "SELECT id, firm_id, freelancer_name, amount, payment_date, payment_method, description
             FROM freelancer_payment
             WHERE firm_id = ?1
               AND (?2 IS NULL OR payment_date >= ?2)
               AND (?3 IS NULL OR payment_date <= ?3)
             ORDER BY payment_date DESC, id ASC",
            firm_id,
            window,
            map_freelancer_payment_row,
        )
    }

    fn accounting_entries(
        &self,
        firm_id: &str,
        window: &DateWindow,
    ) -> StudioResult<Vec<AccountingEntryRow>> {
        self.select_windowed(
            Ledger::AccountingEntries,
            "SELECT id, firm_id, title, category, entry_type, amount, entry_date,
                    payment_method, reflect_to_company
             FROM accounting_entry
             WHERE firm_id = ?1
               AND (?2 IS NULL OR entry_date >= ?2)
               AND (?3 IS NULL OR entry_date <= ?3)
             ORDER BY entry_date DESC, id ASC",
            firm_id,
            window,
            map_accounting_entry_row,
        )
    }
}
