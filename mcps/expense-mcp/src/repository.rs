//! Expense repository backed by SQLite

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row, Transaction};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::schema;
use crate::types::{CategoryTotal, Expense, ExpenseError, ExpenseResult, NewExpense};
use crate::validation::DateRange;

const INSERT_EXPENSE: &str = r#"
    INSERT INTO expenses (amount, category, subcategory, note, date)
    VALUES (?1, ?2, ?3, ?4, ?5)
"#;

const SELECT_IN_RANGE: &str = r#"
    SELECT id, amount, category, subcategory, note, date
    FROM expenses
    WHERE date BETWEEN ?1 AND ?2
    ORDER BY id ASC
"#;

const SUMMARY_ALL_CATEGORIES: &str = r#"
    SELECT category, SUM(amount) AS total_amount
    FROM expenses
    WHERE date BETWEEN ?1 AND ?2
    GROUP BY category
    ORDER BY total_amount DESC, category ASC
"#;

const SUMMARY_ONE_CATEGORY: &str = r#"
    SELECT category, SUM(amount) AS total_amount
    FROM expenses
    WHERE date BETWEEN ?1 AND ?2 AND category = ?3
    GROUP BY category
    ORDER BY total_amount DESC, category ASC
"#;

const DELETE_EXPENSE: &str = "DELETE FROM expenses WHERE id = ?1";

const COUNT_EXPENSES: &str = "SELECT COUNT(*) FROM expenses";

/// Store client injected into every tool handler
///
/// Each call is its own transaction; nothing is held between calls.
pub trait ExpenseStore: Send + Sync {
    /// Insert one row and return the id assigned by the store
    fn insert(&self, expense: &NewExpense) -> ExpenseResult<i64>;

    /// All rows dated within `range`, in ascending id order
    fn list_in_range(&self, range: DateRange) -> ExpenseResult<Vec<Expense>>;

    /// Per-category totals within `range`, largest first
    fn summarize(
        &self,
        range: DateRange,
        category: Option<&str>,
    ) -> ExpenseResult<Vec<CategoryTotal>>;

    /// Delete by id, returning the number of rows removed (0 or 1)
    fn remove(&self, id: i64) -> ExpenseResult<usize>;
}

/// SQLite-backed expense store
#[derive(Clone)]
pub struct ExpenseRepository {
    db: Arc<Mutex<Connection>>,
}

impl ExpenseRepository {
    /// Open (or create) the database and ensure the schema exists
    pub fn open(db_path: &Path, busy_timeout: Duration) -> Result<Self> {
        if db_path != Path::new(":memory:") {
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory {:?}", parent))?;
            }
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database at {:?}", db_path))?;

        conn.busy_timeout(busy_timeout)
            .context("Failed to set database busy timeout")?;

        Self::from_connection(conn)
    }

    /// Private in-memory database, mostly for tests and embedding
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        schema::ensure_tables(&conn).context("Failed to initialize expense schema")?;

        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Number of stored rows
    pub fn count(&self) -> ExpenseResult<i64> {
        self.with_transaction(|tx| tx.query_row(COUNT_EXPENSES, [], |row| row.get(0)))
    }

    /// Run `f` inside a transaction that commits on success and rolls back on error
    fn with_transaction<T, F>(&self, f: F) -> ExpenseResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    {
        let mut conn = self
            .db
            .lock()
            .map_err(|_| ExpenseError::Unavailable("database lock poisoned".to_string()))?;

        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;

        Ok(value)
    }
}

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        subcategory: row.get(3)?,
        note: row.get(4)?,
        date: row.get(5)?,
    })
}

fn total_from_row(row: &Row<'_>) -> rusqlite::Result<CategoryTotal> {
    Ok(CategoryTotal {
        category: row.get(0)?,
        total_amount: row.get(1)?,
    })
}

impl ExpenseStore for ExpenseRepository {
    fn insert(&self, expense: &NewExpense) -> ExpenseResult<i64> {
        self.with_transaction(|tx| {
            tx.execute(
                INSERT_EXPENSE,
                params![
                    expense.amount,
                    &expense.category,
                    &expense.subcategory,
                    &expense.note,
                    expense.date,
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    fn list_in_range(&self, range: DateRange) -> ExpenseResult<Vec<Expense>> {
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(SELECT_IN_RANGE)?;
            let expenses = stmt
                .query_map(params![range.start(), range.end()], expense_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(expenses)
        })
    }

    fn summarize(
        &self,
        range: DateRange,
        category: Option<&str>,
    ) -> ExpenseResult<Vec<CategoryTotal>> {
        self.with_transaction(|tx| {
            let totals = match category {
                Some(category) => {
                    let mut stmt = tx.prepare(SUMMARY_ONE_CATEGORY)?;
                    let rows = stmt
                        .query_map(
                            params![range.start(), range.end(), category],
                            total_from_row,
                        )?
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    rows
                }
                None => {
                    let mut stmt = tx.prepare(SUMMARY_ALL_CATEGORIES)?;
                    let rows = stmt
                        .query_map(params![range.start(), range.end()], total_from_row)?
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    rows
                }
            };
            Ok(totals)
        })
    }

    fn remove(&self, id: i64) -> ExpenseResult<usize> {
        self.with_transaction(|tx| tx.execute(DELETE_EXPENSE, params![id]))
    }
}
