//! Database schema initialization for expense-mcp
//!
//! Runs on every startup; all statements are idempotent.

use rusqlite::Connection;

/// Ensure the expenses table exists
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub fn ensure_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount INTEGER NOT NULL,
            category TEXT NOT NULL,
            subcategory TEXT NOT NULL DEFAULT '',
            note TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_date
        ON expenses(date, category);
        "#,
    )
}
