use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Name of the only table owned by the application.
pub const EXPENSES_TABLE: &str = "expenses";

/// Create the `expenses` table if it does not exist yet.
/// Safe to call on every startup.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            category    TEXT NOT NULL,
            description TEXT,
            amount      REAL NOT NULL,
            date        TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `expenses` table exists.
pub fn expenses_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt
        .query_row([EXPENSES_TABLE], |row| row.get(0))
        .optional()?;
    Ok(exists.is_some())
}
