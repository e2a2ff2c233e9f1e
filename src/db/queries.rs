use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

/// Read every row of the `expenses` table. No ordering is applied.
pub fn load_all_expenses(conn: &Connection) -> AppResult<Vec<Expense>> {
    let mut stmt =
        conn.prepare("SELECT id, category, description, amount, date FROM expenses")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Expense> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    // description is nullable in the schema; the model never holds a null
    let description: Option<String> = row.get("description")?;
    let category: String = row.get("category")?;

    Ok(Expense::with_id(
        row.get("id")?,
        category,
        description.unwrap_or_default(),
        row.get("amount")?,
        date,
    ))
}

/// Insert the four data columns and return the id assigned by SQLite.
pub fn insert_expense(conn: &Connection, exp: &Expense) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO expenses (category, description, amount, date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            exp.category(),
            exp.description(),
            exp.amount(),
            exp.date_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full replace of the data columns for `exp.id()`.
/// Returns the number of rows touched (0 when the id is unknown).
pub fn update_expense(conn: &Connection, exp: &Expense) -> AppResult<usize> {
    let id = exp.id().ok_or(AppError::MissingId)?;

    let n = conn.execute(
        "UPDATE expenses
         SET category = ?1, description = ?2, amount = ?3, date = ?4
         WHERE id = ?5",
        params![
            exp.category(),
            exp.description(),
            exp.amount(),
            exp.date_str(),
            id,
        ],
    )?;
    Ok(n)
}

pub fn delete_expense(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
    Ok(n)
}

pub fn delete_all_expenses(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM expenses", [])?;
    Ok(n)
}
