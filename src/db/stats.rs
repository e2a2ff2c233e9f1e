use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::format_amount;
use rusqlite::OptionalExtension;
use std::fs;

/// Aggregate figures about the `expenses` table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DbStats {
    pub count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total: f64,
}

pub fn collect(pool: &mut DbPool) -> rusqlite::Result<DbStats> {
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM expenses ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM expenses ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    // SUM over an empty table is NULL
    let total: Option<f64> = pool
        .conn
        .query_row("SELECT SUM(amount) FROM expenses", [], |row| row.get(0))?;

    Ok(DbStats {
        count,
        first_date,
        last_date,
        total: total.unwrap_or(0.0),
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str, currency: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    let stats = collect(pool)?;

    //
    // 2) TOTAL ROWS
    //
    println!(
        "{}• Total expenses:{} {}{}{}",
        CYAN, RESET, GREEN, stats.count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let fmt_first = stats
        .first_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stats
        .last_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AMOUNT TOTAL
    //
    println!(
        "{}• Amount total:{} {}",
        CYAN,
        RESET,
        format_amount(currency, stats.total)
    );

    println!();
    Ok(())
}
