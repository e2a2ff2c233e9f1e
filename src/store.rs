//! Expense store: the only gateway to persisted expenses.
//!
//! Every operation opens its own connection through [`DbPool`] and releases it
//! when the pool goes out of scope. No connection outlives a single call and no
//! transaction spans two calls.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::expense::Expense;
use crate::utils::date;
use chrono::Duration;

#[derive(Debug, Clone)]
pub struct ExpenseStore {
    db_path: String,
}

impl ExpenseStore {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn open(&self) -> AppResult<DbPool> {
        Ok(DbPool::new(&self.db_path)?)
    }

    /// Ensure the `expenses` table exists. Idempotent.
    pub fn initialize(&self) -> AppResult<()> {
        let pool = self.open()?;
        init_db(&pool.conn)?;
        log::debug!("expenses table ready in {}", self.db_path);
        Ok(())
    }

    /// Every stored expense, in storage order.
    pub fn list_all(&self) -> AppResult<Vec<Expense>> {
        let pool = self.open()?;
        let expenses = queries::load_all_expenses(&pool.conn)?;
        log::debug!("loaded {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Insert `expense` as a new row. The id is assigned by the database and
    /// returned; `expense` itself is left untouched.
    pub fn add(&self, expense: &Expense) -> AppResult<i64> {
        let pool = self.open()?;
        let id = queries::insert_expense(&pool.conn, expense)?;
        log::debug!("inserted expense id={} category={}", id, expense.category());
        Ok(id)
    }

    /// Replace category, description, amount and date of the row with
    /// `expense.id()`. Returns `false` when no row has that id.
    pub fn update(&self, expense: &Expense) -> AppResult<bool> {
        let pool = self.open()?;
        let n = queries::update_expense(&pool.conn, expense)?;
        if n == 0 {
            log::debug!("update: no expense with id {:?}", expense.id());
        }
        Ok(n > 0)
    }

    /// Remove the row with `id`. Returns `false` when no row has that id.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        let pool = self.open()?;
        let n = queries::delete_expense(&pool.conn, id)?;
        if n == 0 {
            log::debug!("delete: no expense with id {}", id);
        }
        Ok(n > 0)
    }

    /// Delete every row.
    pub fn clear_all(&self) -> AppResult<()> {
        let pool = self.open()?;
        let n = queries::delete_all_expenses(&pool.conn)?;
        log::debug!("cleared {} expenses", n);
        Ok(())
    }

    /// Add the fixed demo set, one `add()` per expense.
    pub fn seed_sample_data(&self) -> AppResult<()> {
        for expense in sample_expenses() {
            self.add(&expense)?;
        }
        Ok(())
    }
}

/// Demo expenses dated one, two and three days before today.
pub fn sample_expenses() -> Vec<Expense> {
    let today = date::today();
    vec![
        Expense::new("Food", "Lunch at cafe", 12.50, today - Duration::days(1)),
        Expense::new("Travel", "Taxi ride", 25.00, today - Duration::days(2)),
        Expense::new(
            "Entertainment",
            "Netflix Bill",
            15.00,
            today - Duration::days(3),
        ),
    ]
}
