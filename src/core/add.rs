use crate::errors::{AppError, AppResult};
use crate::models::expense::{Expense, normalize_category};
use crate::store::ExpenseStore;
use chrono::NaiveDate;

/// Parse a user-entered amount. Must be a finite number greater than 0.
pub fn parse_amount(raw: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))?;
    validate_amount(value)?;
    Ok(value)
}

pub fn validate_amount(value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidAmount(value.to_string()));
    }
    Ok(())
}

pub fn validate_category(raw: &str) -> AppResult<()> {
    if normalize_category(Some(raw)).is_empty() {
        return Err(AppError::EmptyField("category"));
    }
    Ok(())
}

pub fn validate_description(raw: &str) -> AppResult<()> {
    if raw.trim().is_empty() {
        return Err(AppError::EmptyField("description"));
    }
    Ok(())
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the user input, build a pending expense and store it.
    /// Returns the stored expense, carrying the id assigned by the store.
    pub fn apply(
        store: &ExpenseStore,
        category: &str,
        description: &str,
        amount: &str,
        date: NaiveDate,
    ) -> AppResult<Expense> {
        validate_category(category)?;
        validate_description(description)?;
        let amount = parse_amount(amount)?;

        let expense = Expense::new(category, description, amount, date);
        let id = store.add(&expense)?;

        Ok(Expense::with_id(
            id,
            expense.category(),
            expense.description(),
            expense.amount(),
            expense.date(),
        ))
    }
}
