use crate::core::add::{parse_amount, validate_category, validate_description};
use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use crate::store::ExpenseStore;
use chrono::NaiveDate;

/// Fields supplied on the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct ExpenseChanges {
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Load expense `id`, apply `changes` through the model setters and write
    /// the full record back. Returns the updated expense.
    pub fn apply(store: &ExpenseStore, id: i64, changes: &ExpenseChanges) -> AppResult<Expense> {
        let mut expense = store
            .list_all()?
            .into_iter()
            .find(|e| e.id() == Some(id))
            .ok_or(AppError::ExpenseNotFound(id))?;

        if let Some(c) = &changes.category {
            validate_category(c)?;
            expense.set_category(c);
        }
        if let Some(d) = &changes.description {
            validate_description(d)?;
            expense.set_description(d.as_str());
        }
        if let Some(a) = &changes.amount {
            expense.set_amount(parse_amount(a)?);
        }
        if let Some(d) = changes.date {
            expense.set_date(d);
        }

        // the row may have been removed since list_all()
        if !store.update(&expense)? {
            return Err(AppError::ExpenseNotFound(id));
        }

        Ok(expense)
    }
}
