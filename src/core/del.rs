use crate::errors::{AppError, AppResult};
use crate::store::ExpenseStore;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &ExpenseStore, id: i64) -> AppResult<()> {
        if !store.delete(id)? {
            return Err(AppError::ExpenseNotFound(id));
        }

        Ok(())
    }
}
