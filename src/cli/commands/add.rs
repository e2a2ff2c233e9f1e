use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::store::ExpenseStore;
use crate::ui::messages::success;
use crate::utils::{capitalize_first, date, format_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        description,
        amount,
        date: date_str,
    } = cmd
    {
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => date::today(),
        };

        let store = ExpenseStore::new(&cfg.database);
        let expense = AddLogic::apply(&store, category, description, amount, d)?;

        success(format!(
            "Expense #{} added: {} | {} | {} | {}",
            expense.id().unwrap_or_default(),
            capitalize_first(expense.category()),
            expense.description(),
            format_amount(&cfg.currency, expense.amount()),
            expense.date_str()
        ));
    }

    Ok(())
}
