use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, ExpenseChanges};
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::{success, warning};
use crate::utils::{capitalize_first, date, format_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        category,
        description,
        amount,
        date: date_str,
    } = cmd
    {
        let changes = ExpenseChanges {
            category: category.clone(),
            description: description.clone(),
            amount: amount.clone(),
            date: date::parse_optional_date(date_str.as_ref())?,
        };

        if changes.is_empty() {
            warning("Nothing to change: use --category, --desc, --amount or --date.");
            return Ok(());
        }

        let store = ExpenseStore::new(&cfg.database);
        let expense = EditLogic::apply(&store, *id, &changes)?;

        success(format!(
            "Expense #{} updated: {} | {} | {} | {}",
            id,
            capitalize_first(expense.category()),
            expense.description(),
            format_amount(&cfg.currency, expense.amount()),
            expense.date_str()
        ));
    }

    Ok(())
}
