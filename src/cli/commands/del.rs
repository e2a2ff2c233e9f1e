use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        let prompt = format!("Delete expense #{}? This action is irreversible.", id);
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let store = ExpenseStore::new(&cfg.database);
        DeleteLogic::apply(&store, *id)?;
        success(format!("Expense #{} has been deleted.", id));
    }

    Ok(())
}
