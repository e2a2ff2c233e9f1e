use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::{confirm, error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let prompt = "Clear ALL expense data? This action cannot be undone.";
        if !*yes && !confirm(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = ExpenseStore::new(&cfg.database);
        if let Err(e) = store.clear_all() {
            error("There was an error clearing the expense data.");
            return Err(e);
        }

        success("All expense data has been cleared.");
    }
    Ok(())
}
