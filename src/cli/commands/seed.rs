use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{ExpenseStore, sample_expenses};
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { yes } = cmd {
        let prompt = "This will add sample expenses to your current data.";
        if !*yes && !confirm(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = ExpenseStore::new(&cfg.database);
        store.seed_sample_data()?;

        success(format!(
            "Sample data has been loaded ({} expenses).",
            sample_expenses().len()
        ));
    }
    Ok(())
}
