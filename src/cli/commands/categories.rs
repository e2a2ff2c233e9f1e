use crate::config::Config;
use crate::core::summary::distinct_categories;
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::info;
use crate::utils::capitalize_first;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = ExpenseStore::new(&cfg.database);
    let categories = distinct_categories(&store.list_all()?);

    if categories.is_empty() {
        info("No categories yet.");
        return Ok(());
    }

    for c in categories {
        println!("- {}", capitalize_first(&c));
    }
    Ok(())
}
