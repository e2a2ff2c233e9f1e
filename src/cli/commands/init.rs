use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::success;
use crate::utils::path::resolve_db_path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database file and the `expenses` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref().map(resolve_db_path), cli.test)?;

    println!("⚙️  Initializing rExpenses…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let store = ExpenseStore::new(&db_path);
    store.initialize()?;

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
