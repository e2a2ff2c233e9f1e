//! rExpenses library root.
//! Exposes the record model, the expense store, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::ExpenseStore;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Categories => cli::commands::categories::handle(cfg),
        Commands::Seed { .. } => cli::commands::seed::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
    }
}

/// Make sure the `expenses` table exists before any data command runs.
///
/// A failure here is reported and swallowed: the command that follows will
/// surface its own storage error.
fn ensure_store(cfg: &Config) {
    let store = ExpenseStore::new(&cfg.database);
    if let Err(e) = store.initialize() {
        log::warn!("initialize failed for {}: {}", cfg.database, e);
        warning(format!("Unable to prepare database {}: {}", cfg.database, e));
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db on the command line wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db);
    }

    if !matches!(cli.command, Commands::Init | Commands::Config { .. }) {
        ensure_store(&cfg);
    }

    dispatch(&cli, &cfg)
}
