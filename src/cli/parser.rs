use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rExpenses
/// CLI application to track personal expenses with SQLite
#[derive(Parser)]
#[command(
    name = "rexpenses",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple expense tracker: record, filter and summarise your spending using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `list` and `summary`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, short, help = "Only show this category (\"all\" for every category)")]
    pub category: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Only show expenses on or after this date")]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Only show expenses on or before this date")]
    pub to: Option<String>,

    #[arg(
        long,
        short,
        conflicts_with_all = ["from", "to"],
        help = "Filter by year/month/day or a custom range (e.g. 2024, 2024-01, 2024-01:2024-03)"
    )]
    pub period: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, info, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record a new expense
    Add {
        /// Category (stored lower-case, e.g. "Food" → "food")
        category: String,

        /// Short description of the expense
        description: String,

        /// Amount spent (greater than 0)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Date of the expense (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Edit an existing expense by ID
    Edit {
        id: i64,

        #[arg(long = "category", help = "New category")]
        category: Option<String>,

        #[arg(long = "desc", help = "New description")]
        description: Option<String>,

        #[arg(long = "amount", allow_hyphen_values = true, help = "New amount")]
        amount: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Delete an expense by ID
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List expenses with the running total
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "json", help = "Print the expenses as JSON")]
        json: bool,
    },

    /// Show totals per category (chart) and the grand total
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the distinct categories in use
    Categories,

    /// Load a small set of sample expenses
    Seed {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete ALL expenses
    Clear {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
}
