use crate::cli::commands::{report_no_match, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::sort_for_display;
use crate::core::summary::grand_total;
use crate::errors::AppResult;
use crate::models::expense::Expense;
use crate::store::ExpenseStore;
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::{capitalize_first, format_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, json } = cmd {
        let filter = resolve_filter(filter)?;
        let store = ExpenseStore::new(&cfg.database);

        let mut expenses = filter.apply(store.list_all()?);
        sort_for_display(&mut expenses);

        if *json {
            println!("{}", serde_json::to_string_pretty(&expenses)?);
            return Ok(());
        }

        if expenses.is_empty() {
            report_no_match(&filter);
            return Ok(());
        }

        print!("{}", render_table(&expenses, &cfg.currency));

        let total = grand_total(&expenses);
        println!(
            "\n{} {}{}{}",
            bold("Total Expenses:"),
            color_for_amount(total),
            format_amount(&cfg.currency, total),
            RESET
        );
    }
    Ok(())
}

pub fn render_table(expenses: &[Expense], currency: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Category"),
        Column::left("Description"),
        Column::right("Amount"),
    ]);

    for e in expenses {
        table.add_row(vec![
            e.id().map(|id| id.to_string()).unwrap_or_default(),
            e.date_str(),
            capitalize_first(e.category()),
            e.description().to_string(),
            format_amount(currency, e.amount()),
        ]);
    }

    table.render()
}
