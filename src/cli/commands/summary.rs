use crate::cli::commands::{report_no_match, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{CategoryTotal, category_totals, grand_total};
use crate::errors::AppResult;
use crate::store::ExpenseStore;
use crate::ui::messages::header;
use crate::utils::colors::slice_colour;
use crate::utils::formatting::{bold, format_share, pad_left, pad_right};
use crate::utils::{capitalize_first, format_amount};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let filter = resolve_filter(filter)?;
        let store = ExpenseStore::new(&cfg.database);
        let expenses = filter.apply(store.list_all()?);

        if expenses.is_empty() {
            report_no_match(&filter);
            return Ok(());
        }

        header("Expenses by category");
        for line in render_chart(&category_totals(&expenses), &cfg.currency, cfg.chart_width) {
            println!("{}", line);
        }

        println!(
            "\n{} {}",
            bold("Total Expenses:"),
            format_amount(&cfg.currency, grand_total(&expenses))
        );
    }
    Ok(())
}

/// One line per category: name, proportional bar, amount and share.
pub fn render_chart(totals: &[CategoryTotal], currency: &str, width: usize) -> Vec<String> {
    let labels: Vec<String> = totals.iter().map(|t| capitalize_first(&t.category)).collect();
    let amounts: Vec<String> = totals
        .iter()
        .map(|t| format_amount(currency, t.total))
        .collect();

    let label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let amount_w = amounts.iter().map(|a| a.width()).max().unwrap_or(0);

    totals
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let filled = ((t.share * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                " ".repeat(width.saturating_sub(filled))
            );

            format!(
                "{}  {}  {}  {}",
                pad_right(&labels[i], label_w),
                slice_colour(i).paint(bar),
                pad_left(&amounts[i], amount_w),
                pad_left(&format_share(t.share), 6)
            )
        })
        .collect()
}
