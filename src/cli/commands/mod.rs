pub mod add;
pub mod categories;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod seed;
pub mod summary;

use crate::cli::parser::FilterArgs;
use crate::core::filter::ExpenseFilter;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

/// Turn the `--category/--from/--to/--period` flags into an [`ExpenseFilter`].
pub(crate) fn resolve_filter(args: &FilterArgs) -> AppResult<ExpenseFilter> {
    let (from, to) = match &args.period {
        Some(p) => {
            let (first, last) = date::period_bounds(p)?;
            (Some(first), Some(last))
        }
        None => (
            date::parse_optional_date(args.from.as_ref())?,
            date::parse_optional_date(args.to.as_ref())?,
        ),
    };

    Ok(ExpenseFilter::new(args.category.as_deref(), from, to))
}

/// Tell the user nothing matched, naming the active category filter if any.
pub(crate) fn report_no_match(filter: &ExpenseFilter) {
    if filter.is_empty() {
        info("No expenses found.");
    } else if let Some(c) = filter.category() {
        info(format!("No expenses found for category '{}'.", c));
    } else {
        info("No expenses found in the selected date range.");
    }
}
