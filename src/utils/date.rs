use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument.
pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Ok(Some(d))
    } else {
        Ok(None)
    }
}

/// Resolve a single period token to its inclusive first/last day.
///
/// Accepted forms: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
fn single_period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Some((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Some((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
        return Some((first, last));
    }

    None
}

/// Resolve a period expression to an inclusive date range.
///
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `A:B` where A and B are any of the above (start of A to end of B)
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start, end)) = p.split_once(':') {
        let (first, _) =
            single_period_bounds(start.trim()).ok_or_else(|| AppError::InvalidPeriod(p.into()))?;
        let (_, last) =
            single_period_bounds(end.trim()).ok_or_else(|| AppError::InvalidPeriod(p.into()))?;

        if first > last {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (start is after end)"
            )));
        }
        return Ok((first, last));
    }

    single_period_bounds(p).ok_or_else(|| AppError::InvalidPeriod(p.into()))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
