use crate::models::expense::Expense;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One slice of the per-category chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
    /// Fraction of the grand total in `0.0..=1.0` (0 when the total is 0).
    pub share: f64,
}

/// Distinct (already normalized) categories, sorted.
pub fn distinct_categories(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .map(|e| e.category().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::amount).sum()
}

/// Group-by-category sum, sorted by category name.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for e in expenses {
        let entry = groups.entry(e.category()).or_insert((0.0, 0));
        entry.0 += e.amount();
        entry.1 += 1;
    }

    let total = grand_total(expenses);

    groups
        .into_iter()
        .map(|(category, (sum, count))| CategoryTotal {
            category: category.to_string(),
            total: sum,
            count,
            share: if total != 0.0 { sum / total } else { 0.0 },
        })
        .collect()
}
