use crate::models::expense::{Expense, normalize_category};
use chrono::NaiveDate;

/// In-memory filter applied to the result of `ExpenseStore::list_all`.
///
/// Both sides of the category comparison are normalized, so `--category FOOD`
/// matches rows stored as "food". Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new(category: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let category = category
            .map(|c| normalize_category(Some(c)))
            .filter(|c| !c.is_empty() && c != "all");

        Self { category, from, to }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(c) = &self.category
            && expense.category() != c
        {
            return false;
        }
        if let Some(from) = self.from
            && expense.date() < from
        {
            return false;
        }
        if let Some(to) = self.to
            && expense.date() > to
        {
            return false;
        }
        true
    }

    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        expenses.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Sort by date, then by id, for stable listings.
pub fn sort_for_display(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.date().cmp(&b.date()).then(a.id().cmp(&b.id())));
}
