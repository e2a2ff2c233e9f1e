use chrono::NaiveDate;
use serde::Serialize;

/// Normalize a category name: trimmed and lower-cased.
///
/// `None` normalizes to the empty string. Every write of a category goes
/// through this function, so "Food", " food " and "FOOD" all compare equal.
pub fn normalize_category<S: AsRef<str>>(category: Option<S>) -> String {
    match category {
        Some(c) => c.as_ref().trim().to_lowercase(),
        None => String::new(),
    }
}

/// A single recorded expense.
///
/// Fields are private so the category invariant cannot be bypassed:
/// the only way in is `new`/`with_id` or `set_category`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    id: Option<i64>,     // ⇔ expenses.id (INTEGER PK AUTOINCREMENT), None until stored
    category: String,    // ⇔ expenses.category (TEXT NOT NULL), normalized
    description: String, // ⇔ expenses.description (TEXT, NULL read as "")
    amount: f64,         // ⇔ expenses.amount (REAL NOT NULL)
    date: NaiveDate,     // ⇔ expenses.date (TEXT "YYYY-MM-DD")
}

impl Expense {
    /// Pending expense, not yet stored (no id).
    pub fn new(
        category: impl AsRef<str>,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            category: normalize_category(Some(category)),
            description: description.into(),
            amount,
            date,
        }
    }

    /// Expense reconstituted from storage with its row id.
    pub fn with_id(
        id: i64,
        category: impl AsRef<str>,
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(category, description, amount, date)
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn set_category(&mut self, category: impl AsRef<str>) {
        self.category = normalize_category(Some(category));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }
}
