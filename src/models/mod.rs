pub mod expense;

pub use expense::{Expense, normalize_category};
