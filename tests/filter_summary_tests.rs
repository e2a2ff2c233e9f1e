use chrono::NaiveDate;
use rexpenses::core::filter::{ExpenseFilter, sort_for_display};
use rexpenses::core::summary::{category_totals, distinct_categories, grand_total};
use rexpenses::models::Expense;
use rexpenses::utils::date::{last_day_of_month, period_bounds};
use rexpenses::utils::formatting::{capitalize_first, format_amount, format_share};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample() -> Vec<Expense> {
    vec![
        Expense::with_id(1, "food", "Lunch", 12.50, d(2024, 1, 10)),
        Expense::with_id(2, "travel", "Train", 40.00, d(2024, 1, 15)),
        Expense::with_id(3, "food", "Groceries", 30.25, d(2024, 2, 3)),
        Expense::with_id(4, "entertainment", "Cinema", 17.25, d(2024, 3, 1)),
    ]
}

fn ids(v: &[Expense]) -> Vec<i64> {
    v.iter().filter_map(Expense::id).collect()
}

#[test]
fn test_filter_category_is_normalized() {
    let f = ExpenseFilter::new(Some("  FOOD "), None, None);
    assert_eq!(f.category(), Some("food"));
    assert_eq!(ids(&f.apply(sample())), vec![1, 3]);
}

#[test]
fn test_filter_all_or_empty_disables_category() {
    for c in ["all", "All", " ALL ", ""] {
        let f = ExpenseFilter::new(Some(c), None, None);
        assert!(f.is_empty(), "{:?}", c);
        assert_eq!(f.apply(sample()).len(), 4);
    }
}

#[test]
fn test_filter_date_bounds_are_inclusive() {
    let f = ExpenseFilter::new(None, Some(d(2024, 1, 15)), Some(d(2024, 2, 3)));
    assert_eq!(ids(&f.apply(sample())), vec![2, 3]);
}

#[test]
fn test_filter_combined() {
    let f = ExpenseFilter::new(Some("food"), Some(d(2024, 2, 1)), None);
    assert_eq!(ids(&f.apply(sample())), vec![3]);

    let none = ExpenseFilter::new(Some("travel"), None, Some(d(2024, 1, 1)));
    assert!(none.apply(sample()).is_empty());
}

#[test]
fn test_sort_for_display_by_date_then_id() {
    let mut v = vec![
        Expense::with_id(9, "food", "b", 1.0, d(2024, 1, 2)),
        Expense::with_id(5, "food", "c", 1.0, d(2024, 1, 2)),
        Expense::with_id(7, "food", "a", 1.0, d(2024, 1, 1)),
    ];
    sort_for_display(&mut v);
    assert_eq!(ids(&v), vec![7, 5, 9]);
}

#[test]
fn test_distinct_categories_sorted_unique() {
    assert_eq!(
        distinct_categories(&sample()),
        vec!["entertainment", "food", "travel"]
    );
    assert!(distinct_categories(&[]).is_empty());
}

#[test]
fn test_category_totals_and_shares() {
    let totals = category_totals(&sample());
    assert_eq!(totals.len(), 3);

    assert_eq!(totals[0].category, "entertainment");
    assert_eq!(totals[0].total, 17.25);
    assert_eq!(totals[1].category, "food");
    assert_eq!(totals[1].total, 42.75);
    assert_eq!(totals[1].count, 2);
    assert_eq!(totals[2].category, "travel");
    assert_eq!(totals[2].total, 40.00);

    let share_sum: f64 = totals.iter().map(|t| t.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-9);
    assert!((totals[2].share - 0.4).abs() < 1e-9);
}

#[test]
fn test_grand_total() {
    assert_eq!(grand_total(&sample()), 100.0);
    assert_eq!(grand_total(&[]), 0.0);
}

#[test]
fn test_zero_total_has_zero_share() {
    let v = vec![Expense::with_id(1, "food", "free", 0.0, d(2024, 1, 1))];
    assert_eq!(category_totals(&v)[0].share, 0.0);
}

#[test]
fn test_capitalize_first_is_display_only() {
    assert_eq!(capitalize_first("food"), "Food");
    assert_eq!(capitalize_first("eating out"), "Eating out");
    assert_eq!(capitalize_first("école"), "École");
    assert_eq!(capitalize_first(""), "");

    // feeding the display form back through the model lower-cases it again
    let e = Expense::new(capitalize_first("food"), "x", 1.0, d(2024, 1, 1));
    assert_eq!(e.category(), "food");
}

#[test]
fn test_format_amount_and_share() {
    assert_eq!(format_amount("$", 12.5), "$12.50");
    assert_eq!(format_amount("€", 1234.0), "€1234.00");
    assert_eq!(format_amount("$", -3.456), "-$3.46");
    assert_eq!(format_share(0.255), "25.5%");
}

#[test]
fn test_period_bounds_forms() {
    assert_eq!(
        period_bounds("2024-01-10").unwrap(),
        (d(2024, 1, 10), d(2024, 1, 10))
    );
    assert_eq!(
        period_bounds("2024-02").unwrap(),
        (d(2024, 2, 1), d(2024, 2, 29))
    );
    assert_eq!(
        period_bounds("2023").unwrap(),
        (d(2023, 1, 1), d(2023, 12, 31))
    );
    assert_eq!(
        period_bounds("2024-01:2024-03").unwrap(),
        (d(2024, 1, 1), d(2024, 3, 31))
    );
    assert_eq!(
        period_bounds("2023:2024-06-15").unwrap(),
        (d(2023, 1, 1), d(2024, 6, 15))
    );
}

#[test]
fn test_period_bounds_rejects_garbage() {
    assert!(period_bounds("yesterday").is_err());
    assert!(period_bounds("2024-13").is_err());
    assert!(period_bounds("2024-03:2024-01").is_err());
}

#[test]
fn test_last_day_of_month() {
    assert_eq!(last_day_of_month(2024, 12), Some(d(2024, 12, 31)));
    assert_eq!(last_day_of_month(2023, 2), Some(d(2023, 2, 28)));
}
