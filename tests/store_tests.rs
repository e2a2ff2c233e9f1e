use chrono::{Duration, NaiveDate};
use rexpenses::core::summary::distinct_categories;
use rexpenses::errors::AppError;
use rexpenses::models::Expense;
use rexpenses::store::ExpenseStore;
use rexpenses::utils::date::today;

mod common;
use common::{setup_store, setup_test_db};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_add_then_list_round_trip() {
    let store = setup_store("store_round_trip");

    let pending = Expense::new("Food", "Lunch", 12.50, d(2024, 1, 10));
    let id = store.add(&pending).expect("add");

    // the caller's value is not touched by add()
    assert_eq!(pending.id(), None);

    let all = store.list_all().expect("list");
    assert_eq!(all.len(), 1);

    let e = &all[0];
    assert_eq!(e.id(), Some(id));
    assert!(id > 0);
    assert_eq!(e.category(), "food");
    assert_eq!(e.description(), "Lunch");
    assert_eq!(e.amount(), 12.50);
    assert_eq!(e.date(), d(2024, 1, 10));
}

#[test]
fn test_add_assigns_distinct_ids() {
    let store = setup_store("store_distinct_ids");

    let a = store
        .add(&Expense::new("food", "a", 1.0, d(2024, 1, 1)))
        .unwrap();
    let b = store
        .add(&Expense::new("food", "b", 2.0, d(2024, 1, 2)))
        .unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_store_persists_any_amount() {
    let store = setup_store("store_any_amount");

    store
        .add(&Expense::new("refund", "Returned shoes", -20.0, d(2024, 5, 1)))
        .unwrap();

    let all = store.list_all().unwrap();
    assert_eq!(all[0].amount(), -20.0);
}

#[test]
fn test_update_is_full_replace() {
    let store = setup_store("store_update_full");

    let id = store
        .add(&Expense::new("Food", "Lunch", 12.50, d(2024, 1, 10)))
        .unwrap();

    let updated = Expense::with_id(id, " Travel ", "Bus", 3.20, d(2024, 2, 1));
    assert!(store.update(&updated).unwrap());

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], Expense::with_id(id, "travel", "Bus", 3.20, d(2024, 2, 1)));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let store = setup_store("store_update_unknown");

    let id = store
        .add(&Expense::new("Food", "Lunch", 12.50, d(2024, 1, 10)))
        .unwrap();
    let before = store.list_all().unwrap();

    let ghost = Expense::with_id(id + 100, "travel", "Ghost", 1.0, d(2024, 1, 1));
    assert!(!store.update(&ghost).unwrap());

    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_update_without_id_is_rejected() {
    let store = setup_store("store_update_no_id");

    let pending = Expense::new("food", "Lunch", 1.0, d(2024, 1, 1));
    let err = store.update(&pending).unwrap_err();
    assert!(matches!(err, AppError::MissingId));
}

#[test]
fn test_delete_removes_exactly_one_row() {
    let store = setup_store("store_delete_one");

    let a = store
        .add(&Expense::new("food", "a", 1.0, d(2024, 1, 1)))
        .unwrap();
    let b = store
        .add(&Expense::new("food", "b", 2.0, d(2024, 1, 2)))
        .unwrap();
    let c = store
        .add(&Expense::new("travel", "c", 3.0, d(2024, 1, 3)))
        .unwrap();

    assert!(store.delete(b).unwrap());

    let mut ids: Vec<i64> = store
        .list_all()
        .unwrap()
        .iter()
        .filter_map(Expense::id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let store = setup_store("store_delete_unknown");

    store
        .add(&Expense::new("food", "a", 1.0, d(2024, 1, 1)))
        .unwrap();

    assert!(!store.delete(9999).unwrap());
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_clear_all_empties_table() {
    let store = setup_store("store_clear_all");

    for i in 0..5 {
        store
            .add(&Expense::new("food", format!("item {i}"), 1.0 + i as f64, d(2024, 1, 1)))
            .unwrap();
    }

    assert!(store.clear_all().is_ok());
    assert!(store.list_all().unwrap().is_empty());

    // already empty: still a success
    assert!(store.clear_all().is_ok());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_initialize_is_idempotent() {
    let store = setup_store("store_init_twice");

    store
        .add(&Expense::new("food", "Lunch", 12.0, d(2024, 1, 1)))
        .unwrap();

    store.initialize().expect("second initialize");
    store.initialize().expect("third initialize");

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_same_category_different_case_is_one_category() {
    let store = setup_store("store_distinct_categories");

    store
        .add(&Expense::new("Food", "Lunch", 12.0, d(2024, 1, 1)))
        .unwrap();
    store
        .add(&Expense::new("food", "Dinner", 20.0, d(2024, 1, 2)))
        .unwrap();

    let categories = distinct_categories(&store.list_all().unwrap());
    assert_eq!(categories, vec!["food".to_string()]);
}

#[test]
fn test_seed_sample_data_on_empty_store() {
    let store = setup_store("store_seed");

    store.seed_sample_data().expect("seed");

    let mut all = store.list_all().unwrap();
    all.sort_by_key(|e| e.id());
    assert_eq!(all.len(), 3);

    let got: Vec<(&str, f64)> = all.iter().map(|e| (e.category(), e.amount())).collect();
    assert_eq!(
        got,
        vec![("food", 12.50), ("travel", 25.00), ("entertainment", 15.00)]
    );

    let now = today();
    assert_eq!(all[0].date(), now - Duration::days(1));
    assert_eq!(all[1].date(), now - Duration::days(2));
    assert_eq!(all[2].date(), now - Duration::days(3));
    assert!(all.iter().all(|e| e.id().is_some()));
}

#[test]
fn test_category_is_normalized_in_the_table() {
    let store = setup_store("store_raw_category");

    store
        .add(&Expense::new("  Groceries ", "Weekly shop", 55.0, d(2024, 1, 1)))
        .unwrap();

    let conn = rusqlite::Connection::open(store.db_path()).unwrap();
    let (raw_cat, raw_date): (String, String) = conn
        .query_row("SELECT category, date FROM expenses", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();

    assert_eq!(raw_cat, "groceries");
    assert_eq!(raw_date, "2024-01-01");
}

#[test]
fn test_null_description_reads_as_empty() {
    let store = setup_store("store_null_description");

    let conn = rusqlite::Connection::open(store.db_path()).unwrap();
    conn.execute(
        "INSERT INTO expenses (category, description, amount, date)
         VALUES ('food', NULL, 4.5, '2024-01-01')",
        [],
    )
    .unwrap();
    drop(conn);

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description(), "");
}

#[test]
fn test_unreachable_storage_reports_errors() {
    let mut path = std::env::temp_dir();
    path.push("rexpenses_missing_dir");
    path.push("nested");
    path.push("db.sqlite");
    let store = ExpenseStore::new(path.to_string_lossy().to_string());

    assert!(store.initialize().is_err());
    assert!(store.list_all().is_err());
    assert!(store.clear_all().is_err());
}

#[test]
fn test_list_all_without_table_is_error() {
    let store = ExpenseStore::new(setup_test_db("store_no_table"));
    assert!(store.list_all().is_err());
}

#[test]
fn test_add_and_edit_keep_description_as_typed() {
    use rexpenses::core::add::AddLogic;
    use rexpenses::core::edit::{EditLogic, ExpenseChanges};

    let store = setup_store("store_description_verbatim");

    let added = AddLogic::apply(&store, "Food", "  Lunch at CAFE  ", "12.50", d(2024, 1, 10))
        .expect("add");
    assert_eq!(added.description(), "  Lunch at CAFE  ");
    assert_eq!(store.list_all().unwrap()[0].description(), "  Lunch at CAFE  ");

    let changes = ExpenseChanges {
        description: Some(" Dinner\t".to_string()),
        ..ExpenseChanges::default()
    };
    let id = added.id().unwrap();
    EditLogic::apply(&store, id, &changes).expect("edit");
    assert_eq!(store.list_all().unwrap()[0].description(), " Dinner\t");

    // blank descriptions are still rejected
    let blank = ExpenseChanges {
        description: Some("   ".to_string()),
        ..ExpenseChanges::default()
    };
    assert!(matches!(
        EditLogic::apply(&store, id, &blank),
        Err(AppError::EmptyField("description"))
    ));
}
