#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rexpenses::store::ExpenseStore;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch dir so a real
/// `~/.rexpenses/rexpenses.conf` never leaks into the tests
pub fn rex() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rexpenses_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rexpenses");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rexpenses.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, initialized store on a unique temp file
pub fn setup_store(name: &str) -> ExpenseStore {
    let store = ExpenseStore::new(setup_test_db(name));
    store.initialize().expect("initialize store");
    store
}

/// Initialize DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    rex()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (cat, desc, amount, date) in [
        ("Food", "Lunch", "12.50", "2024-01-10"),
        ("Travel", "Train ticket", "40", "2024-01-15"),
        ("food", "Groceries", "30.25", "2024-02-03"),
    ] {
        rex()
            .args(["--db", db_path, "add", cat, desc, amount, "--date", date])
            .assert()
            .success();
    }
}
