#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use expense_tracker::{
    domain::{Transaction, TransactionDraft, TransactionType},
    storage::{JsonFileStore, RecordStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A record store backed by JSON files in a fresh directory.
pub fn file_store() -> (RecordStore, PathBuf) {
    let dir = temp_base().join("data");
    let backend = JsonFileStore::new(dir.clone()).expect("create json file store");
    (RecordStore::new(Box::new(backend)), dir)
}

pub fn draft(
    kind: TransactionType,
    amount: f64,
    category: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
) -> TransactionDraft {
    TransactionDraft::new(
        kind,
        amount,
        category,
        description,
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
    )
}

/// The two-record set used by the balance and search scenarios.
pub fn salary_and_food() -> Vec<Transaction> {
    vec![
        Transaction::new(draft(
            TransactionType::Income,
            100.0,
            "Salary",
            "Monthly pay",
            (2024, 1, 15),
        )),
        Transaction::new(draft(
            TransactionType::Expense,
            40.0,
            "Food",
            "Groceries",
            (2024, 1, 20),
        )),
    ]
}
