mod common;

use std::fs;

use expense_tracker::{
    core::{Tracker, TrackerError},
    domain::{default_categories, TransactionType},
    storage::{JsonFileStore, RecordStore, CATEGORIES_KEY, TRANSACTIONS_KEY},
};

use common::{draft, file_store, salary_and_food};

#[test]
fn transactions_roundtrip_through_files() {
    let (store, dir) = file_store();
    let txns = salary_and_food();
    store.save_transactions(&txns).expect("save transactions");
    assert_eq!(store.load_transactions(), txns);
    assert!(dir.join(format!("{TRANSACTIONS_KEY}.json")).exists());
}

#[test]
fn first_category_load_seeds_the_defaults_on_disk() {
    let (store, dir) = file_store();
    let path = dir.join(format!("{CATEGORIES_KEY}.json"));
    assert!(!path.exists());

    let categories = store.load_categories().expect("load categories");
    assert_eq!(categories, default_categories());
    let income = categories
        .iter()
        .filter(|c| c.kind == TransactionType::Income)
        .count();
    assert_eq!((income, categories.len() - income), (4, 7));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read categories")).unwrap();
    assert_eq!(on_disk.as_array().map(Vec::len), Some(11));
    assert_eq!(on_disk[0]["type"], "income");
}

#[test]
fn reopening_sees_previous_writes() {
    let (store, dir) = file_store();
    let mut tracker = Tracker::open(store).expect("open tracker");
    let txn = tracker
        .add_transaction(draft(
            TransactionType::Expense,
            18.0,
            "Entertainment",
            "Cinema",
            (2024, 4, 12),
        ))
        .expect("add transaction");

    let reopened = Tracker::open(RecordStore::new(Box::new(
        JsonFileStore::new(dir).expect("reopen store"),
    )))
    .expect("reopen tracker");
    assert_eq!(reopened.transactions(), &[txn]);
    assert_eq!(reopened.categories().len(), 11);
}

#[test]
fn corrupt_transaction_file_reads_as_empty() {
    let (store, dir) = file_store();
    fs::write(dir.join(format!("{TRANSACTIONS_KEY}.json")), "[{\"id\":").unwrap();
    assert!(store.load_transactions().is_empty());
    assert!(matches!(
        store.try_load_transactions(),
        Err(TrackerError::CorruptData(_))
    ));
}

#[test]
fn records_written_by_the_browser_app_are_readable() {
    let (store, dir) = file_store();
    let legacy = r#"[
        {"id":"1705312800000","amount":2500,"type":"income","category":"Salary",
         "description":"January salary","date":"2024-01-15","createdAt":"2024-01-15T10:00:00.000Z"},
        {"id":"1705658400000","amount":64.3,"type":"expense","category":"Food & Dining",
         "description":"Weekly groceries","date":"2024-01-19","createdAt":"2024-01-19T10:00:00.000Z"}
    ]"#;
    fs::write(dir.join(format!("{TRANSACTIONS_KEY}.json")), legacy).unwrap();

    let txns = store.try_load_transactions().expect("legacy records parse");
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].id, "1705312800000");
    assert_eq!(txns[1].amount, 64.3);
}

const SALARY_AND_UNKNOWN: &str = r#"[
    {"id":"1705312800000","amount":2500,"type":"income","category":"Salary",
     "description":"January salary","date":"2024-01-15","createdAt":"2024-01-15T10:00:00.000Z"},
    {"id":"1705399200000","amount":20,"type":"refund","category":"Shopping",
     "description":"Returned shoes","date":"2024-01-16","createdAt":"2024-01-16T10:00:00.000Z"}
]"#;

#[test]
fn unreadable_history_is_never_overwritten() {
    let (store, dir) = file_store();
    let path = dir.join(format!("{TRANSACTIONS_KEY}.json"));
    fs::write(&path, SALARY_AND_UNKNOWN).unwrap();

    assert!(matches!(
        Tracker::open(store),
        Err(TrackerError::CorruptData(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), SALARY_AND_UNKNOWN);

    let reopened = RecordStore::new(Box::new(JsonFileStore::new(dir).expect("reopen store")));
    let mut tracker = Tracker::open_read_only(reopened).expect("read-only open");
    assert_eq!(tracker.transactions().len(), 1);
    assert!(tracker
        .add_transaction(draft(
            TransactionType::Expense,
            9.0,
            "Food & Dining",
            "Coffee",
            (2024, 1, 17),
        ))
        .is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), SALARY_AND_UNKNOWN);
}

#[test]
fn records_with_bad_timestamps_survive_the_next_write() {
    let (store, dir) = file_store();
    let legacy = r#"[
        {"id":"1705312800000","amount":2500,"type":"income","category":"Salary",
         "description":"January salary","date":"2024-01-15","createdAt":"2024-01-15T10:00:00.000Z"},
        {"id":"1705399200000","amount":42,"type":"expense","category":"Food & Dining",
         "description":"Dinner","date":"2024-01-16","createdAt":"yesterday"}
    ]"#;
    fs::write(dir.join(format!("{TRANSACTIONS_KEY}.json")), legacy).unwrap();

    let mut tracker = Tracker::open(store).expect("open tracker");
    assert_eq!(tracker.transactions().len(), 2);
    tracker
        .add_transaction(draft(
            TransactionType::Expense,
            15.0,
            "Transportation",
            "Taxi",
            (2024, 1, 18),
        ))
        .expect("add transaction");

    let reopened = RecordStore::new(Box::new(JsonFileStore::new(dir).expect("reopen store")));
    let txns = reopened.try_load_transactions().expect("history readable");
    let ids: Vec<&str> = txns.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(&ids[1..], ["1705312800000", "1705399200000"]);
    assert_eq!(txns[2].amount, 42.0);
}
