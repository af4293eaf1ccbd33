use std::{fs, sync::Arc};

use chrono::NaiveDate;
use tempfile::tempdir;

use spendquest_core::{store::keys, KeyValueStore, PersistenceGateway};
use spendquest_domain::{CheckIn, CheckInKind, Expense, UserStats};
use spendquest_storage_json::JsonFileStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn missing_documents_read_as_none() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data")).expect("create store");

    assert_eq!(store.get(keys::EXPENSES).expect("get"), None);
}

#[test]
fn set_then_get_round_trips_the_document() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    store.set(keys::USER_STATS, "{\"currentStreak\":2}").expect("set");
    let raw = store.get(keys::USER_STATS).expect("get").expect("present");
    assert_eq!(raw, "{\"currentStreak\":2}");
}

#[test]
fn writes_leave_no_staging_file_behind() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    store.set(keys::EXPENSES, "[]").expect("first write");
    store.set(keys::EXPENSES, "[{}]").expect("overwrite");

    let names: Vec<String> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["expenses.json".to_string()]);
}

#[test]
fn collections_round_trip_through_the_gateway() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    let gateway = PersistenceGateway::new(Arc::new(store));

    let expenses = vec![
        Expense::new(12.0, "Food & Dining", "lunch", date(2024, 3, 4)),
        Expense::new(80.0, "Bills & Utilities", "electricity", date(2024, 3, 4)).recurring(),
    ];
    gateway.save_expenses(&expenses).expect("save expenses");
    assert_eq!(gateway.load_expenses(), expenses);

    let check_ins = vec![CheckIn::new(date(2024, 3, 4), CheckInKind::Evening)];
    gateway.save_check_ins(&check_ins).expect("save check-ins");
    assert_eq!(gateway.load_check_ins(), check_ins);

    let stats = UserStats {
        current_streak: 3,
        longest_streak: 4,
        total_check_ins: 9,
        weekly_goal: 200.0,
        last_check_in_date: Some(date(2024, 3, 4)),
        ..UserStats::default()
    };
    gateway.save_user_stats(&stats).expect("save stats");
    assert_eq!(gateway.load_user_stats(), stats);
}

#[test]
fn corrupt_documents_fall_back_to_the_empty_default() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    fs::write(store.document_path(keys::CHECK_INS), "{oops").expect("seed corrupt file");

    let gateway = PersistenceGateway::new(Arc::new(store));
    assert!(gateway.load_check_ins().is_empty());
    assert_eq!(gateway.load_user_stats(), UserStats::default());
}

#[test]
fn store_creates_its_data_directory() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("a").join("b");
    let store = JsonFileStore::new(nested.clone()).expect("create store");

    assert!(nested.is_dir());
    assert_eq!(store.data_dir(), nested.as_path());
}
