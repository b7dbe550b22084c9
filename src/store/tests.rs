#![allow(clippy::unwrap_used, clippy::panic)]

use rust_decimal_macros::dec;
use std::fs;

use super::*;
use crate::models::Kind;

fn store_in(dir: &tempfile::TempDir) -> CsvFileStore {
    CsvFileStore::new(dir.path().join("transactions.csv"))
}

fn sample() -> Vec<Transaction> {
    vec![
        Transaction::new("Salary".into(), dec!(1000), Kind::Income, "2024-01-01".into()),
        Transaction::new("Food".into(), dec!(200.50), Kind::Expense, "2024-01-02".into()),
    ]
}

// ── Load ──────────────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_existing_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        "Salary,1000.0,Income,2024-01-01\nFood,200.0,Expense,2024-01-02\n",
    )
    .unwrap();

    let txns = store.load().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].category, "Salary");
    assert_eq!(txns[0].amount, dec!(1000));
    assert_eq!(txns[0].kind, Kind::Income);
    assert_eq!(txns[1].date, "2024-01-02");
    assert_eq!(txns[1].kind, Kind::Expense);
}

#[test]
fn test_load_exponent_amount() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "Rent,1.5E3,Expense,2024-02-01\n").unwrap();
    let txns = store.load().unwrap();
    assert_eq!(txns[0].amount, dec!(1500));
}

#[test]
fn test_load_unknown_kind_is_expense() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "Gift,50,income,2024-03-01\n").unwrap();
    let txns = store.load().unwrap();
    assert_eq!(txns[0].kind, Kind::Expense);
}

#[test]
fn test_load_invalid_amount_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        "Salary,1000,Income,2024-01-01\nFood,abc,Expense,2024-01-02\n",
    )
    .unwrap();

    match store.load() {
        Err(StoreError::InvalidAmount { line, value }) => {
            assert_eq!(line, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidAmount, got {other:?}"),
    }
}

#[test]
fn test_load_missing_fields_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "Food,10,Expense\n").unwrap();

    match store.load() {
        Err(StoreError::MissingFields { line, found }) => {
            assert_eq!(line, 1);
            assert_eq!(found, 3);
        }
        other => panic!("expected MissingFields, got {other:?}"),
    }
}

#[test]
fn test_load_embedded_comma_is_not_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "Food, Drinks,10,Expense,2024-01-02\n").unwrap();
    assert!(matches!(
        store.load(),
        Err(StoreError::InvalidAmount { .. })
    ));
}

#[test]
fn test_load_quotes_are_literal() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "\"Food\",10,Expense,2024-01-02\n").unwrap();
    let txns = store.load().unwrap();
    assert_eq!(txns[0].category, "\"Food\"");
}

// ── Save ──────────────────────────────────────────────────────

#[test]
fn test_save_writes_plain_lines() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        content,
        "Salary,1000,Income,2024-01-01\nFood,200.50,Expense,2024-01-02\n"
    );
}

#[test]
fn test_save_then_load_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn test_save_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();
    store.save(&sample()[..1]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_save_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFileStore::new(dir.path().join("nope").join("transactions.csv"));
    assert!(matches!(
        store.save(&sample()),
        Err(StoreError::Write { .. })
    ));
}

// ── Memory store ──────────────────────────────────────────────

#[test]
fn test_memory_store_roundtrip() {
    let store = memory::MemoryStore::default();
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_memory_store_failing_keeps_previous() {
    let store = memory::MemoryStore::failing();
    assert!(store.save(&sample()).is_err());
    assert!(store.saved().is_empty());
    assert_eq!(store.save_count(), 1);
}
