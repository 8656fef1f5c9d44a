#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, Entry};

fn sample_entry(description: &str) -> Entry {
    Entry {
        description: description.into(),
        amount: dec!(12.50),
        category: Category::Food,
        date: NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        is_income: false,
    }
}

#[test]
fn test_zero_entries_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let count = write_entries(&path, &[]).unwrap();

    assert_eq!(count, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_field_order_and_no_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut income = sample_entry("Paycheck");
    income.amount = dec!(2000);
    income.category = Category::Salary;
    income.is_income = true;

    write_entries(&path, &[sample_entry("Lunch"), income]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Lunch,Food,12.50,2024-01-05 09:30:00,false");
    assert_eq!(lines[1], "Paycheck,Salary,2000,2024-01-05 09:30:00,true");
}

#[test]
fn test_embedded_commas_are_not_escaped() {
    // Known correctness gap, reproduced on purpose: no quoting ever.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commas.csv");

    write_entries(&path, &[sample_entry("Lunch, drinks, tip")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.lines().next().unwrap(),
        "Lunch, drinks, tip,Food,12.50,2024-01-05 09:30:00,false"
    );
    assert!(!content.contains('"'));
}

#[test]
fn test_export_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_entries(&path, &[sample_entry("First"), sample_entry("Second")]).unwrap();
    write_entries(&path, &[sample_entry("Only")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("Only,"));
}

#[test]
fn test_unwritable_path_is_io_error() {
    let result = write_entries(Path::new("/nonexistent-dir/out.csv"), &[]);
    assert!(matches!(result, Err(StoreError::Io(_))));
}
