#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::report::AlertTier;

// ── Add / accumulator ─────────────────────────────────────────

#[test]
fn test_add_entry_records_in_insertion_order() {
    let mut store = Store::new();
    store
        .add_entry("Lunch", "12.50", Category::Food, false)
        .unwrap();
    store
        .add_entry("Bus", "2.75", Category::Transport, false)
        .unwrap();

    let entries = store.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "Lunch");
    assert_eq!(entries[1].description, "Bus");
    assert_eq!(entries[0].amount, dec!(12.50));
}

#[test]
fn test_accumulator_inverted_sign_scenario() {
    // Expense of 50 then income of 20: expenses subtract and income
    // adds, so the tracked total lands at -30.
    let mut store = Store::new();
    store.add_entry("Groceries", "50", Category::Food, false).unwrap();
    store.add_entry("Refund", "20", Category::Other, true).unwrap();

    assert_eq!(store.budget().total_tracked, dec!(-30));
}

#[test]
fn test_add_entry_rejects_non_numeric_amount() {
    let mut store = Store::new();
    let result = store.add_entry("Lunch", "abc", Category::Food, false);

    assert!(matches!(result, Err(StoreError::Parse(_))));
    assert!(store.entries().is_empty());
    assert_eq!(store.budget().total_tracked, Decimal::ZERO);
}

#[test]
fn test_duplicate_entries_permitted() {
    let mut store = Store::new();
    store.add_entry("Coffee", "4.50", Category::Food, false).unwrap();
    store.add_entry("Coffee", "4.50", Category::Food, false).unwrap();
    assert_eq!(store.entries().len(), 2);
}

// ── Save (edit in place) ──────────────────────────────────────

#[test]
fn test_save_entry_mutates_in_place() {
    let mut store = Store::new();
    store.add_entry("Lunhc", "12", Category::Other, false).unwrap();

    let stamped = store.entries()[0].date;
    store
        .save_entry(0, "Lunch", "13.25", Category::Food, false)
        .unwrap();

    let entry = &store.entries()[0];
    assert_eq!(store.entries().len(), 1);
    assert_eq!(entry.description, "Lunch");
    assert_eq!(entry.amount, dec!(13.25));
    assert_eq!(entry.category, Category::Food);
    // Saving re-stamps the entry with the current time.
    assert!(entry.date >= stamped);
}

#[test]
fn test_save_entry_does_not_move_accumulator() {
    let mut store = Store::new();
    store.add_entry("Lunch", "50", Category::Food, false).unwrap();
    let before = store.budget().total_tracked;

    store
        .save_entry(0, "Lunch", "9999", Category::Food, false)
        .unwrap();

    assert_eq!(store.budget().total_tracked, before);
}

#[test]
fn test_save_entry_out_of_range_is_not_found() {
    let mut store = Store::new();
    let result = store.save_entry(0, "Lunch", "12", Category::Food, false);
    assert!(matches!(result, Err(StoreError::NotFound(0))));

    store.add_entry("Lunch", "12", Category::Food, false).unwrap();
    let result = store.save_entry(5, "Lunch", "12", Category::Food, false);
    assert!(matches!(result, Err(StoreError::NotFound(5))));
}

#[test]
fn test_save_entry_rejects_non_numeric_amount() {
    let mut store = Store::new();
    store.add_entry("Lunch", "12", Category::Food, false).unwrap();
    let result = store.save_entry(0, "Lunch", "12.x", Category::Food, false);

    assert!(matches!(result, Err(StoreError::Parse(_))));
    assert_eq!(store.entries()[0].amount, dec!(12));
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_set_budget_resets_accumulator() {
    let mut store = Store::new();
    store.add_entry("Paycheck", "200", Category::Salary, true).unwrap();
    assert_eq!(store.budget().total_tracked, dec!(200));

    store.set_budget("500").unwrap();

    assert_eq!(store.budget().monthly_limit, dec!(500));
    assert_eq!(store.budget().total_tracked, Decimal::ZERO);
    assert_eq!(store.budget().remaining(), dec!(500));
}

#[test]
fn test_set_budget_rejects_non_numeric() {
    let mut store = Store::new();
    let result = store.set_budget("lots");
    assert!(matches!(result, Err(StoreError::Parse(_))));
    assert_eq!(store.budget().monthly_limit, Decimal::ZERO);
}

#[test]
fn test_income_can_exceed_the_limit() {
    // With the inverted sign convention it is income, not spending,
    // that drives the accumulator over the limit.
    let mut store = Store::new();
    store.set_budget("100").unwrap();
    store.add_entry("Paycheck", "101", Category::Salary, true).unwrap();
    assert_eq!(store.snapshot().tier, AlertTier::Exceeded);
}

// ── Snapshot ──────────────────────────────────────────────────

#[test]
fn test_snapshot_series_stay_aligned() {
    let mut store = Store::new();
    store.add_entry("Lunch", "10", Category::Food, false).unwrap();
    store.add_entry("Paycheck", "100", Category::Salary, true).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.labels.len(), snapshot.expense_series.len());
    assert_eq!(snapshot.labels.len(), snapshot.income_series.len());
    // Same day, one group, split by flag.
    assert_eq!(snapshot.labels.len(), 1);
    assert_eq!(snapshot.expense_series[0], dec!(10));
    assert_eq!(snapshot.income_series[0], dec!(100));
}

#[test]
fn test_snapshot_budget_numbers() {
    let mut store = Store::new();
    store.set_budget("100").unwrap();
    store.add_entry("Paycheck", "30", Category::Salary, true).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.monthly_limit, dec!(100));
    assert_eq!(snapshot.total_tracked, dec!(30));
    assert_eq!(snapshot.remaining, dec!(70));
    assert_eq!(snapshot.tier, AlertTier::Normal);
    assert_eq!(snapshot.remaining_tier, AlertTier::Normal);
}

#[test]
fn test_fresh_store_snapshot_is_empty_and_normal() {
    let store = Store::new();
    let snapshot = store.snapshot();
    assert!(snapshot.labels.is_empty());
    assert!(snapshot.expense_series.is_empty());
    assert!(snapshot.income_series.is_empty());
    assert_eq!(snapshot.tier, AlertTier::Normal);
}

// ── Publish / subscribe ───────────────────────────────────────

#[test]
fn test_one_publish_per_successful_mutation() {
    let mut store = Store::new();
    let seen: Rc<RefCell<Vec<AlertTier>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |snapshot| {
        sink.borrow_mut().push(snapshot.tier);
    }));

    store.set_budget("100").unwrap();
    store.add_entry("Paycheck", "85", Category::Salary, true).unwrap();
    store.add_entry("Paycheck", "20", Category::Salary, true).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![AlertTier::Normal, AlertTier::Approaching, AlertTier::Exceeded]
    );
}

#[test]
fn test_failed_mutations_publish_nothing() {
    let mut store = Store::new();
    let count = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&count);
    store.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

    let _ = store.add_entry("Lunch", "nope", Category::Food, false);
    let _ = store.set_budget("nope");
    let _ = store.save_entry(9, "Lunch", "12", Category::Food, false);

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_export_does_not_publish() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::new();
    store.add_entry("Lunch", "12", Category::Food, false).unwrap();

    let count = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&count);
    store.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

    let written = store.export_csv(&dir.path().join("out.csv")).unwrap();
    assert_eq!(written, 1);
    assert_eq!(*count.borrow(), 0);
}
