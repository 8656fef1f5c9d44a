#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Entry ─────────────────────────────────────────────────────

fn make_entry(day: u32, amount: Decimal, is_income: bool) -> Entry {
    Entry {
        description: "Test".into(),
        amount,
        category: Category::Other,
        date: NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        is_income,
    }
}

#[test]
fn test_day_key_format() {
    let entry = make_entry(5, dec!(10), false);
    assert_eq!(entry.day_key(), "2024-01-05");
}

#[test]
fn test_day_key_ignores_time_of_day() {
    let mut morning = make_entry(5, dec!(10), false);
    let mut evening = make_entry(5, dec!(20), true);
    morning.date = morning.date.date().and_hms_opt(0, 0, 1).unwrap();
    evening.date = evening.date.date().and_hms_opt(23, 59, 59).unwrap();
    assert_eq!(morning.day_key(), evening.day_key());
}

#[test]
fn test_new_stamps_creation_time() {
    let before = chrono::Local::now().naive_local();
    let entry = Entry::new("Coffee".into(), dec!(4.50), Category::Food, false);
    let after = chrono::Local::now().naive_local();
    assert!(entry.date >= before && entry.date <= after);
    assert_eq!(entry.description, "Coffee");
    assert_eq!(entry.amount, dec!(4.50));
    assert!(!entry.is_income);
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_remaining_is_derived() {
    let mut budget = Budget::new(dec!(500));
    assert_eq!(budget.remaining(), dec!(500));
    budget.total_tracked = dec!(120);
    assert_eq!(budget.remaining(), dec!(380));
    budget.total_tracked = dec!(600);
    assert_eq!(budget.remaining(), dec!(-100));
}

#[test]
fn test_apply_sign_convention() {
    // Income raises the tracked total, expenses lower it.
    let mut budget = Budget::new(dec!(100));
    budget.apply(dec!(50), false);
    assert_eq!(budget.total_tracked, dec!(-50));
    budget.apply(dec!(20), true);
    assert_eq!(budget.total_tracked, dec!(-30));
}

#[test]
fn test_reset_zeroes_accumulator() {
    let mut budget = Budget::new(dec!(100));
    budget.apply(dec!(40), true);
    budget.reset(dec!(250));
    assert_eq!(budget.monthly_limit, dec!(250));
    assert_eq!(budget.total_tracked, Decimal::ZERO);
    assert_eq!(budget.remaining(), dec!(250));
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Category::Food);
    assert_eq!(Category::parse("FOOD"), Category::Food);
    assert_eq!(Category::parse("transportation"), Category::Transport);
    assert_eq!(Category::parse("income"), Category::Salary);
    assert_eq!(Category::parse("unknown"), Category::Other);
    assert_eq!(Category::parse(""), Category::Other);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        assert_eq!(*c, Category::parse(c.as_str()), "roundtrip for {c}");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Food), "Food");
    assert_eq!(format!("{}", Category::Other), "Other");
}
