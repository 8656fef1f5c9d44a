use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use super::Category;

/// One recorded income or expense transaction. Entries are mutable in
/// place and live in insertion order; there is no delete operation.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    pub(crate) date: NaiveDateTime,
    pub(crate) is_income: bool,
}

impl Entry {
    pub(crate) fn new(
        description: String,
        amount: Decimal,
        category: Category,
        is_income: bool,
    ) -> Self {
        Self {
            description,
            amount,
            category,
            date: Local::now().naive_local(),
            is_income,
        }
    }

    /// The chart grouping key. Two entries land in the same group iff
    /// these strings match exactly; the string itself is the key, not
    /// the underlying date.
    pub(crate) fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
