mod error;

pub(crate) use error::StoreError;

use std::path::Path;
use std::str::FromStr;

use chrono::Local;
use rust_decimal::Decimal;

use crate::export;
use crate::models::{Budget, Category, Entry};
use crate::report::{self, AlertTier};

/// Derived view of the store after a mutation: the three chart
/// sequences plus the classified budget numbers. `labels`,
/// `expense_series` and `income_series` are positionally aligned and
/// always resized together.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub(crate) labels: Vec<String>,
    pub(crate) expense_series: Vec<Decimal>,
    pub(crate) income_series: Vec<Decimal>,
    pub(crate) tier: AlertTier,
    pub(crate) remaining_tier: AlertTier,
    pub(crate) monthly_limit: Decimal,
    pub(crate) total_tracked: Decimal,
    pub(crate) remaining: Decimal,
}

pub(crate) type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Owned application state: the entry list, the budget holder, and the
/// latest derived snapshot. All mutations go through the operations
/// below; each successful one re-runs the aggregator and classifiers
/// and publishes the fresh snapshot to subscribers. Failed operations
/// publish nothing.
pub(crate) struct Store {
    entries: Vec<Entry>,
    budget: Budget,
    snapshot: Snapshot,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub(crate) fn new() -> Self {
        let mut store = Self {
            entries: Vec::new(),
            budget: Budget::default(),
            snapshot: Snapshot {
                labels: Vec::new(),
                expense_series: Vec::new(),
                income_series: Vec::new(),
                tier: AlertTier::Normal,
                remaining_tier: AlertTier::Normal,
                monthly_limit: Decimal::ZERO,
                total_tracked: Decimal::ZERO,
                remaining: Decimal::ZERO,
            },
            subscribers: Vec::new(),
        };
        store.snapshot = store.compute_snapshot();
        store
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn budget(&self) -> &Budget {
        &self.budget
    }

    pub(crate) fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub(crate) fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Record a new entry stamped with the current time and fold its
    /// amount into the budget accumulator.
    pub(crate) fn add_entry(
        &mut self,
        description: &str,
        amount_text: &str,
        category: Category,
        is_income: bool,
    ) -> Result<(), StoreError> {
        let amount = parse_decimal(amount_text)?;
        self.budget.apply(amount, is_income);
        self.entries.push(Entry::new(
            description.to_string(),
            amount,
            category,
            is_income,
        ));
        self.publish();
        Ok(())
    }

    /// Overwrite the entry at `index` in place and re-stamp its date.
    /// The budget accumulator only moves on add, never on save.
    pub(crate) fn save_entry(
        &mut self,
        index: usize,
        description: &str,
        amount_text: &str,
        category: Category,
        is_income: bool,
    ) -> Result<(), StoreError> {
        if index >= self.entries.len() {
            return Err(StoreError::NotFound(index));
        }
        let amount = parse_decimal(amount_text)?;
        let entry = &mut self.entries[index];
        entry.description = description.to_string();
        entry.amount = amount;
        entry.category = category;
        entry.is_income = is_income;
        entry.date = Local::now().naive_local();
        self.publish();
        Ok(())
    }

    /// Start a fresh budget: new limit, accumulator back to zero.
    pub(crate) fn set_budget(&mut self, limit_text: &str) -> Result<(), StoreError> {
        let limit = parse_decimal(limit_text)?;
        self.budget.reset(limit);
        self.publish();
        Ok(())
    }

    /// One-shot flat-file export. Read-only, so nothing is published.
    pub(crate) fn export_csv(&self, path: &Path) -> Result<usize, StoreError> {
        export::write_entries(path, &self.entries)
    }

    fn publish(&mut self) {
        self.snapshot = self.compute_snapshot();
        for subscriber in &mut self.subscribers {
            subscriber(&self.snapshot);
        }
    }

    fn compute_snapshot(&self) -> Snapshot {
        let daily = report::aggregate(&self.entries);
        let mut labels = Vec::with_capacity(daily.len());
        let mut expense_series = Vec::with_capacity(daily.len());
        let mut income_series = Vec::with_capacity(daily.len());
        for total in daily {
            labels.push(total.day);
            expense_series.push(total.expenses);
            income_series.push(total.income);
        }

        let remaining = self.budget.remaining();
        Snapshot {
            labels,
            expense_series,
            income_series,
            tier: report::classify(self.budget.total_tracked, self.budget.monthly_limit),
            remaining_tier: report::remaining_tier(remaining, Some(self.budget.monthly_limit)),
            monthly_limit: self.budget.monthly_limit,
            total_tracked: self.budget.total_tracked,
            remaining,
        }
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(text.trim()).map_err(|_| StoreError::Parse(text.to_string()))
}

#[cfg(test)]
mod tests;
