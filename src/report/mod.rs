mod alert;

pub(crate) use alert::{classify, remaining_tier, AlertTier};

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::Entry;

/// Per-calendar-day income and expense sums, used to drive the chart.
/// `day` is the grouping key string, not a parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DailyTotal {
    pub(crate) day: String,
    pub(crate) expenses: Decimal,
    pub(crate) income: Decimal,
}

/// Group entries by their day-key string and sum amounts per flag.
/// Output is ordered by ascending string comparison of the key.
/// Recomputed from scratch on every mutation; an empty input yields an
/// empty output, not an error.
pub(crate) fn aggregate(entries: &[Entry]) -> Vec<DailyTotal> {
    let mut groups: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for entry in entries {
        let (expenses, income) = groups.entry(entry.day_key()).or_default();
        if entry.is_income {
            *income += entry.amount;
        } else {
            *expenses += entry.amount;
        }
    }

    groups
        .into_iter()
        .map(|(day, (expenses, income))| DailyTotal {
            day,
            expenses,
            income,
        })
        .collect()
}
