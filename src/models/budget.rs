use rust_decimal::Decimal;

/// Monthly budget holder: a limit plus a signed running accumulator.
/// Income raises the tracked total and expenses lower it; the alert
/// classifier compares the same total against the limit.
#[derive(Debug, Clone, Default)]
pub(crate) struct Budget {
    pub(crate) monthly_limit: Decimal,
    pub(crate) total_tracked: Decimal,
}

impl Budget {
    pub(crate) fn new(monthly_limit: Decimal) -> Self {
        Self {
            monthly_limit,
            total_tracked: Decimal::ZERO,
        }
    }

    /// Always derived, never stored.
    pub(crate) fn remaining(&self) -> Decimal {
        self.monthly_limit - self.total_tracked
    }

    /// Fold one entry into the accumulator. Applied once, on add;
    /// edits never re-apply.
    pub(crate) fn apply(&mut self, amount: Decimal, is_income: bool) {
        if is_income {
            self.total_tracked += amount;
        } else {
            self.total_tracked -= amount;
        }
    }

    /// Replace the limit and zero the accumulator for the new budget.
    pub(crate) fn reset(&mut self, monthly_limit: Decimal) {
        self.monthly_limit = monthly_limit;
        self.total_tracked = Decimal::ZERO;
    }
}
