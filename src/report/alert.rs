use rust_decimal::Decimal;

/// Severity tier derived from the budget numbers. No internal state,
/// no hysteresis: the tier is recomputed on every mutation and may
/// oscillate as entries come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertTier {
    Normal,
    Approaching,
    Exceeded,
}

impl AlertTier {
    /// Banner text for the tier. Normal shows nothing.
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::Exceeded => "Warning: Budget limit exceeded!",
            Self::Approaching => "Caution: Approaching budget limit.",
            Self::Normal => "",
        }
    }
}

/// Classify the tracked total against the monthly limit:
/// Exceeded above the limit, Approaching above 80% of it, Normal
/// otherwise (including zero or negative totals).
pub(crate) fn classify(total: Decimal, limit: Decimal) -> AlertTier {
    if total > limit {
        AlertTier::Exceeded
    } else if total > limit * Decimal::new(8, 1) {
        AlertTier::Approaching
    } else {
        AlertTier::Normal
    }
}

/// Foreground-color rule for a remaining-budget magnitude. Distinct
/// from `classify`: it looks at the remaining amount (not the
/// accumulator) and tips to Approaching below 20% of the reference
/// limit, which defaults to 1 when none is supplied.
pub(crate) fn remaining_tier(remaining: Decimal, reference: Option<Decimal>) -> AlertTier {
    let reference = reference.unwrap_or(Decimal::ONE);
    if remaining < Decimal::ZERO {
        AlertTier::Exceeded
    } else if remaining < Decimal::new(2, 1) * reference {
        AlertTier::Approaching
    } else {
        AlertTier::Normal
    }
}
