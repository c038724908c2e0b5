//! Severity classification for the remaining budget
//!
//! The remaining balance is graded against the total budget: below a quarter
//! is Danger, below a half is Warning, anything else is Normal.

use super::Money;

/// How depleted the budget is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Half or more of the budget remains
    #[default]
    Normal,
    /// Less than half remains
    Warning,
    /// Less than a quarter remains
    Danger,
}

impl Severity {
    /// Classify a remaining balance against the total budget
    ///
    /// Thresholds are strict: exactly half remaining is Normal, exactly a
    /// quarter is Warning. Comparisons multiply instead of dividing so cent
    /// amounts never lose precision.
    pub fn classify(remaining: Money, total: Money) -> Self {
        let remaining = remaining.cents();
        let total = total.cents();

        if remaining.saturating_mul(4) < total {
            Self::Danger
        } else if remaining.saturating_mul(2) < total {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "OK",
            Self::Warning => "LOW",
            Self::Danger => "CRITICAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(remaining: i64, total: i64) -> Severity {
        Severity::classify(Money::from_cents(remaining), Money::from_cents(total))
    }

    #[test]
    fn test_classify_bands() {
        // Total $100.00 with various remainders
        assert_eq!(classify(10_000, 10_000), Severity::Normal);
        assert_eq!(classify(8_000, 10_000), Severity::Normal);
        assert_eq!(classify(4_000, 10_000), Severity::Warning);
        assert_eq!(classify(1_000, 10_000), Severity::Danger);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        // Exactly half remains: Normal, not Warning
        assert_eq!(classify(5_000, 10_000), Severity::Normal);
        // Exactly a quarter remains: Warning, not Danger
        assert_eq!(classify(2_500, 10_000), Severity::Warning);
        // One cent below each boundary tips over
        assert_eq!(classify(4_999, 10_000), Severity::Warning);
        assert_eq!(classify(2_499, 10_000), Severity::Danger);
    }

    #[test]
    fn test_classify_odd_totals() {
        // $1.02 total: a quarter is 25.5 cents, so 25 remaining is Danger
        assert_eq!(classify(25, 102), Severity::Danger);
        assert_eq!(classify(26, 102), Severity::Warning);
    }

    #[test]
    fn test_classify_overdrawn() {
        assert_eq!(classify(0, 10_000), Severity::Danger);
        assert_eq!(classify(-500, 10_000), Severity::Danger);
    }
}
