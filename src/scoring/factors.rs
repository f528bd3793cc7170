use serde::Serialize;
use std::fmt;

/// Debt ratio substituted when income is zero. Large enough that the debt
/// sub-score always clamps to 0: no income with any debt is maximally
/// unhealthy.
pub const NO_INCOME_DEBT_RATIO: f64 = 10.0;

/// Expense ratio substituted when income is zero: with nothing coming in,
/// the full income counts as committed.
pub const NO_INCOME_EXPENSE_RATIO: f64 = 1.0;

/// Pre-clamp ratios derived from the four sanitized inputs.
///
/// Each zero-denominator branch encodes a policy, not an error path:
/// zero expenses means zero reserve months, zero income means worst-case
/// debt and expense commitment. Tips are evaluated against these raw
/// values, never the clamped sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRatios {
    /// Months of expenses the savings balance could cover
    pub reserve_months: f64,
    /// Fraction of monthly income not consumed by expenses (may be negative)
    pub savings_rate: f64,
    /// Total debt balance over monthly income
    pub debt_ratio: f64,
    /// Fraction of monthly income consumed by expenses
    pub expense_ratio: f64,
}

impl RawRatios {
    /// Derive the ratios from already-sanitized (non-negative) inputs.
    pub fn from_inputs(income: f64, expenses: f64, debt: f64, savings: f64) -> Self {
        let reserve_months = if expenses > 0.0 {
            savings / expenses
        } else {
            // Zero expenses forces zero reserve months, even with savings
            // on hand. Kept as-is from the original behavior.
            0.0
        };
        let savings_rate = if income > 0.0 {
            (income - expenses) / income
        } else {
            0.0
        };
        let debt_ratio = if income > 0.0 {
            debt / income
        } else {
            NO_INCOME_DEBT_RATIO
        };
        let expense_ratio = if income > 0.0 {
            expenses / income
        } else {
            NO_INCOME_EXPENSE_RATIO
        };

        Self {
            reserve_months,
            savings_rate,
            debt_ratio,
            expense_ratio,
        }
    }
}

/// Saturate a sub-score or final score into the 0..=100 band.
pub fn clamp_score(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Round to 2 decimal places for display.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Health tier for a final score. Thresholds are evaluated high to low,
/// first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Mild attention")]
    MildAttention,
    #[serde(rename = "Attention")]
    Attention,
    #[serde(rename = "Critical")]
    Critical,
}

impl Tier {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            Tier::Healthy
        } else if score >= 60.0 {
            Tier::MildAttention
        } else if score >= 40.0 {
            Tier::Attention
        } else {
            Tier::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Healthy => "Healthy",
            Tier::MildAttention => "Mild attention",
            Tier::Attention => "Attention",
            Tier::Critical => "Critical",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
