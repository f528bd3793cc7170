use serde::Serialize;

use super::config::Weights;
use super::factors::{clamp_score, round2, RawRatios, Tier};

/// 6 months of expenses in savings is the fully-healthy reserve target;
/// the reserve score interpolates linearly below it and caps above.
const RESERVE_TARGET_MONTHS: f64 = 6.0;
const TARGET_SAVINGS_RATE: f64 = 0.20;
const MAX_DEBT_RATIO: f64 = 0.30;
const MAX_EXPENSE_RATIO: f64 = 0.70;

/// Guard against a zero denominator when every weight is 0.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Individual sub-scores, each in [0,100] and rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub emergency_reserve: f64,
    pub savings_rate: f64,
    pub debt_ratio: f64,
    pub expense_ratio: f64,
}

/// Full scoring result for one call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    /// Weighted score in [0,100], rounded to 2 decimals
    pub score: f64,
    pub classification: Tier,
    pub components: ComponentScores,
    /// 0 to 4 advice strings, fixed order: reserve, savings rate,
    /// debt ratio, expense ratio
    pub tips: Vec<String>,
}

/// Compute the financial health score for one set of inputs.
///
/// `income` and `expenses` are monthly flows, `debt` and `savings` current
/// balances, all in the same currency unit. Negative inputs are treated as
/// zero. Total over that domain: never panics, always returns a fully
/// populated report.
pub fn compute(
    income: f64,
    expenses: f64,
    debt: f64,
    savings: f64,
    weights: &Weights,
) -> HealthReport {
    // Sanitization policy, not an error: negatives are silently zeroed
    let income = income.max(0.0);
    let expenses = expenses.max(0.0);
    let debt = debt.max(0.0);
    let savings = savings.max(0.0);

    let ratios = RawRatios::from_inputs(income, expenses, debt, savings);

    let reserve_score = clamp_score(ratios.reserve_months / RESERVE_TARGET_MONTHS * 100.0);
    let savings_rate_score = clamp_score(ratios.savings_rate * 100.0);
    let debt_score = clamp_score((1.0 - ratios.debt_ratio) * 100.0);
    let expense_score = clamp_score((1.0 - ratios.expense_ratio) * 100.0);

    // Weighted mean over the unrounded sub-scores; components are rounded
    // independently for display
    let weight_sum = weights.sum().max(WEIGHT_SUM_EPSILON);
    let weighted = weights.reserve * reserve_score
        + weights.savings_rate * savings_rate_score
        + weights.debt_ratio * debt_score
        + weights.expense_ratio * expense_score;
    let score = round2(clamp_score(weighted / weight_sum));

    HealthReport {
        score,
        classification: Tier::classify(score),
        components: ComponentScores {
            emergency_reserve: round2(reserve_score),
            savings_rate: round2(savings_rate_score),
            debt_ratio: round2(debt_score),
            expense_ratio: round2(expense_score),
        },
        tips: build_tips(&ratios),
    }
}

/// Tips fire independently against the raw pre-clamp ratios, in fixed order.
fn build_tips(ratios: &RawRatios) -> Vec<String> {
    let mut tips = Vec::new();

    if ratios.reserve_months < RESERVE_TARGET_MONTHS {
        let shortfall = (RESERVE_TARGET_MONTHS - ratios.reserve_months).max(0.0);
        tips.push(format!(
            "Build up your emergency reserve (+{:.1} months of expenses needed).",
            shortfall
        ));
    }
    if ratios.savings_rate < TARGET_SAVINGS_RATE {
        tips.push("Try to save at least 20% of monthly income, or reduce expenses.".to_string());
    }
    if ratios.debt_ratio > MAX_DEBT_RATIO {
        tips.push("Reduce your debt-to-income ratio to below 30%.".to_string());
    }
    if ratios.expense_ratio > MAX_EXPENSE_RATIO {
        tips.push("Income commitment is high; review fixed and variable costs.".to_string());
    }

    tips
}
