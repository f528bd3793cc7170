use super::config::Weights;
use anyhow::Result;

/// Validate configured weights at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &Weights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("weights.reserve", weights.reserve),
        ("weights.savings_rate", weights.savings_rate),
        ("weights.debt_ratio", weights.debt_ratio),
        ("weights.expense_ratio", weights.expense_ratio),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", name));
        } else if value < 0.0 {
            errors.push(format!("{}: must be non-negative", name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
