use serde::{Deserialize, Serialize};

/// Component weights for the final score.
///
/// One weight per sub-component, applied as a weighted mean. Weights do not
/// need to sum to 1; the engine normalizes by their sum. Each field is
/// optional in the config file and falls back to its default.
///
/// Example YAML:
/// ```yaml
/// weights:
///   reserve: 0.35
///   savings_rate: 0.25
///   debt_ratio: 0.25
///   expense_ratio: 0.15
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Weights {
    /// Emergency reserve component (default 0.35)
    pub reserve: f64,

    /// Savings rate component (default 0.25)
    pub savings_rate: f64,

    /// Debt-to-income component (default 0.25)
    pub debt_ratio: f64,

    /// Income commitment component (default 0.15)
    pub expense_ratio: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            reserve: 0.35,
            savings_rate: 0.25,
            debt_ratio: 0.25,
            expense_ratio: 0.15,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.reserve + self.savings_rate + self.debt_ratio + self.expense_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = Weights::default();
        assert_eq!(weights.reserve, 0.35);
        assert_eq!(weights.savings_rate, 0.25);
        assert_eq!(weights.debt_ratio, 0.25);
        assert_eq!(weights.expense_ratio, 0.15);
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_serde_roundtrip() {
        let weights = Weights::default();
        let yaml = serde_saphyr::to_string(&weights).unwrap();
        let parsed: Weights = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(weights, parsed);
    }

    #[test]
    fn test_partial_weights_parse() {
        // Absent fields fall back to their defaults
        let yaml = "reserve: 0.5\n";
        let weights: Weights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.reserve, 0.5);
        assert_eq!(weights.savings_rate, 0.25);
        assert_eq!(weights.debt_ratio, 0.25);
        assert_eq!(weights.expense_ratio, 0.15);
    }

    #[test]
    fn test_full_weights_parse() {
        let yaml = r#"
reserve: 0.4
savings_rate: 0.3
debt_ratio: 0.2
expense_ratio: 0.1
"#;
        let weights: Weights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.reserve, 0.4);
        assert_eq!(weights.savings_rate, 0.3);
        assert_eq!(weights.debt_ratio, 0.2);
        assert_eq!(weights.expense_ratio, 0.1);
    }

    #[test]
    fn test_empty_weights_parse() {
        let yaml = "{}";
        let weights: Weights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights, Weights::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "reserve: 0.5\nliquidity: 0.2\n";
        let result: Result<Weights, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
