use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::scoring::{HealthReport, Tier};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the one-line summary: "Score: {score} | Classification: {tier}"
pub fn format_summary(report: &HealthReport, use_colors: bool) -> String {
    let score = format!("{:.2}", report.score);
    if use_colors {
        format!(
            "Score: {} | Classification: {}",
            score.bold(),
            colorize_tier(report.classification)
        )
    } else {
        format!(
            "Score: {} | Classification: {}",
            score, report.classification
        )
    }
}

/// Tier labels get a traffic-light treatment when colors are on
fn colorize_tier(tier: Tier) -> String {
    let label = tier.as_str();
    match tier {
        Tier::Healthy => label.green().to_string(),
        Tier::MildAttention | Tier::Attention => label.yellow().to_string(),
        Tier::Critical => label.red().to_string(),
    }
}

/// Format the full report: summary line, components block, and a bulleted
/// tips block when any tips fired.
pub fn format_report(report: &HealthReport, use_colors: bool) -> String {
    let mut lines = vec![format_summary(report, use_colors)];

    lines.push("Components:".to_string());
    let components = [
        ("emergency_reserve", report.components.emergency_reserve),
        ("savings_rate", report.components.savings_rate),
        ("debt_ratio", report.components.debt_ratio),
        ("expense_ratio", report.components.expense_ratio),
    ];
    for (name, value) in components {
        let value_str = format!("{:>6.2}", value);
        if use_colors {
            lines.push(format!("  {:<18}{}", name, value_str.bold()));
        } else {
            lines.push(format!("  {:<18}{}", name, value_str));
        }
    }

    if !report.tips.is_empty() {
        lines.push("Tips:".to_string());
        for tip in &report.tips {
            lines.push(format!("- {}", tip));
        }
    }

    lines.join("\n")
}

/// Render the report as pretty-printed JSON
pub fn format_json(report: &HealthReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
}
