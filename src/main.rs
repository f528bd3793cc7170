use clap::Parser;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "finpulse")]
#[command(about = "Financial health scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Monthly income
    #[arg(long, allow_negative_numbers = true)]
    income: f64,

    /// Monthly expenses
    #[arg(long, allow_negative_numbers = true)]
    expenses: f64,

    /// Total outstanding debt balance
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    debt: f64,

    /// Current savings balance
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    savings: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/finpulse/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Load config (weights are the only setting; missing file means defaults)
    let config_path = cli.config.map(PathBuf::from);
    let config = match finpulse::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate configured weights at startup
    let weights = config.weights.unwrap_or_default();
    if let Err(errors) = finpulse::scoring::validate_weights(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Effective weights: reserve={} savings_rate={} debt_ratio={} expense_ratio={}",
            weights.reserve, weights.savings_rate, weights.debt_ratio, weights.expense_ratio
        );
        eprintln!(
            "Inputs: income={} expenses={} debt={} savings={}",
            cli.income, cli.expenses, cli.debt, cli.savings
        );
    }

    let report = finpulse::scoring::compute(cli.income, cli.expenses, cli.debt, cli.savings, &weights);

    if cli.json {
        match finpulse::output::format_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let use_colors = finpulse::output::should_use_colors();
        println!("{}", finpulse::output::format_report(&report, use_colors));
    }

    std::process::exit(EXIT_SUCCESS);
}
