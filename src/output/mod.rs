pub mod formatter;

pub use formatter::{format_json, format_report, format_summary, should_use_colors};
