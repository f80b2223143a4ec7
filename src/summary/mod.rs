//! Single-dataset summaries of count matrices.

pub mod descriptive;
mod record;
mod statistic;
mod summarize;

pub use record::StatRecord;
pub use statistic::Statistic;
pub use summarize::summarize;

/// Render a value for human-readable output.
///
/// Whole numbers print without decimals, everything else with two.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
