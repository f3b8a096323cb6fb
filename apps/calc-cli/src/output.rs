//! Rendering of calculation results.

use anyhow::{Context, Result};
use calculator::Operation;
use serde::{Serialize, Serializer};

use crate::config::{OutputConfig, OutputFormat};

/// Operation name reported for primality checks.
pub const IS_PRIME: &str = "is_prime";

/// Decimal places kept for percentages when no precision is configured.
pub const PERCENTAGE_DECIMALS: usize = 2;

/// JSON has no literal for non-finite numbers; emit `"inf"`, `"-inf"` or
/// `"NaN"` as strings instead of `null`.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

/// Outcome of a single command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Arithmetic {
        operation: Operation,
        #[serde(serialize_with = "serialize_number")]
        a: f64,
        #[serde(serialize_with = "serialize_number")]
        b: f64,
        #[serde(serialize_with = "serialize_number")]
        result: f64,
    },
    Primality {
        operation: &'static str,
        n: i64,
        result: bool,
    },
}

/// Render a report according to the output configuration.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, cfg: &OutputConfig) -> Result<String> {
    match cfg.format {
        OutputFormat::Json => serde_json::to_string(report).context("failed to serialize result"),
        OutputFormat::Text => Ok(render_text(report, cfg.precision)),
    }
}

fn render_text(report: &Report, precision: Option<usize>) -> String {
    match report {
        Report::Arithmetic {
            operation: Operation::Percentage,
            result,
            ..
        } if precision.is_none() => format_percentage(*result),
        Report::Arithmetic { result, .. } => format_number(*result, precision),
        Report::Primality { n, result: true, .. } => format!("{n} is prime"),
        Report::Primality { n, result: false, .. } => format!("{n} is not prime"),
    }
}

fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{value:.places$}"),
        None => value.to_string(),
    }
}

/// At most [`PERCENTAGE_DECIMALS`] places, trailing zeros dropped: `12.50` -> `12.5`.
fn format_percentage(value: f64) -> String {
    let places = PERCENTAGE_DECIMALS;
    let fixed = format!("{value:.places$}");
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}
