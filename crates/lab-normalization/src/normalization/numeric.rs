//! Numeric value extraction.
//!
//! Extractors copy values verbatim from reports, so `"5,4"`, `"< 0.5"` and
//! `"12.3 H"` all occur. The first signed decimal in the text is the value.

use std::sync::LazyLock;

use lab_model::MeasurementValue;
use regex::Regex;

static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]+(?:\.[0-9]+)?").expect("Invalid decimal regex"));

/// Parse the first signed decimal number found in `raw`.
///
/// Commas are treated as decimal separators. Returns `None` if no digits are
/// present.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', ".");
    let found = DECIMAL_REGEX.find(&cleaned)?;
    found
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Numeric value of a measurement, if it has one.
pub fn parse_value(value: &MeasurementValue) -> Option<f64> {
    match value {
        MeasurementValue::Number(number) => number.is_finite().then_some(*number),
        MeasurementValue::Text(text) => parse_numeric(text),
        MeasurementValue::Missing => None,
    }
}
