//! Reference range parsing.
//!
//! Reports print ranges as `"40-75"`, `"3,5 – 5,0"`, `"< 5"` or `"≥ 60"`.
//! Only the numeric bounds matter here; units and wording are ignored.

use std::sync::LazyLock;

use lab_model::Flag;
use regex::Regex;

const NUMBER: &str = r"[-+]?[0-9]+(?:\.[0-9]+)?";

static BETWEEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NUMBER})\s*[-–—]\s*({NUMBER})")).expect("Invalid range regex")
});

static AT_MOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:≤|<|⩽|≦)\s*({NUMBER})")).expect("Invalid upper bound regex")
});

static AT_LEAST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:≥|>|⩾|≧)\s*({NUMBER})")).expect("Invalid lower bound regex")
});

/// Numeric bounds parsed from a free-text reference range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceRange {
    /// `low-high`, both inclusive.
    Between { low: f64, high: f64 },
    /// `≤ high` or `< high`.
    AtMost(f64),
    /// `≥ low` or `> low`.
    AtLeast(f64),
}

impl ReferenceRange {
    /// Parse a reference text. A two-sided range takes priority over a
    /// one-sided bound appearing in the same text.
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned = text.trim().replace(',', ".");
        if cleaned.is_empty() {
            return None;
        }
        if let Some(caps) = BETWEEN_REGEX.captures(&cleaned) {
            let low = caps[1].parse::<f64>().ok()?;
            let high = caps[2].parse::<f64>().ok()?;
            return Some(ReferenceRange::Between { low, high });
        }
        if let Some(caps) = AT_MOST_REGEX.captures(&cleaned) {
            return caps[1].parse::<f64>().ok().map(ReferenceRange::AtMost);
        }
        if let Some(caps) = AT_LEAST_REGEX.captures(&cleaned) {
            return caps[1].parse::<f64>().ok().map(ReferenceRange::AtLeast);
        }
        None
    }

    pub fn low(&self) -> Option<f64> {
        match self {
            ReferenceRange::Between { low, .. } | ReferenceRange::AtLeast(low) => Some(*low),
            ReferenceRange::AtMost(_) => None,
        }
    }

    pub fn high(&self) -> Option<f64> {
        match self {
            ReferenceRange::Between { high, .. } | ReferenceRange::AtMost(high) => Some(*high),
            ReferenceRange::AtLeast(_) => None,
        }
    }

    /// True for a two-sided range that fits inside 0..=100, the shape of a
    /// leukocyte differential reported in percent.
    pub fn is_percent_scale(&self) -> bool {
        match self {
            ReferenceRange::Between { low, high } => *low >= 0.0 && *high <= 100.0,
            _ => false,
        }
    }

    /// Flag a value against this range.
    pub fn classify(&self, value: f64) -> Flag {
        if !value.is_finite() {
            return Flag::Unknown;
        }
        if self.low().is_some_and(|low| value < low) {
            return Flag::Low;
        }
        if self.high().is_some_and(|high| value > high) {
            return Flag::High;
        }
        Flag::Normal
    }

    pub fn display(&self) -> String {
        match self {
            ReferenceRange::Between { low, high } => format!("{low} – {high}"),
            ReferenceRange::AtMost(high) => format!("≤ {high}"),
            ReferenceRange::AtLeast(low) => format!("≥ {low}"),
        }
    }
}
