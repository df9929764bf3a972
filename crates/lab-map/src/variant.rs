//! Percentage vs absolute leukocyte differentials.
//!
//! A complete blood count usually reports each differential twice, once as a
//! share of total leukocytes and once as an absolute count, often under the
//! same name. Ratios such as NLR need to pick the matching pair.

use std::fmt;

use lab_model::Measurement;
use lab_normalization::{ReferenceRange, UnitTag};
use serde::Serialize;

/// Base analytes that have percentage and absolute variants.
pub const WBC_DIFFERENTIALS: [&str; 5] = [
    "neutrophils",
    "lymphocytes",
    "monocytes",
    "eosinophils",
    "basophils",
];

pub fn is_wbc_differential(base: &str) -> bool {
    WBC_DIFFERENTIALS.contains(&base)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WbcVariant {
    Percentage,
    Absolute,
}

impl WbcVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            WbcVariant::Percentage => "percentage",
            WbcVariant::Absolute => "absolute",
        }
    }
}

impl fmt::Display for WbcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decide which variant a differential measurement is.
///
/// Percentage wins whenever any percent hint holds: a `%` in the name or
/// unit, "segmented" in the name, or a reference range inside 0..=100.
/// Otherwise "absolute" in the name or a count unit means absolute.
pub fn classify_variant(measurement: &Measurement, key: &str, unit: UnitTag) -> Option<WbcVariant> {
    if is_percent_variant(measurement, key, unit) {
        Some(WbcVariant::Percentage)
    } else if key.contains("absolute") || unit == UnitTag::AbsoluteCount {
        Some(WbcVariant::Absolute)
    } else {
        None
    }
}

fn is_percent_variant(measurement: &Measurement, key: &str, unit: UnitTag) -> bool {
    measurement.name.contains('%')
        || unit == UnitTag::Percent
        || key.contains("segmented")
        || measurement
            .reference_text
            .as_deref()
            .and_then(ReferenceRange::parse)
            .is_some_and(|range| range.is_percent_scale())
}
