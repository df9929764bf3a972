//! Unit classification.
//!
//! Raw unit strings are free text ("µmol/L", "мкмоль/л", "x10^9/L", "%").
//! They are reduced once to a [`UnitTag`] and every converter dispatches on
//! the tag instead of re-inspecting the text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static ABSOLUTE_COUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(10\^9|10\^3|g/l|/ul|µl|μl|mc?l)").expect("Invalid absolute count regex")
});

const MICROMOLAR_MARKERS: [&str; 4] = ["µmol", "μmol", "мкмоль", "umol"];

const MG_DL_MARKERS: [&str; 2] = ["mg/dl", "mgdl"];

/// Closed set of unit families the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitTag {
    Percent,
    Micromolar,
    Millimolar,
    MilligramsPerDeciliter,
    /// Cell counts and other absolute concentrations (×10⁹/L, /µL, g/L).
    AbsoluteCount,
    Other,
    Missing,
}

impl UnitTag {
    /// Classify a raw unit string. Checks run from most to least specific.
    pub fn classify(unit: Option<&str>) -> Self {
        let Some(raw) = unit.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return UnitTag::Missing;
        };
        let lower = raw.to_lowercase();

        if lower.contains('%') {
            UnitTag::Percent
        } else if MICROMOLAR_MARKERS
            .iter()
            .any(|marker| lower.contains(marker))
        {
            UnitTag::Micromolar
        } else if lower.contains("mmol") {
            UnitTag::Millimolar
        } else if MG_DL_MARKERS.iter().any(|marker| lower.contains(marker)) {
            UnitTag::MilligramsPerDeciliter
        } else if ABSOLUTE_COUNT_REGEX.is_match(&lower) {
            UnitTag::AbsoluteCount
        } else {
            UnitTag::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitTag::Percent => "percent",
            UnitTag::Micromolar => "micromolar",
            UnitTag::Millimolar => "millimolar",
            UnitTag::MilligramsPerDeciliter => "mg_dl",
            UnitTag::AbsoluteCount => "absolute_count",
            UnitTag::Other => "other",
            UnitTag::Missing => "missing",
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
