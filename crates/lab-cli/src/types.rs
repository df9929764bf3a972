use std::path::PathBuf;

use lab_map::{VariantPreference, WbcVariant};
use lab_model::{CompositeMetric, Demographics, Flag};
use lab_normalization::UnitTag;
use serde::Serialize;

/// Result of `evaluate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub input: PathBuf,
    pub measurement_count: usize,
    pub demographics: Option<Demographics>,
    pub metrics: Vec<CompositeMetric>,
}

/// One measurement as the index sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRow {
    pub position: usize,
    pub name: String,
    pub key: String,
    pub raw_value: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub unit_tag: UnitTag,
    /// Parsed reference range, rendered canonically.
    pub reference: Option<String>,
    pub variant: Option<WbcVariant>,
    pub flag: Flag,
    /// True when the flag was derived from the reference range.
    pub flag_derived: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySuggestionRow {
    pub key: String,
    pub similarity: f64,
}

/// Result of `resolve`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutcome {
    pub aliases: Vec<String>,
    pub preference: VariantPreference,
    pub found: Option<MeasurementRow>,
    pub suggestions: Vec<KeySuggestionRow>,
}

impl ResolveOutcome {
    pub fn is_resolved(&self) -> bool {
        self.found.is_some()
    }
}
