//! Measurement records as produced by the upstream extractor.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::enums::Flag;

/// Raw measurement value: extractors emit either JSON numbers or text such as
/// `"5,4"` or `"< 0.5"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl MeasurementValue {
    pub fn is_missing(&self) -> bool {
        match self {
            MeasurementValue::Missing => true,
            MeasurementValue::Text(text) => text.trim().is_empty(),
            MeasurementValue::Number(_) => false,
        }
    }
}

impl From<f64> for MeasurementValue {
    fn from(value: f64) -> Self {
        MeasurementValue::Number(value)
    }
}

impl From<&str> for MeasurementValue {
    fn from(value: &str) -> Self {
        MeasurementValue::Text(value.to_string())
    }
}

impl From<String> for MeasurementValue {
    fn from(value: String) -> Self {
        MeasurementValue::Text(value)
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementValue::Number(value) => write!(f, "{value}"),
            MeasurementValue::Text(text) => f.write_str(text),
            MeasurementValue::Missing => f.write_str("-"),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single lab measurement. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Analyte name exactly as printed on the report, any language. A null
    /// or absent name becomes empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub value: MeasurementValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Free-text reference range, e.g. `"40-75"` or `"< 5,0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_text: Option<String>,
    #[serde(default)]
    pub flag: Flag,
    /// Category label such as "Hematology"; absent when the extractor had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: impl Into<MeasurementValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference_text: impl Into<String>) -> Self {
        self.reference_text = Some(reference_text.into());
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flag = flag;
        self
    }

}
