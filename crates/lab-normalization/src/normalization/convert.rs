//! Canonical unit conversion.
//!
//! Each conversion targets one analyte family. A value whose unit is not the
//! one the conversion expects is returned unchanged: reports that already use
//! the canonical unit usually print it, and anything else is out of scope.

use lab_model::MeasurementValue;

use super::numeric::parse_value;
use super::units::UnitTag;

/// µmol/L per mg/dL of creatinine.
pub const CREATININE_UMOL_PER_MG_DL: f64 = 88.4;
/// mg/dL per mmol/L of cholesterol (total, HDL, LDL).
pub const CHOLESTEROL_MG_DL_PER_MMOL: f64 = 38.67;
/// mg/dL per mmol/L of triglycerides.
pub const TRIGLYCERIDES_MG_DL_PER_MMOL: f64 = 88.57;

/// A conversion into one canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    CreatinineToMgDl,
    CholesterolToMgDl,
    CholesterolToMmolL,
    TriglyceridesToMgDl,
    TriglyceridesToMmolL,
    /// Platelet counts are reported as ×10⁹/L or the numerically equal
    /// ×10³/µL, so the value passes through.
    PlateletsTo10e9L,
}

impl Conversion {
    /// Apply the conversion to an already-parsed value.
    pub fn apply(self, value: f64, unit: UnitTag) -> f64 {
        match (self, unit) {
            (Conversion::CreatinineToMgDl, UnitTag::Micromolar) => {
                value / CREATININE_UMOL_PER_MG_DL
            }
            (Conversion::CholesterolToMgDl, UnitTag::Millimolar) => {
                value * CHOLESTEROL_MG_DL_PER_MMOL
            }
            (Conversion::CholesterolToMmolL, UnitTag::MilligramsPerDeciliter) => {
                value / CHOLESTEROL_MG_DL_PER_MMOL
            }
            (Conversion::TriglyceridesToMgDl, UnitTag::Millimolar) => {
                value * TRIGLYCERIDES_MG_DL_PER_MMOL
            }
            (Conversion::TriglyceridesToMmolL, UnitTag::MilligramsPerDeciliter) => {
                value / TRIGLYCERIDES_MG_DL_PER_MMOL
            }
            _ => value,
        }
    }
}

/// Parse `value` and convert it according to `unit`.
///
/// Returns `None` when the value carries no number or the result is not finite.
pub fn convert(value: &MeasurementValue, unit: Option<&str>, conversion: Conversion) -> Option<f64> {
    let parsed = parse_value(value)?;
    let converted = conversion.apply(parsed, UnitTag::classify(unit));
    converted.is_finite().then_some(converted)
}

pub fn creatinine_to_mg_dl(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::CreatinineToMgDl)
}

pub fn cholesterol_to_mg_dl(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::CholesterolToMgDl)
}

pub fn cholesterol_to_mmol_l(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::CholesterolToMmolL)
}

pub fn triglycerides_to_mg_dl(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::TriglyceridesToMgDl)
}

pub fn triglycerides_to_mmol_l(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::TriglyceridesToMmolL)
}

pub fn platelets_to_10e9_l(value: &MeasurementValue, unit: Option<&str>) -> Option<f64> {
    convert(value, unit, Conversion::PlateletsTo10e9L)
}
