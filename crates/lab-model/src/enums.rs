//! Type-safe enumerations for loosely-typed lab record fields.
//!
//! Upstream extraction emits these as free text. Deserialization is lenient:
//! anything unrecognised collapses to the `Unknown`/`Unspecified` variant so
//! every consumer handles "not known" the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Abnormality flag attached to a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Flag {
    /// Below the reference range.
    Low,
    /// Inside the reference range.
    Normal,
    /// Above the reference range.
    High,
    /// No reference range, no value, or an unrecognised flag.
    #[default]
    Unknown,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Low => "low",
            Flag::Normal => "normal",
            Flag::High => "high",
            Flag::Unknown => "unknown",
        }
    }

    /// Parse a flag as written by extractors.
    ///
    /// Accepts the canonical names plus `below`/`decreased` and
    /// `above`/`increased`. Never fails.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" | "below" | "decreased" => Flag::Low,
            "normal" => Flag::Normal,
            "high" | "above" | "increased" => Flag::High,
            _ => Flag::Unknown,
        }
    }

    pub fn is_abnormal(&self) -> bool {
        matches!(self, Flag::Low | Flag::High)
    }
}

impl From<Option<String>> for Flag {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or(Flag::Unknown, Flag::parse_lenient)
    }
}

impl From<Flag> for &'static str {
    fn from(flag: Flag) -> Self {
        flag.as_str()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Biological sex as used by the CKD-EPI equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Sex::Unknown)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            "U" | "UNKNOWN" | "" => Ok(Sex::Unknown),
            _ => Err(ModelError::UnknownSex(s.to_string())),
        }
    }
}

impl From<Option<String>> for Sex {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl From<Sex> for &'static str {
    fn from(sex: Sex) -> Self {
        sex.as_str()
    }
}

/// Race as collected by the demographics form.
///
/// No formula currently uses it; CKD-EPI 2021 is race-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Race {
    Black,
    NonBlack,
    #[default]
    Unspecified,
}

impl Race {
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Black => "black",
            Race::NonBlack => "nonblack",
            Race::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Race {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        match compact.as_str() {
            "BLACK" => Ok(Race::Black),
            "NONBLACK" | "OTHER" => Ok(Race::NonBlack),
            "" | "UNSPECIFIED" | "UNKNOWN" => Ok(Race::Unspecified),
            _ => Err(ModelError::UnknownRace(s.to_string())),
        }
    }
}

impl From<Option<String>> for Race {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl From<Race> for &'static str {
    fn from(race: Race) -> Self {
        race.as_str()
    }
}

/// Composite metrics the engine can evaluate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// eGFR, CKD-EPI 2021 creatinine equation.
    Egfr,
    /// FIB-4 liver fibrosis index.
    Fib4,
    /// De Ritis ratio (AST/ALT).
    DeRitis,
    /// Atherogenic Index of Plasma.
    Aip,
    /// Triglycerides to HDL ratio.
    TgHdl,
    /// Total cholesterol to HDL ratio.
    TcHdl,
    /// Neutrophil-to-lymphocyte ratio.
    Nlr,
    /// HbA1c with estimated average glucose.
    #[serde(rename = "hba1c")]
    HbA1c,
}

impl MetricKind {
    pub const ALL: [MetricKind; 8] = [
        MetricKind::Egfr,
        MetricKind::Fib4,
        MetricKind::DeRitis,
        MetricKind::Aip,
        MetricKind::TgHdl,
        MetricKind::TcHdl,
        MetricKind::Nlr,
        MetricKind::HbA1c,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Egfr => "egfr",
            MetricKind::Fib4 => "fib4",
            MetricKind::DeRitis => "de_ritis",
            MetricKind::Aip => "aip",
            MetricKind::TgHdl => "tg_hdl",
            MetricKind::TcHdl => "tc_hdl",
            MetricKind::Nlr => "nlr",
            MetricKind::HbA1c => "hba1c",
        }
    }

    pub fn category(&self) -> MetricCategory {
        match self {
            MetricKind::Egfr => MetricCategory::KidneyFunction,
            MetricKind::Fib4 => MetricCategory::LiverFibrosis,
            MetricKind::DeRitis => MetricCategory::LiverFunction,
            MetricKind::Aip => MetricCategory::AtherogenicRisk,
            MetricKind::TgHdl | MetricKind::TcHdl => MetricCategory::LipidRisk,
            MetricKind::Nlr => MetricCategory::Inflammation,
            MetricKind::HbA1c => MetricCategory::GlycemicControl,
        }
    }

    /// Short description of what the metric needs.
    pub fn requirements(&self) -> &'static str {
        match self {
            MetricKind::Egfr => "creatinine, sex, age",
            MetricKind::Fib4 => "age, AST, ALT, platelets",
            MetricKind::DeRitis => "AST, ALT",
            MetricKind::Aip => "triglycerides, HDL",
            MetricKind::TgHdl => "triglycerides, HDL",
            MetricKind::TcHdl => "total cholesterol, HDL",
            MetricKind::Nlr => "neutrophils, lymphocytes (absolute preferred)",
            MetricKind::HbA1c => "HbA1c (%)",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match compact.as_str() {
            "egfr" => Ok(MetricKind::Egfr),
            "fib4" => Ok(MetricKind::Fib4),
            "deritis" => Ok(MetricKind::DeRitis),
            "aip" => Ok(MetricKind::Aip),
            "tghdl" => Ok(MetricKind::TgHdl),
            "tchdl" => Ok(MetricKind::TcHdl),
            "nlr" => Ok(MetricKind::Nlr),
            "hba1c" | "a1c" | "eag" => Ok(MetricKind::HbA1c),
            _ => Err(ModelError::UnknownMetric(s.to_string())),
        }
    }
}

/// Card heading a metric is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum MetricCategory {
    KidneyFunction,
    LiverFibrosis,
    LiverFunction,
    AtherogenicRisk,
    LipidRisk,
    Inflammation,
    GlycemicControl,
}

impl MetricCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::KidneyFunction => "Kidney function",
            MetricCategory::LiverFibrosis => "Liver fibrosis risk",
            MetricCategory::LiverFunction => "Liver function",
            MetricCategory::AtherogenicRisk => "Atherogenic risk",
            MetricCategory::LipidRisk => "Lipid risk",
            MetricCategory::Inflammation => "Inflammation",
            MetricCategory::GlycemicControl => "Glycemic control",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<MetricCategory> for &'static str {
    fn from(category: MetricCategory) -> Self {
        category.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parse_lenient() {
        assert_eq!(Flag::parse_lenient("HIGH"), Flag::High);
        assert_eq!(Flag::parse_lenient(" below "), Flag::Low);
        assert_eq!(Flag::parse_lenient("increased"), Flag::High);
        assert_eq!(Flag::parse_lenient("borderline"), Flag::Unknown);
        assert_eq!(Flag::from(None), Flag::Unknown);
        assert!(Flag::parse_lenient("decreased").is_abnormal());
        assert!(!Flag::Normal.is_abnormal());
        assert!(!Flag::Unknown.is_abnormal());
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert!("robot".parse::<Sex>().is_err());
        assert_eq!(Sex::from(Some("robot".to_string())), Sex::Unknown);
    }

    #[test]
    fn test_race_from_str() {
        assert_eq!("non-black".parse::<Race>().unwrap(), Race::NonBlack);
        assert_eq!("Black".parse::<Race>().unwrap(), Race::Black);
    }

    #[test]
    fn test_metric_kind_round_trips_through_as_str() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
        }
        assert_eq!("FIB-4".parse::<MetricKind>().unwrap(), MetricKind::Fib4);
        assert_eq!("TG/HDL".parse::<MetricKind>().unwrap(), MetricKind::TgHdl);
    }
}
