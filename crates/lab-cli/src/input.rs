//! Input files for the CLI.
//!
//! Two shapes are accepted: a bare array of measurements, or an object with
//! `measurements` and optional `demographics`.

use std::fs;
use std::path::{Path, PathBuf};

use lab_model::{Demographics, Measurement, Race, Sex};
use lab_normalization::parse_value;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse input {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    List(Vec<Measurement>),
    Report {
        measurements: Vec<Measurement>,
        #[serde(default)]
        demographics: Option<Demographics>,
    },
}

/// Measurements plus whatever demographics came with them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabInput {
    pub measurements: Vec<Measurement>,
    pub demographics: Option<Demographics>,
}

impl LabInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawInput = serde_json::from_str(json)?;
        Ok(match raw {
            RawInput::List(measurements) => Self {
                measurements,
                demographics: None,
            },
            RawInput::Report {
                measurements,
                demographics,
            } => Self {
                measurements,
                demographics,
            },
        })
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let json = fs::read_to_string(path).map_err(|source| InputError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of measurements whose value holds no number.
    pub fn non_numeric_count(&self) -> usize {
        self.measurements
            .iter()
            .filter(|measurement| parse_value(&measurement.value).is_none())
            .count()
    }

    /// Apply command-line demographics on top of the file's.
    #[must_use]
    pub fn with_overrides(mut self, sex: Option<Sex>, age: Option<u32>, race: Option<Race>) -> Self {
        if sex.is_none() && age.is_none() && race.is_none() {
            return self;
        }
        let mut demographics = self.demographics.unwrap_or_default();
        if let Some(sex) = sex {
            demographics.sex = sex;
        }
        if let Some(age) = age {
            demographics.age = Some(age);
        }
        if let Some(race) = race {
            demographics.race = race;
        }
        self.demographics = Some(demographics);
        self
    }
}
