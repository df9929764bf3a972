//! Analyte alias tables.
//!
//! Reports name the same analyte in English, French, Russian and Ukrainian,
//! with and without abbreviations. Each [`Analyte`] carries an ordered list
//! of spellings; earlier entries win during resolution.
//!
//! Extra aliases can be appended from a JSON object keyed by analyte:
//!
//! ```json
//! { "creatinine": ["kreatinin"], "hdl": ["hdl cholesterol direct"] }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AliasError, Result};

/// Analytes the composite metrics read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyte {
    Creatinine,
    Ast,
    Alt,
    Platelets,
    Triglycerides,
    Hdl,
    TotalCholesterol,
    Neutrophils,
    Lymphocytes,
    #[serde(rename = "hba1c")]
    HbA1c,
}

impl Analyte {
    pub const ALL: [Analyte; 10] = [
        Analyte::Creatinine,
        Analyte::Ast,
        Analyte::Alt,
        Analyte::Platelets,
        Analyte::Triglycerides,
        Analyte::Hdl,
        Analyte::TotalCholesterol,
        Analyte::Neutrophils,
        Analyte::Lymphocytes,
        Analyte::HbA1c,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Analyte::Creatinine => "creatinine",
            Analyte::Ast => "ast",
            Analyte::Alt => "alt",
            Analyte::Platelets => "platelets",
            Analyte::Triglycerides => "triglycerides",
            Analyte::Hdl => "hdl",
            Analyte::TotalCholesterol => "total_cholesterol",
            Analyte::Neutrophils => "neutrophils",
            Analyte::Lymphocytes => "lymphocytes",
            Analyte::HbA1c => "hba1c",
        }
    }

    /// Built-in spellings, highest priority first.
    pub fn builtin_aliases(&self) -> &'static [&'static str] {
        match self {
            Analyte::Creatinine => &[
                "creatinine",
                "креатинин",
                "creatinine plasmatique",
                "creatinine serum",
            ],
            Analyte::Ast => &["ast", "асат", "got", "aspartate aminotransferase", "asat"],
            Analyte::Alt => &["alt", "алат", "gpt", "alanine aminotransferase", "alat"],
            Analyte::Platelets => &["platelets", "plt", "тромбоциты", "plaquettes"],
            Analyte::Triglycerides => &["triglycerides", "tg", "триглицериды", "triglycérides"],
            Analyte::Hdl => &["hdl", "hdl cholesterol", "лпвп", "hdl-c"],
            Analyte::TotalCholesterol => &[
                "cholesterol total",
                "total cholesterol",
                "общий холестерин",
                "cholesterol",
            ],
            Analyte::Neutrophils => &["neutrophils", "нейтрофилы", "neutrophiles"],
            Analyte::Lymphocytes => &["lymphocytes", "лимфоциты"],
            Analyte::HbA1c => &[
                "hba1c",
                "hb a1c",
                "hb a1c en unite ifcc",
                "гликированный гемоглобин",
                "глікозильований гемоглобін",
            ],
        }
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Analyte {
    type Err = AliasError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match compact.as_str() {
            "creatinine" => Ok(Analyte::Creatinine),
            "ast" => Ok(Analyte::Ast),
            "alt" => Ok(Analyte::Alt),
            "platelets" | "plt" => Ok(Analyte::Platelets),
            "triglycerides" | "tg" => Ok(Analyte::Triglycerides),
            "hdl" => Ok(Analyte::Hdl),
            "totalcholesterol" | "tc" => Ok(Analyte::TotalCholesterol),
            "neutrophils" => Ok(Analyte::Neutrophils),
            "lymphocytes" => Ok(Analyte::Lymphocytes),
            "hba1c" | "a1c" => Ok(Analyte::HbA1c),
            _ => Err(AliasError::UnknownAnalyte(s.to_string())),
        }
    }
}

/// Alias lists for every [`Analyte`]: built-ins followed by configured extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    extra: BTreeMap<Analyte, Vec<String>>,
}

impl AliasTable {
    /// Table with only the built-in aliases.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Append an alias for `analyte`, after all existing ones.
    #[must_use]
    pub fn with_extra(mut self, analyte: Analyte, alias: impl Into<String>) -> Self {
        self.extra.entry(analyte).or_default().push(alias.into());
        self
    }

    /// Merge overrides from a JSON object of `analyte -> [alias, ...]`.
    pub fn with_json(mut self, json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        for (name, aliases) in raw {
            let analyte: Analyte = name.parse()?;
            self.extra.entry(analyte).or_default().extend(aliases);
        }
        Ok(self)
    }

    /// Built-in table extended with the overrides in `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| AliasError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::builtin().with_json(&json)
    }

    /// Aliases for `analyte` in priority order.
    pub fn aliases(&self, analyte: Analyte) -> Vec<&str> {
        let mut aliases: Vec<&str> = analyte.builtin_aliases().to_vec();
        if let Some(extra) = self.extra.get(&analyte) {
            aliases.extend(extra.iter().map(String::as_str));
        }
        aliases
    }

    /// Number of configured extra aliases across all analytes.
    pub fn extra_count(&self) -> usize {
        self.extra.values().map(Vec::len).sum()
    }
}
