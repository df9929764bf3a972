//! Lab measurement normalization crate.
//!
//! Turns the loosely-typed fields of a [`lab_model::Measurement`] into values
//! the resolver and the metric calculators can rely on.
//!
//! # Overview
//!
//! - **name**: analyte names to matchable keys (accent folding, punctuation collapse)
//! - **numeric**: first signed decimal in a value, comma or dot separated
//! - **reference**: free-text reference ranges and derived flags
//! - **units**: raw unit strings to a closed [`UnitTag`] set
//! - **convert**: per-analyte conversion into canonical units
//!
//! Every function here is pure. Anything that cannot be interpreted becomes
//! `None` rather than an error.

pub mod normalization;

pub use normalization::{
    CHOLESTEROL_MG_DL_PER_MMOL, CREATININE_UMOL_PER_MG_DL, Conversion, ReferenceRange,
    TRIGLYCERIDES_MG_DL_PER_MMOL, UnitTag, base_analyte, cholesterol_to_mg_dl,
    cholesterol_to_mmol_l, convert, creatinine_to_mg_dl, normalize_name, parse_numeric,
    parse_value, platelets_to_10e9_l, triglycerides_to_mg_dl, triglycerides_to_mmol_l,
};
