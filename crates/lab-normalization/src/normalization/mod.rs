//! Normalization functions for lab measurements.
//!
//! - **name**: analyte name keys
//! - **numeric**: numeric value extraction
//! - **reference**: reference range parsing
//! - **units**: unit classification
//! - **convert**: canonical unit conversion

pub mod convert;
pub mod name;
pub mod numeric;
pub mod reference;
pub mod units;

// Re-export commonly used items
pub use convert::{
    CHOLESTEROL_MG_DL_PER_MMOL, CREATININE_UMOL_PER_MG_DL, Conversion,
    TRIGLYCERIDES_MG_DL_PER_MMOL, cholesterol_to_mg_dl, cholesterol_to_mmol_l, convert,
    creatinine_to_mg_dl, platelets_to_10e9_l, triglycerides_to_mg_dl, triglycerides_to_mmol_l,
};
pub use name::{base_analyte, normalize_name};
pub use numeric::{parse_numeric, parse_value};
pub use reference::ReferenceRange;
pub use units::UnitTag;
