//! Measurement indexing and analyte resolution.
//!
//! Builds a [`MeasurementIndex`] over a raw measurement list and finds
//! analytes in it by alias. Everything here borrows the input; nothing is
//! mutated after the index is built.
//!
//! # Example
//!
//! ```
//! use lab_map::{MeasurementIndex, VariantPreference, resolve};
//! use lab_model::Measurement;
//!
//! let measurements = vec![Measurement::new("Créatinine", "88,4").with_unit("µmol/L")];
//! let index = MeasurementIndex::build(&measurements);
//! let found = resolve(&index, &["creatinine"], VariantPreference::Any).unwrap();
//! assert_eq!(found.value, Some(88.4));
//! ```

pub mod aliases;
pub mod error;
pub mod index;
pub mod resolver;
pub mod variant;

pub use aliases::{AliasTable, Analyte};
pub use error::{AliasError, Result};
pub use index::{IndexedMeasurement, KeySuggestion, MeasurementIndex};
pub use resolver::{VariantPreference, resolve, resolve_analyte};
pub use variant::{WBC_DIFFERENTIALS, WbcVariant, classify_variant, is_wbc_differential};
