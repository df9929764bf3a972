//! Alias-based measurement resolution.
//!
//! Resolution runs two passes over a [`MeasurementIndex`]:
//!
//! 1. **Exact**: each alias in order is looked up as a key. The first alias
//!    with a hit wins. Leukocyte differentials are redirected to the
//!    preferred variant slot.
//! 2. **Partial**: only when no alias hit exactly. Keys are scanned in
//!    first-seen order and the first key that contains an alias, or is
//!    contained in one, wins.

use std::fmt;

use lab_normalization::{base_analyte, normalize_name};
use serde::Serialize;
use tracing::{debug, trace};

use crate::aliases::{AliasTable, Analyte};
use crate::index::{IndexedMeasurement, MeasurementIndex};
use crate::variant::{WbcVariant, is_wbc_differential};

/// Which leukocyte variant a caller wants when both are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantPreference {
    Absolute,
    Percentage,
    #[default]
    Any,
}

impl VariantPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantPreference::Absolute => "absolute",
            VariantPreference::Percentage => "percentage",
            VariantPreference::Any => "any",
        }
    }

    /// Slot lookup order for this preference.
    fn order(self) -> [WbcVariant; 2] {
        match self {
            VariantPreference::Percentage => [WbcVariant::Percentage, WbcVariant::Absolute],
            VariantPreference::Absolute | VariantPreference::Any => {
                [WbcVariant::Absolute, WbcVariant::Percentage]
            }
        }
    }
}

impl fmt::Display for VariantPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Find the measurement best matching any of `aliases`.
///
/// Aliases are normalized first; aliases that normalize to nothing are
/// skipped. Returns `None` when neither pass finds a match.
pub fn resolve<'i, 'a, S: AsRef<str>>(
    index: &'i MeasurementIndex<'a>,
    aliases: &[S],
    preference: VariantPreference,
) -> Option<&'i IndexedMeasurement<'a>> {
    let normalized: Vec<String> = aliases
        .iter()
        .map(|alias| normalize_name(alias.as_ref()))
        .filter(|alias| !alias.is_empty())
        .collect();

    if let Some(found) = resolve_exact(index, &normalized, preference) {
        return Some(found);
    }
    resolve_partial(index, &normalized)
}

/// Resolve an [`Analyte`] through its alias list.
pub fn resolve_analyte<'i, 'a>(
    index: &'i MeasurementIndex<'a>,
    table: &AliasTable,
    analyte: Analyte,
    preference: VariantPreference,
) -> Option<&'i IndexedMeasurement<'a>> {
    let found = resolve(index, table.aliases(analyte).as_slice(), preference);
    if found.is_none() {
        debug!(analyte = %analyte, "analyte unresolved");
    }
    found
}

fn resolve_exact<'i, 'a>(
    index: &'i MeasurementIndex<'a>,
    aliases: &[String],
    preference: VariantPreference,
) -> Option<&'i IndexedMeasurement<'a>> {
    for alias in aliases {
        let Some(first) = index.first(alias) else {
            continue;
        };
        let base = base_analyte(alias);
        let chosen = if is_wbc_differential(base) {
            preference
                .order()
                .into_iter()
                .find_map(|variant| index.wbc_variant(base, variant))
                .unwrap_or(first)
        } else {
            first
        };
        trace!(alias = %alias, position = chosen.position, "exact alias hit");
        return Some(chosen);
    }
    None
}

fn resolve_partial<'i, 'a>(
    index: &'i MeasurementIndex<'a>,
    aliases: &[String],
) -> Option<&'i IndexedMeasurement<'a>> {
    let (key, found) = index.first_per_key().find(|(key, _)| {
        !key.is_empty()
            && aliases
                .iter()
                .any(|alias| key.contains(alias.as_str()) || alias.contains(*key))
    })?;
    trace!(key = %key, position = found.position, "partial alias hit");
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_model::Measurement;

    #[test]
    fn test_exact_beats_partial() {
        let measurements = vec![
            Measurement::new("Creatinine clearance", "95"),
            Measurement::new("Creatinine", "80"),
        ];
        let index = MeasurementIndex::build(&measurements);
        let found = resolve(&index, &["creatinine"], VariantPreference::Any).unwrap();
        assert_eq!(found.value, Some(80.0));
    }

    #[test]
    fn test_partial_matches_both_directions() {
        let measurements = vec![Measurement::new("Creatinine (serum)", "80")];
        let index = MeasurementIndex::build(&measurements);
        assert!(resolve(&index, &["creatinine"], VariantPreference::Any).is_some());

        let measurements = vec![Measurement::new("HDL", "1.2")];
        let index = MeasurementIndex::build(&measurements);
        assert!(resolve(&index, &["hdl cholesterol direct"], VariantPreference::Any).is_some());
    }

    #[test]
    fn test_empty_alias_is_ignored() {
        let measurements = vec![Measurement::new("Glucose", "5.1")];
        let index = MeasurementIndex::build(&measurements);
        assert!(resolve(&index, &["", " % "], VariantPreference::Any).is_none());
    }

    #[test]
    fn test_percentage_preference() {
        let measurements = vec![
            Measurement::new("Lymphocytes", "1.9").with_unit("10^9/L"),
            Measurement::new("Lymphocytes", "30").with_unit("%"),
        ];
        let index = MeasurementIndex::build(&measurements);
        let pct = resolve(&index, &["lymphocytes"], VariantPreference::Percentage).unwrap();
        let any = resolve(&index, &["lymphocytes"], VariantPreference::Any).unwrap();
        assert_eq!(pct.value, Some(30.0));
        assert_eq!(any.value, Some(1.9));
    }

    #[test]
    fn test_unclassified_differential_falls_back_to_first_entry() {
        let measurements = vec![Measurement::new("Monocytes", "0.5")];
        let index = MeasurementIndex::build(&measurements);
        let found = resolve(&index, &["monocytes"], VariantPreference::Absolute).unwrap();
        assert_eq!(found.position, 0);
    }
}
