//! Per-call index over a measurement list.
//!
//! The index is built once per evaluation and never mutated afterwards. Keys
//! keep first-seen order, and each key keeps every measurement that produced
//! it in input order.

use std::collections::BTreeMap;

use lab_model::Measurement;
use lab_normalization::{UnitTag, base_analyte, normalize_name, parse_value};
use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

use crate::variant::{WbcVariant, classify_variant, is_wbc_differential};

/// A measurement with the derived fields resolution needs.
#[derive(Debug, Clone)]
pub struct IndexedMeasurement<'a> {
    pub measurement: &'a Measurement,
    /// Position in the input list.
    pub position: usize,
    pub key: String,
    pub value: Option<f64>,
    pub unit: UnitTag,
    /// Set only for leukocyte differentials.
    pub variant: Option<WbcVariant>,
}

impl IndexedMeasurement<'_> {
    pub fn name(&self) -> &str {
        &self.measurement.name
    }

    pub fn unit_text(&self) -> Option<&str> {
        self.measurement.unit.as_deref()
    }

    pub fn base_analyte(&self) -> &str {
        base_analyte(&self.key)
    }
}

#[derive(Debug, Clone)]
struct KeyBucket {
    key: String,
    entries: Vec<usize>,
}

/// A key ranked by similarity to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySuggestion<'i> {
    pub key: &'i str,
    pub similarity: f64,
}

/// Measurements grouped by normalized name, plus leukocyte variant slots.
#[derive(Debug, Clone, Default)]
pub struct MeasurementIndex<'a> {
    entries: Vec<IndexedMeasurement<'a>>,
    buckets: Vec<KeyBucket>,
    by_key: BTreeMap<String, usize>,
    wbc_percent: BTreeMap<String, usize>,
    wbc_absolute: BTreeMap<String, usize>,
}

impl<'a> MeasurementIndex<'a> {
    /// Index `measurements`. Variant slots are last-write-wins.
    pub fn build(measurements: &'a [Measurement]) -> Self {
        let mut index = Self::default();

        for (position, measurement) in measurements.iter().enumerate() {
            let key = normalize_name(&measurement.name);
            let unit = UnitTag::classify(measurement.unit.as_deref());
            let base = base_analyte(&key);
            let variant = if is_wbc_differential(base) {
                classify_variant(measurement, &key, unit)
            } else {
                None
            };

            let entry_id = index.entries.len();
            match variant {
                Some(WbcVariant::Percentage) => {
                    index.wbc_percent.insert(base.to_string(), entry_id);
                }
                Some(WbcVariant::Absolute) => {
                    index.wbc_absolute.insert(base.to_string(), entry_id);
                }
                None => {}
            }

            let existing = index.by_key.get(&key).copied();
            match existing {
                Some(bucket) => index.buckets[bucket].entries.push(entry_id),
                None => {
                    index.by_key.insert(key.clone(), index.buckets.len());
                    index.buckets.push(KeyBucket {
                        key: key.clone(),
                        entries: vec![entry_id],
                    });
                }
            }

            index.entries.push(IndexedMeasurement {
                measurement,
                position,
                key,
                value: parse_value(&measurement.value),
                unit,
                variant,
            });
        }

        debug!(
            measurements = index.entries.len(),
            keys = index.buckets.len(),
            wbc_percent = index.wbc_percent.len(),
            wbc_absolute = index.wbc_absolute.len(),
            "measurement index built"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All indexed measurements in input order.
    pub fn entries(&self) -> &[IndexedMeasurement<'a>] {
        &self.entries
    }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.key.as_str())
    }

    /// Every measurement whose key equals `key`, in input order.
    pub fn get(&self, key: &str) -> impl Iterator<Item = &IndexedMeasurement<'a>> {
        self.by_key
            .get(key)
            .map(|&bucket| self.buckets[bucket].entries.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&id| &self.entries[id])
    }

    /// First measurement recorded under `key`.
    pub fn first(&self, key: &str) -> Option<&IndexedMeasurement<'a>> {
        self.get(key).next()
    }

    /// Keys in first-seen order, each with its first measurement.
    pub(crate) fn first_per_key(&self) -> impl Iterator<Item = (&str, &IndexedMeasurement<'a>)> {
        self.buckets.iter().filter_map(|bucket| {
            bucket
                .entries
                .first()
                .map(|&id| (bucket.key.as_str(), &self.entries[id]))
        })
    }

    /// The measurement filling a leukocyte variant slot.
    pub fn wbc_variant(&self, base: &str, variant: WbcVariant) -> Option<&IndexedMeasurement<'a>> {
        let slots = match variant {
            WbcVariant::Percentage => &self.wbc_percent,
            WbcVariant::Absolute => &self.wbc_absolute,
        };
        slots.get(base).map(|&id| &self.entries[id])
    }

    /// Rank keys by Jaro-Winkler similarity to `alias`.
    ///
    /// Diagnostics only; resolution never uses this.
    pub fn nearest_keys(&self, alias: &str, limit: usize) -> Vec<KeySuggestion<'_>> {
        let query = normalize_name(alias);
        let mut ranked: Vec<KeySuggestion<'_>> = self
            .keys()
            .filter(|key| !key.is_empty())
            .map(|key| KeySuggestion {
                key,
                similarity: jaro_winkler::similarity(query.chars(), key.chars()),
            })
            .collect();
        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Measurement> {
        vec![
            Measurement::new("Créatinine", "88,4").with_unit("µmol/L"),
            Measurement::new("Neutrophils %", "60"),
            Measurement::new("CREATININE", "1.0").with_unit("mg/dL"),
            Measurement::new("Neutrophils absolute", "3.5").with_unit("10^9/L"),
        ]
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let measurements = sample();
        let index = MeasurementIndex::build(&measurements);
        let keys: Vec<&str> = index.keys().collect();
        assert_eq!(keys, vec!["creatinine", "neutrophils", "neutrophils absolute"]);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_duplicates_share_a_key() {
        let measurements = sample();
        let index = MeasurementIndex::build(&measurements);
        let positions: Vec<usize> = index.get("creatinine").map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(index.first("creatinine").unwrap().value, Some(88.4));
        assert_eq!(index.first("creatinine").unwrap().unit, UnitTag::Micromolar);
        assert!(index.first("ferritin").is_none());
    }

    #[test]
    fn test_variant_slots() {
        let measurements = sample();
        let index = MeasurementIndex::build(&measurements);
        let pct = index
            .wbc_variant("neutrophils", WbcVariant::Percentage)
            .unwrap();
        let abs = index
            .wbc_variant("neutrophils", WbcVariant::Absolute)
            .unwrap();
        assert_eq!(pct.value, Some(60.0));
        assert_eq!(abs.value, Some(3.5));
        assert!(index.wbc_variant("lymphocytes", WbcVariant::Absolute).is_none());
    }

    #[test]
    fn test_variant_slots_are_last_write_wins() {
        let measurements = vec![
            Measurement::new("Lymphocytes", "1.2").with_unit("10^9/L"),
            Measurement::new("Lymphocytes absolute", "2.4"),
        ];
        let index = MeasurementIndex::build(&measurements);
        let abs = index
            .wbc_variant("lymphocytes", WbcVariant::Absolute)
            .unwrap();
        assert_eq!(abs.value, Some(2.4));
    }

    #[test]
    fn test_nearest_keys() {
        let measurements = sample();
        let index = MeasurementIndex::build(&measurements);
        let nearest = index.nearest_keys("creatinin", 2);
        assert_eq!(nearest.len(), 2);
        assert_eq!(nearest[0].key, "creatinine");
        assert!(nearest[0].similarity > nearest[1].similarity);
    }

    #[test]
    fn test_empty_index() {
        let index = MeasurementIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.nearest_keys("alt", 3).is_empty());
    }
}
