//! Shared inputs for metric calculators.

use lab_map::{
    AliasTable, Analyte, IndexedMeasurement, MeasurementIndex, VariantPreference, resolve_analyte,
};
use lab_model::Demographics;
use lab_normalization::Conversion;

/// Everything a calculator may read during one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct MetricContext<'i, 'a> {
    pub index: &'i MeasurementIndex<'a>,
    pub aliases: &'i AliasTable,
    pub demographics: Demographics,
}

impl<'i, 'a> MetricContext<'i, 'a> {
    pub fn new(
        index: &'i MeasurementIndex<'a>,
        aliases: &'i AliasTable,
        demographics: Demographics,
    ) -> Self {
        Self {
            index,
            aliases,
            demographics,
        }
    }

    pub fn resolve(
        &self,
        analyte: Analyte,
        preference: VariantPreference,
    ) -> Option<&'i IndexedMeasurement<'a>> {
        resolve_analyte(self.index, self.aliases, analyte, preference)
    }

    /// Numeric value of `analyte` as reported.
    pub fn value(&self, analyte: Analyte) -> Option<f64> {
        self.resolve(analyte, VariantPreference::Any)?.value
    }

    /// Numeric value of `analyte` with a leukocyte variant preference.
    pub fn value_preferring(&self, analyte: Analyte, preference: VariantPreference) -> Option<f64> {
        self.resolve(analyte, preference)?.value
    }

    /// Value of `analyte` converted into the conversion's canonical unit.
    pub fn converted(&self, analyte: Analyte, conversion: Conversion) -> Option<f64> {
        let found = self.resolve(analyte, VariantPreference::Any)?;
        let converted = conversion.apply(found.value?, found.unit);
        converted.is_finite().then_some(converted)
    }
}

/// `Some(value)` when the value is a usable number.
pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
