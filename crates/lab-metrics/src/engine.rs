//! Evaluation of all enabled metrics over one measurement list.

use std::collections::BTreeSet;

use lab_map::{AliasTable, MeasurementIndex};
use lab_model::{CompositeMetric, Demographics, Measurement, MetricKind};
use tracing::debug;

use crate::context::MetricContext;
use crate::metrics;

/// Which metrics to compute and which aliases to resolve analytes with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    enabled: BTreeSet<MetricKind>,
    aliases: AliasTable,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            enabled: MetricKind::ALL.into_iter().collect(),
            aliases: AliasTable::builtin(),
        }
    }
}

impl EvaluationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict evaluation to `kinds`. An empty selection keeps all metrics.
    #[must_use]
    pub fn with_only(mut self, kinds: impl IntoIterator<Item = MetricKind>) -> Self {
        let selected: BTreeSet<MetricKind> = kinds.into_iter().collect();
        if !selected.is_empty() {
            self.enabled = selected;
        }
        self
    }

    #[must_use]
    pub fn without(mut self, kind: MetricKind) -> Self {
        self.enabled.remove(&kind);
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn is_enabled(&self, kind: MetricKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Enabled metrics in evaluation order.
    pub fn enabled(&self) -> impl Iterator<Item = MetricKind> + '_ {
        MetricKind::ALL
            .into_iter()
            .filter(|kind| self.enabled.contains(kind))
    }
}

/// Evaluates composite metrics. Holds configuration only; every call builds
/// its own index.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: EvaluationOptions,
}

impl Evaluator {
    pub fn new(options: EvaluationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Compute every enabled metric the measurements support, in order:
    /// eGFR, FIB-4, De Ritis, AIP, TG/HDL, TC/HDL, NLR, HbA1c.
    pub fn evaluate(
        &self,
        measurements: &[Measurement],
        demographics: Option<&Demographics>,
    ) -> Vec<CompositeMetric> {
        let index = MeasurementIndex::build(measurements);
        self.evaluate_index(&index, demographics.copied().unwrap_or_default())
    }

    /// Compute metrics over an index the caller already built.
    pub fn evaluate_index(
        &self,
        index: &MeasurementIndex<'_>,
        demographics: Demographics,
    ) -> Vec<CompositeMetric> {
        let ctx = MetricContext::new(index, &self.options.aliases, demographics);
        let mut results = Vec::new();

        for kind in self.options.enabled() {
            match metrics::compute(kind, &ctx) {
                Some(metric) => results.push(metric),
                None => debug!(metric = %kind, "metric skipped"),
            }
        }

        debug!(
            measurements = index.len(),
            computed = results.len(),
            "evaluation finished"
        );
        results
    }
}

/// Evaluate all metrics with built-in aliases.
pub fn evaluate(
    measurements: &[Measurement],
    demographics: Option<&Demographics>,
) -> Vec<CompositeMetric> {
    Evaluator::default().evaluate(measurements, demographics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let options = EvaluationOptions::default();
        assert_eq!(options.enabled().count(), MetricKind::ALL.len());
    }

    #[test]
    fn test_with_only_keeps_evaluation_order() {
        let options =
            EvaluationOptions::new().with_only([MetricKind::HbA1c, MetricKind::Egfr]);
        let enabled: Vec<MetricKind> = options.enabled().collect();
        assert_eq!(enabled, vec![MetricKind::Egfr, MetricKind::HbA1c]);
    }

    #[test]
    fn test_empty_selection_keeps_all() {
        let options = EvaluationOptions::new().with_only(Vec::new());
        assert!(options.is_enabled(MetricKind::Nlr));
        let options = options.without(MetricKind::Nlr);
        assert!(!options.is_enabled(MetricKind::Nlr));
    }

    #[test]
    fn test_empty_input() {
        assert!(evaluate(&[], None).is_empty());
    }
}
