use std::path::Path;

use anyhow::{Context, Result};
use lab_map::{AliasTable, IndexedMeasurement, MeasurementIndex, resolve};
use lab_metrics::{EvaluationOptions, Evaluator};
use lab_model::{Flag, MetricKind};
use lab_normalization::ReferenceRange;
use tracing::{info, info_span, trace, warn};

use lab_cli::input::LabInput;
use lab_cli::logging::redact_value;

use crate::cli::{EvaluateArgs, InspectArgs, ResolveArgs};
use crate::summary::print_metric_catalog;
use crate::types::{EvaluationReport, KeySuggestionRow, MeasurementRow, ResolveOutcome};

pub fn run_metrics() -> Result<()> {
    print_metric_catalog(&MetricKind::ALL);
    Ok(())
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<EvaluationReport> {
    let span = info_span!("evaluate", input = %args.input.display());
    let _guard = span.enter();

    let input = load_input(&args.input)?.with_overrides(
        args.sex.map(Into::into),
        args.age,
        args.race.map(Into::into),
    );

    let aliases = match &args.aliases {
        Some(path) => AliasTable::load(path)
            .with_context(|| format!("load aliases from {}", path.display()))?,
        None => AliasTable::builtin(),
    };
    if aliases.extra_count() > 0 {
        info!(extra_aliases = aliases.extra_count(), "alias overrides loaded");
    }

    let options = EvaluationOptions::new()
        .with_only(args.only.iter().copied().map(MetricKind::from))
        .with_aliases(aliases);
    let metrics =
        Evaluator::new(options).evaluate(&input.measurements, input.demographics.as_ref());
    info!(computed = metrics.len(), "metrics computed");

    Ok(EvaluationReport {
        input: args.input.clone(),
        measurement_count: input.measurements.len(),
        demographics: input.demographics,
        metrics,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<MeasurementRow>> {
    let input = load_input(&args.input)?;
    let index = MeasurementIndex::build(&input.measurements);
    Ok(index.entries().iter().map(measurement_row).collect())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolveOutcome> {
    let input = load_input(&args.input)?;
    let index = MeasurementIndex::build(&input.measurements);
    let preference = args.prefer.into();

    let found = resolve(&index, args.aliases.as_slice(), preference).map(measurement_row);
    let suggestions = if found.is_some() {
        Vec::new()
    } else {
        let query = args.aliases.first().map(String::as_str).unwrap_or_default();
        index
            .nearest_keys(query, args.suggestions)
            .into_iter()
            .map(|suggestion| KeySuggestionRow {
                key: suggestion.key.to_string(),
                similarity: suggestion.similarity,
            })
            .collect()
    };

    Ok(ResolveOutcome {
        aliases: args.aliases.clone(),
        preference,
        found,
        suggestions,
    })
}

fn load_input(path: &Path) -> Result<LabInput> {
    let input = LabInput::load(path).context("load input")?;
    info!(
        measurements = input.measurements.len(),
        demographics = input.demographics.is_some(),
        "input loaded"
    );
    if input.measurements.is_empty() {
        warn!(path = %path.display(), "input contains no measurements");
    }
    let non_numeric = input.non_numeric_count();
    if non_numeric > 0 {
        warn!(non_numeric, "measurements without a numeric value");
    }
    Ok(input)
}

fn measurement_row(entry: &IndexedMeasurement<'_>) -> MeasurementRow {
    let measurement = entry.measurement;
    let raw_value = measurement.value.to_string();
    trace!(
        key = %entry.key,
        value = redact_value(&raw_value),
        unit = %entry.unit,
        "indexed measurement"
    );

    let range = measurement
        .reference_text
        .as_deref()
        .and_then(ReferenceRange::parse);
    let (flag, flag_derived) = match (measurement.flag, entry.value, range) {
        (Flag::Unknown, Some(value), Some(range)) => (range.classify(value), true),
        (flag, _, _) => (flag, false),
    };

    MeasurementRow {
        position: entry.position,
        name: measurement.name.clone(),
        key: entry.key.clone(),
        raw_value,
        value: entry.value,
        unit: measurement.unit.clone(),
        unit_tag: entry.unit,
        reference: range.map(|range| range.display()),
        variant: entry.variant,
        flag,
        flag_derived,
    }
}
