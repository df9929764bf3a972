//! End-to-end evaluation over report-shaped measurement lists.

use lab_map::{AliasTable, Analyte};
use lab_metrics::{EvaluationOptions, Evaluator, evaluate};
use lab_model::{CompositeMetric, Demographics, Measurement, MetricKind, Sex};

fn full_panel() -> Vec<Measurement> {
    vec![
        Measurement::new("Créatinine", "88,4").with_unit("µmol/L"),
        Measurement::new("AST (GOT)", "40").with_unit("U/L"),
        Measurement::new("ALT", "30").with_unit("U/L"),
        Measurement::new("Platelets", "200").with_unit("10^9/L"),
        Measurement::new("Triglycerides", "1,7").with_unit("mmol/L"),
        Measurement::new("HDL cholesterol", "1.2").with_unit("mmol/L"),
        Measurement::new("Cholesterol total", "5.2").with_unit("mmol/L"),
        Measurement::new("Neutrophils", "60")
            .with_unit("%")
            .with_reference("40-75"),
        Measurement::new("Neutrophils", "3.5").with_unit("10^9/L"),
        Measurement::new("Lymphocytes", "30")
            .with_unit("%")
            .with_reference("19-37"),
        Measurement::new("Lymphocytes", "1.9").with_unit("10^9/L"),
        Measurement::new("HbA1c", "7.0").with_unit("%"),
    ]
}

fn find(metrics: &[CompositeMetric], kind: MetricKind) -> Option<&CompositeMetric> {
    metrics.iter().find(|metric| metric.kind == kind)
}

fn render(metrics: &[CompositeMetric]) -> String {
    metrics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn full_panel_renders_every_card_in_order() {
    let demographics = Demographics::new(Sex::Female, Some(70));
    let metrics = evaluate(&full_panel(), Some(&demographics));

    insta::assert_snapshot!(render(&metrics), @r"
    Kidney function | eGFR (CKD-EPI 2021) | 60 mL/min/1.73m² | G3a (mild–mod ↓) | 50%
    Liver fibrosis risk | FIB-4 | 2.56 | average risk | 85%
    Liver function | De Ritis (AST/ALT) | 1.33 | normal/nonspecific | 67%
    Atherogenic risk | AIP = log10(TG/HDL) | 0.15 | average risk | 30%
    Lipid risk | TG/HDL (mg/dL) | 3.24 | unfavorable | 65%
    Lipid risk | TC/HDL (mg/dL) | 4.33 | border | 72%
    Inflammation | NLR | 1.84 | normal | 37%
    Glycemic control | eAG ≈ 154 mg/dL (8.6 mmol/L) | 7.0 % | diabetic risk | 60%
    ");
}

#[test]
fn egfr_female_forty() {
    let measurements = vec![Measurement::new("Creatinine", "1.0").with_unit("mg/dL")];
    let demographics = Demographics::new(Sex::Female, Some(40));
    let metrics = evaluate(&measurements, Some(&demographics));

    let egfr = find(&metrics, MetricKind::Egfr).unwrap();
    assert!((egfr.value.unwrap() - 72.17).abs() < 0.01);
    assert_eq!(egfr.display_value, "72");
    assert_eq!(egfr.grade, "G2 (mild ↓)");
    assert_eq!(egfr.percent, 60);
}

#[test]
fn egfr_converts_micromolar_creatinine() {
    let measurements = vec![Measurement::new("Креатинин", "97").with_unit("мкмоль/л")];
    let demographics = Demographics::new(Sex::Male, Some(60));
    let metrics = evaluate(&measurements, Some(&demographics));

    let egfr = find(&metrics, MetricKind::Egfr).unwrap();
    assert!((egfr.value.unwrap() - 77.08).abs() < 0.01);
    assert_eq!(egfr.display_value, "77");
}

#[test]
fn egfr_without_demographics_is_a_placeholder() {
    let measurements = vec![Measurement::new("Creatinine", "1.0").with_unit("mg/dL")];
    let metrics = evaluate(&measurements, None);

    assert_eq!(metrics.len(), 1);
    let egfr = &metrics[0];
    assert!(egfr.is_placeholder());
    assert_eq!(egfr.display_value, "—");
    assert_eq!(egfr.grade, "Age and sex required");
    assert_eq!(egfr.percent, 0);

    let sex_only = Demographics::new(Sex::Male, Some(0));
    let metrics = evaluate(&measurements, Some(&sex_only));
    assert!(metrics[0].is_placeholder());
}

#[test]
fn egfr_without_creatinine_is_omitted() {
    let demographics = Demographics::new(Sex::Female, Some(40));
    let metrics = evaluate(&[Measurement::new("Glucose", "5.1")], Some(&demographics));
    assert!(find(&metrics, MetricKind::Egfr).is_none());
}

#[test]
fn fib4_worked_example() {
    let measurements = vec![
        Measurement::new("AST", "40"),
        Measurement::new("ALT", "30"),
        Measurement::new("PLT", "200").with_unit("x10^9/L"),
    ];
    let demographics = Demographics::new(Sex::Unknown, Some(70));
    let metrics = evaluate(&measurements, Some(&demographics));

    let fib4 = find(&metrics, MetricKind::Fib4).unwrap();
    assert!((fib4.value.unwrap() - 2.556).abs() < 0.001);
    assert_eq!(fib4.display_value, "2.56");
    assert_eq!(fib4.grade, "average risk");
}

#[test]
fn fib4_low_cutoff_relaxes_at_sixty_five() {
    let measurements = vec![
        Measurement::new("AST", "20"),
        Measurement::new("ALT", "30"),
        Measurement::new("Platelets", "200"),
    ];
    let older = Demographics::new(Sex::Male, Some(80));
    let metrics = evaluate(&measurements, Some(&older));
    let fib4 = find(&metrics, MetricKind::Fib4).unwrap();
    assert!((fib4.value.unwrap() - 1.46).abs() < 0.01);
    assert_eq!(fib4.grade, "low fibrosis risk");
}

#[test]
fn fib4_needs_age() {
    let measurements = vec![
        Measurement::new("AST", "40"),
        Measurement::new("ALT", "30"),
        Measurement::new("Platelets", "200"),
    ];
    let metrics = evaluate(&measurements, None);
    assert!(find(&metrics, MetricKind::Fib4).is_none());
    assert!(find(&metrics, MetricKind::DeRitis).is_some());
}

#[test]
fn zero_alt_yields_no_liver_metrics() {
    let measurements = vec![
        Measurement::new("AST", "40"),
        Measurement::new("ALT", "0"),
        Measurement::new("Platelets", "200"),
    ];
    let demographics = Demographics::new(Sex::Female, Some(70));
    let metrics = evaluate(&measurements, Some(&demographics));

    assert!(find(&metrics, MetricKind::Fib4).is_none());
    assert!(find(&metrics, MetricKind::DeRitis).is_none());
    assert!(metrics.iter().all(|m| m.value.is_none_or(f64::is_finite)));
}

#[test]
fn zero_platelets_yield_no_fib4() {
    let measurements = vec![
        Measurement::new("AST", "40"),
        Measurement::new("ALT", "30"),
        Measurement::new("Platelets", "0"),
    ];
    let demographics = Demographics::new(Sex::Female, Some(70));
    let metrics = evaluate(&measurements, Some(&demographics));
    assert!(find(&metrics, MetricKind::Fib4).is_none());
}

#[test]
fn aip_worked_example_from_mg_dl() {
    let measurements = vec![
        Measurement::new("Triglycérides", "150.569").with_unit("mg/dL"),
        Measurement::new("HDL-C", "46.404").with_unit("mg/dL"),
    ];
    let metrics = evaluate(&measurements, None);

    let aip = find(&metrics, MetricKind::Aip).unwrap();
    assert!((aip.value.unwrap() - 0.1513).abs() < 0.001);
    assert_eq!(aip.grade, "average risk");
    assert_eq!(aip.display_value, "0.15");
}

#[test]
fn zero_hdl_yields_no_lipid_metrics() {
    let measurements = vec![
        Measurement::new("Triglycerides", "1.7").with_unit("mmol/L"),
        Measurement::new("HDL", "0").with_unit("mmol/L"),
        Measurement::new("Total cholesterol", "5.2").with_unit("mmol/L"),
    ];
    let metrics = evaluate(&measurements, None);
    assert!(metrics.is_empty());
}

#[test]
fn nlr_prefers_absolute_counts_in_any_order() {
    let mut measurements = vec![
        Measurement::new("Neutrophils, %", "60").with_reference("40-75"),
        Measurement::new("Neutrophils absolute", "3.5").with_unit("10^9/L"),
        Measurement::new("Lymphocytes %", "30"),
        Measurement::new("Lymphocytes absolute", "1.9").with_unit("10^9/L"),
    ];
    let forward = evaluate(&measurements, None);
    measurements.reverse();
    let reversed = evaluate(&measurements, None);

    for metrics in [forward, reversed] {
        let nlr = find(&metrics, MetricKind::Nlr).unwrap();
        assert_eq!(nlr.display_value, "1.84");
    }
}

#[test]
fn nlr_resolves_cyrillic_names() {
    let measurements = vec![
        Measurement::new("Нейтрофилы", "60").with_unit("%"),
        Measurement::new("Лимфоциты", "20").with_unit("%"),
    ];
    let metrics = evaluate(&measurements, None);
    let nlr = find(&metrics, MetricKind::Nlr).unwrap();
    assert_eq!(nlr.display_value, "3.00");
    assert_eq!(nlr.grade, "normal");
}

#[test]
fn zero_lymphocytes_yield_no_nlr() {
    let measurements = vec![
        Measurement::new("Neutrophils", "3.5").with_unit("10^9/L"),
        Measurement::new("Lymphocytes", "0").with_unit("10^9/L"),
    ];
    assert!(evaluate(&measurements, None).is_empty());
}

#[test]
fn unparseable_values_are_skipped() {
    let measurements = vec![
        Measurement::new("HbA1c", "see comment"),
        Measurement::new("AST", "n/a"),
        Measurement::new("ALT", "30"),
    ];
    assert!(evaluate(&measurements, None).is_empty());
}

#[test]
fn options_select_metrics_and_aliases() {
    let measurements = vec![
        Measurement::new("Glycohemoglobin", "5.9").with_unit("%"),
        Measurement::new("AST", "40"),
        Measurement::new("ALT", "30"),
    ];
    let options = EvaluationOptions::new()
        .with_only([MetricKind::HbA1c])
        .with_aliases(AliasTable::builtin().with_extra(Analyte::HbA1c, "glycohemoglobin"));
    let metrics = Evaluator::new(options).evaluate(&measurements, None);

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].kind, MetricKind::HbA1c);
    assert_eq!(metrics[0].grade, "prediabetes risk");
}

#[test]
fn metrics_serialize_for_renderers() {
    let measurements = vec![Measurement::new("HbA1c", "5,2").with_unit("%")];
    let metrics = evaluate(&measurements, None);
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json[0]["kind"], "hba1c");
    assert_eq!(json[0]["category"], "Glycemic control");
    assert_eq!(json[0]["displayValue"], "5.2 %");
    assert_eq!(json[0]["grade"], "optimal");
    assert_eq!(json[0]["percent"], 24);
}
