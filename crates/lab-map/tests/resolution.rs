//! Resolution behaviour over realistic report extracts.

use std::fs;

use lab_map::{
    AliasError, AliasTable, Analyte, MeasurementIndex, VariantPreference, WbcVariant, resolve,
    resolve_analyte,
};
use lab_model::Measurement;

fn neutrophil_pair() -> Vec<Measurement> {
    vec![
        Measurement::new("Neutrophils", "60")
            .with_unit("%")
            .with_reference("40-75"),
        Measurement::new("Neutrophils", "3.5").with_unit("10^9/L"),
    ]
}

#[test]
fn absolute_preference_is_independent_of_input_order() {
    let forward = neutrophil_pair();
    let mut reversed = neutrophil_pair();
    reversed.reverse();

    for measurements in [forward, reversed] {
        let index = MeasurementIndex::build(&measurements);
        let found = resolve(&index, &["neutrophils"], VariantPreference::Absolute).unwrap();
        assert_eq!(found.value, Some(3.5));
        assert_eq!(found.variant, Some(WbcVariant::Absolute));
    }
}

#[test]
fn percent_scale_range_places_count_unit_record_in_percent_slot() {
    let measurements = vec![
        Measurement::new("Neutrophils", "3.5")
            .with_unit("10^9/L")
            .with_reference("1.8-7.7"),
    ];
    let index = MeasurementIndex::build(&measurements);

    let percent = index.wbc_variant("neutrophils", WbcVariant::Percentage);
    assert_eq!(percent.map(|entry| entry.value), Some(Some(3.5)));
    assert!(index.wbc_variant("neutrophils", WbcVariant::Absolute).is_none());

    let found = resolve(&index, &["neutrophils"], VariantPreference::Percentage).unwrap();
    assert_eq!(found.variant, Some(WbcVariant::Percentage));
}

#[test]
fn partial_pass_finds_decorated_names() {
    let measurements = vec![
        Measurement::new("Glucose", "5.1"),
        Measurement::new("Creatinine (serum)", "80").with_unit("µmol/L"),
    ];
    let index = MeasurementIndex::build(&measurements);
    let found = resolve_analyte(
        &index,
        &AliasTable::builtin(),
        Analyte::Creatinine,
        VariantPreference::Any,
    )
    .unwrap();
    assert_eq!(found.name(), "Creatinine (serum)");
}

#[test]
fn earlier_alias_wins_over_later_alias() {
    let measurements = vec![
        Measurement::new("Cholesterol", "5.9"),
        Measurement::new("Cholesterol total", "5.2"),
    ];
    let index = MeasurementIndex::build(&measurements);
    let found = resolve_analyte(
        &index,
        &AliasTable::builtin(),
        Analyte::TotalCholesterol,
        VariantPreference::Any,
    )
    .unwrap();
    assert_eq!(found.value, Some(5.2));
}

#[test]
fn partial_pass_scans_keys_in_input_order() {
    let measurements = vec![
        Measurement::new("LDL cholesterol", "3.1"),
        Measurement::new("HDL cholesterol (direct)", "1.2"),
    ];
    let index = MeasurementIndex::build(&measurements);
    let found = resolve(&index, &["cholesterol"], VariantPreference::Any).unwrap();
    assert_eq!(found.value, Some(3.1));
}

#[test]
fn multilingual_aliases_resolve() {
    let measurements = vec![
        Measurement::new("АСАТ", "32"),
        Measurement::new("Тромбоциты", "250").with_unit("10^9/л"),
        Measurement::new("Triglycérides", "1,7").with_unit("mmol/L"),
    ];
    let index = MeasurementIndex::build(&measurements);
    let table = AliasTable::builtin();

    let ast = resolve_analyte(&index, &table, Analyte::Ast, VariantPreference::Any).unwrap();
    assert_eq!(ast.value, Some(32.0));
    let plt = resolve_analyte(&index, &table, Analyte::Platelets, VariantPreference::Any).unwrap();
    assert_eq!(plt.value, Some(250.0));
    let tg =
        resolve_analyte(&index, &table, Analyte::Triglycerides, VariantPreference::Any).unwrap();
    assert_eq!(tg.value, Some(1.7));
}

#[test]
fn unresolved_analyte_is_none() {
    let measurements = vec![Measurement::new("Ferritin", "80")];
    let index = MeasurementIndex::build(&measurements);
    assert!(
        resolve_analyte(
            &index,
            &AliasTable::builtin(),
            Analyte::HbA1c,
            VariantPreference::Any
        )
        .is_none()
    );
}

#[test]
fn alias_overrides_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.json");
    fs::write(&path, r#"{"creatinine": ["kreatinin"]}"#).unwrap();

    let table = AliasTable::load(&path).unwrap();
    let measurements = vec![Measurement::new("Kreatinin", "1.0").with_unit("mg/dL")];
    let index = MeasurementIndex::build(&measurements);
    let found =
        resolve_analyte(&index, &table, Analyte::Creatinine, VariantPreference::Any).unwrap();
    assert_eq!(found.value, Some(1.0));
}

#[test]
fn alias_file_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        AliasTable::load(&missing),
        Err(AliasError::FileRead { .. })
    ));

    let malformed = dir.path().join("bad.json");
    fs::write(&malformed, "[1, 2, 3]").unwrap();
    assert!(matches!(
        AliasTable::load(&malformed),
        Err(AliasError::Json(_))
    ));
}
