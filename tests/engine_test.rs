mod common;

use common::{fixture, unit_mut, write_sources};
use rstest::rstest;
use uom_dictionary_core::algebra::{approx_eq, Canonicalizer, FactorDeriver};
use uom_dictionary_core::model::{DictionaryIndex, Mapping, UnitCategory};
use uom_dictionary_core::symbol::SymbolParser;
use uom_dictionary_core::{
    run, validate, Category, DiagnosticKind, DictionaryError, Error, OutputDetail, ValidationConfig, Validator,
};

#[test]
fn test_fixture_is_consistent() {
    let report = validate(&fixture(), &ValidationConfig::default()).unwrap();
    assert!(report.is_clean(), "{}", report);
    assert_eq!(report.sections.len(), 8);
}

#[test]
fn test_run_from_files_matches_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_sources(dir.path());
    assert!(sources.preflight().continuable());

    let from_files = run(&sources, &ValidationConfig::full()).unwrap();
    let in_memory = validate(&fixture(), &ValidationConfig::full()).unwrap();
    assert_eq!(from_files, in_memory);
}

#[test]
fn test_missing_dictionary_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut sources = write_sources(dir.path());
    sources.dictionary = dir.path().join("nowhere.json");

    assert!(!sources.preflight().continuable());
    assert!(matches!(run(&sources, &ValidationConfig::default()), Err(Error::Load(_))));
}

#[test]
fn test_malformed_optional_source_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_sources(dir.path());
    if let Some(path) = &sources.unit_mappings {
        std::fs::write(path, "[ not a mapping set").unwrap();
    }

    let preflight = sources.preflight();
    assert!(preflight.dictionary_present);
    assert!(!preflight.continuable());
    match run(&sources, &ValidationConfig::default()) {
        Err(Error::Load(err)) => assert!(err.to_string().contains("unit mapping set"), "{}", err),
        other => panic!("expected a load error, got {:?}", other.map(|r| r.diagnostic_count)),
    }
}

#[test]
fn test_volume_class_without_si_member() {
    let mut dictionary = fixture();
    unit_mut(&mut dictionary, "m3").is_si = false;

    let report = validate(&dictionary, &ValidationConfig::default()).unwrap();
    let diagnostics: Vec<_> = report.diagnostics().collect();
    assert_eq!(diagnostics.len(), 1, "{}", report);
    assert_eq!(diagnostics[0].category, Category::Class);
    assert_eq!(diagnostics[0].entity, "volume");
    assert!(diagnostics[0].message.contains("no memberUnit is flagged as SI"));
}

#[test]
fn test_repeated_class_mapping_source() {
    let mut dictionary = fixture();
    let set = &mut dictionary.class_mapping_sets[0];
    for target in ["length", "velocity"] {
        set.mappings.push(Mapping { maps_from: "Foo".into(), maps_to: Some(target.into()) });
    }

    let report = validate(&dictionary, &ValidationConfig::default()).unwrap();
    let section = report.section(Category::ClassMap).unwrap();
    assert_eq!(section.diagnostics.len(), 2);
    for d in &section.diagnostics {
        assert_eq!(d.kind, DiagnosticKind::Uniqueness);
        assert_eq!(d.scope.as_deref(), Some("v2-classes"));
        assert!(d.message.contains("occurs 2 times"));
    }
}

#[test]
fn test_cyclic_base_chain() {
    let mut dictionary = fixture();
    unit_mut(&mut dictionary, "kg").base_unit = Some("g".into());

    let err = Validator::new(&dictionary).validate().unwrap_err();
    assert_eq!(err, DictionaryError::CyclicDefinition { cycles: vec![vec!["g".into(), "kg".into()]] });
    assert!(matches!(validate(&dictionary, &ValidationConfig::default()), Err(Error::Dictionary(_))));
}

#[test]
fn test_report_detail_levels() {
    let dictionary = fixture();
    let summary = validate(&dictionary, &ValidationConfig::default()).unwrap();
    assert_eq!(summary.detail, OutputDetail::Summary);
    assert!(summary.sections.iter().all(|s| s.records.is_none()));

    let full = validate(&dictionary, &ValidationConfig::full()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&full.to_json().unwrap()).unwrap();
    assert_eq!(json["sections"][2]["records"].as_array().map(Vec::len), Some(dictionary.units.len()));
    assert_eq!(json["sections"][5]["records"][0]["name"], "legacy-codes");
}

#[test]
fn test_many_defects_are_all_reported_in_order() {
    let mut dictionary = fixture();
    dictionary.dimensions[7].canonical_unit = "Pa".into();
    unit_mut(&mut dictionary, "ft/s").category = UnitCategory::Atom;
    unit_mut(&mut dictionary, "ft").conversion_ref = Some("NIST-999".into());
    dictionary.prefixes[1].multiplier = 1e3;
    dictionary.unit_mapping_sets[0].mappings.push(Mapping { maps_from: "yd".into(), maps_to: Some("yd".into()) });

    let first = validate(&dictionary, &ValidationConfig::default()).unwrap();
    let second = validate(&dictionary, &ValidationConfig::default()).unwrap();
    assert_eq!(first, second);

    let tags: Vec<_> = first.diagnostics().map(|d| d.category.tag()).collect();
    assert_eq!(tags, vec!["DIMENSION", "UNIT", "UNIT", "PREFIX", "PREFIX", "UNIT-MAP"]);
}

#[rstest]
#[case("kPa", "kg/(m.s2)", "M/(L.T2)")]
#[case("ft/s", "m/s", "L/T")]
#[case("km.h", "m.s", "L.T")]
#[case("L/s", "m3/s", "L3/T")]
fn test_canonical_forms_on_fixture(#[case] symbol: &str, #[case] canonical: &str, #[case] dimension: &str) {
    let dictionary = fixture();
    let index = DictionaryIndex::new(&dictionary);
    let result = Canonicalizer::new(&index).canonicalize(symbol).unwrap();
    assert_eq!(result.symbol, canonical);
    assert_eq!(result.dimension, dimension);
}

#[test]
fn test_parse_and_factor_properties() {
    let dictionary = fixture();
    let index = DictionaryIndex::new(&dictionary);

    let parsed = SymbolParser::new(&index).parse("kPa").unwrap();
    assert_eq!(parsed.components.len(), 1);
    assert_eq!(parsed.components[0].prefix.as_deref(), Some("k"));
    assert_eq!(parsed.components[0].atom, "Pa");
    assert_eq!(parsed.components[0].exponent, 1);

    let factors = FactorDeriver::new(&index);
    assert_eq!(factors.derive("kPa").unwrap(), 1000.0 * factors.derive("Pa").unwrap());

    for unit in dictionary.units.iter().filter(|u| u.category == UnitCategory::Derived) {
        if let Some(declared) = unit.conversion.and_then(|c| c.factor()) {
            let derived = factors.derive(&unit.symbol).unwrap();
            assert!(approx_eq(declared, derived, 1e-15), "{}: {} != {}", unit.symbol, declared, derived);
        }
    }
}
