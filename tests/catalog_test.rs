//! Experiment catalog tests: uniqueness, lookup and catalog files

use std::io::Write;

use radar_experiments::experiment::{presets, ExperimentCatalog, ExperimentConfig};
use radar_experiments::Error;

const SITE_CATALOG: &str = r#"
[[experiment]]
name = "Normalscan16"
cp = 151
scanbound = 60000
mpinc = 2700
nrang = 210
beams = [18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3]
frequency = 13.5e6

[[experiment]]
name = "ULFscan"
control_program_id = 8020
scan_boundary_ms = 60000
pulse_spacing_us = 2700
range_gate_count = 210
beam_order = [12, 10, 8, 4, 12, 10, 8, 4, 12, 10, 8, 4, 12, 10, 8, 4]
frequency_hz = 13.5e6
"#;

fn temp_catalog(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_builtin_catalog_lookup() {
    let catalog = presets::builtin_catalog().unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.require("Normalscan16").unwrap().control_program_id(), 151);
    assert_eq!(catalog.require("ULFscan").unwrap().control_program_id(), 8020);
    assert!(!catalog.contains("normalscan16"), "names are case sensitive");
}

#[test]
fn test_duplicate_name_rejected() {
    let err = ExperimentCatalog::from_configs([
        presets::normalscan16().unwrap(),
        presets::ulfscan().unwrap(),
        presets::normalscan16().unwrap(),
    ])
    .unwrap_err();

    assert!(matches!(err, Error::DuplicateExperiment(ref name) if name == "Normalscan16"));
}

#[test]
fn test_duplicate_name_with_different_values_rejected() {
    let mut catalog = presets::builtin_catalog().unwrap();
    let impostor = ExperimentConfig::builder("ULFscan")
        .control_program_id(1)
        .scan_boundary_ms(1)
        .pulse_spacing_us(1)
        .range_gate_count(1)
        .beam_order([1])
        .frequency_hz(1.0)
        .build()
        .unwrap();

    assert!(catalog.register(impostor).is_err());
    assert_eq!(catalog.require("ULFscan").unwrap().control_program_id(), 8020);
}

#[test]
fn test_iteration_follows_registration_order() {
    let catalog = ExperimentCatalog::from_configs([
        presets::ulfscan().unwrap(),
        presets::normalscan16().unwrap(),
    ])
    .unwrap();

    let names: Vec<&str> = catalog.iter().map(ExperimentConfig::name).collect();
    assert_eq!(names, vec!["ULFscan", "Normalscan16"]);
}

// =============================================================================
// Catalog files
// =============================================================================

#[test]
fn test_toml_catalog_matches_presets() {
    let catalog = ExperimentCatalog::from_toml_str(SITE_CATALOG).unwrap();

    assert_eq!(catalog.require("Normalscan16").unwrap(), &presets::normalscan16().unwrap());
    assert_eq!(catalog.require("ULFscan").unwrap(), &presets::ulfscan().unwrap());
}

#[test]
fn test_toml_round_trip() {
    let catalog = presets::builtin_catalog().unwrap();

    let toml = catalog.to_toml_string().unwrap();
    let restored = ExperimentCatalog::from_toml_str(&toml).unwrap();

    assert_eq!(restored.len(), catalog.len());
    for (original, restored) in catalog.iter().zip(restored.iter()) {
        assert_eq!(original, restored);
    }
    // Unset first range stays unset
    assert!(!toml.contains("first_range_km"));
}

#[test]
fn test_json_round_trip() {
    let catalog = presets::builtin_catalog().unwrap();

    let json = catalog.to_json_string().unwrap();
    let restored = ExperimentCatalog::from_json_str(&json).unwrap();

    let original: Vec<_> = catalog.iter().cloned().collect();
    let restored: Vec<_> = restored.iter().cloned().collect();
    assert_eq!(original, restored);
}

#[test]
fn test_toml_duplicate_rejected() {
    let doubled = format!("{SITE_CATALOG}\n{SITE_CATALOG}");
    let err = ExperimentCatalog::from_toml_str(&doubled).unwrap_err();
    assert!(matches!(err, Error::DuplicateExperiment(_)));
}

#[test]
fn test_toml_invalid_record_rejected() {
    let source = r#"
[[experiment]]
name = "ZeroGates"
cp = 151
scanbound = 60000
mpinc = 2700
nrang = 0
beams = [1]
frequency = 13.5e6
"#;
    let err = ExperimentCatalog::from_toml_str(source).unwrap_err();
    assert!(matches!(err, Error::TomlDe(_)));
    assert!(err.to_string().contains("range_gate_count must be positive"));
}

#[test]
fn test_toml_unknown_field_rejected() {
    let source = r#"
[[experiment]]
name = "Typo"
cp = 151
scanbound = 60000
scanbnd = 60000
mpinc = 2700
nrang = 210
beams = [1]
frequency = 13.5e6
"#;
    let err = ExperimentCatalog::from_toml_str(source).unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{err}");
}

#[test]
fn test_padded_name_rejected() {
    let padded = ExperimentConfig::builder("ULFscan ")
        .control_program_id(8020)
        .scan_boundary_ms(60_000)
        .pulse_spacing_us(2700)
        .range_gate_count(210)
        .beam_order([12])
        .frequency_hz(13.5e6)
        .build();

    assert!(matches!(padded, Err(Error::InvalidConfiguration { .. })));
    assert!(ExperimentCatalog::from_json_str(
        r#"{"experiment": [{"name": "ULFscan ", "cp": 8020, "scanbound": 60000,
            "mpinc": 2700, "nrang": 210, "beams": [12], "frequency": 13.5e6}]}"#
    )
    .is_err());
}

#[test]
fn test_json_frequency_exact() {
    // Shortest-form output that a lossy float parser reads back one ULP off
    for hz in [15_749_034.704_008_42, 19_828_288.335_594_434] {
        let config = ExperimentConfig::builder("Precise")
            .control_program_id(151)
            .scan_boundary_ms(60_000)
            .pulse_spacing_us(2700)
            .range_gate_count(210)
            .beam_order([1])
            .frequency_hz(hz)
            .build()
            .unwrap();
        let catalog = ExperimentCatalog::from_configs([config]).unwrap();

        let json = catalog.to_json_string().unwrap();
        let restored = ExperimentCatalog::from_json_str(&json).unwrap();
        let restored_hz = restored.require("Precise").unwrap().frequency_hz();
        assert_eq!(restored_hz.to_bits(), hz.to_bits(), "{hz} came back as {restored_hz}");
    }
}

#[test]
fn test_load_toml_file() {
    let file = temp_catalog(".toml", SITE_CATALOG);
    let catalog = ExperimentCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_load_json_file() {
    let json = presets::builtin_catalog().unwrap().to_json_string().unwrap();
    let file = temp_catalog(".json", &json);
    let catalog = ExperimentCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Normalscan16", "ULFscan"]);
}

#[test]
fn test_load_unsupported_extension() {
    let file = temp_catalog(".yaml", "experiment: []");
    let err = ExperimentCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ExperimentCatalog::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
