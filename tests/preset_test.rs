//! Preset file handling tests.

mod common;

use ditherlab::preset::Preset;
use halftone::{DitherAlgorithm, DitherOptions};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

#[test]
fn test_preset_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let options = DitherOptions::new()
        .algorithm(DitherAlgorithm::Burkes)
        .palette_size(6)
        .serpentine(true)
        .glow(25.0)
        .noise_seed(Some(11));
    Preset::from_options(&options).save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded.to_options().unwrap(), options);
}

#[test]
fn test_hand_written_partial_preset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "algorithm": "bayer", "pixelation_scale": 3 }"#).unwrap();

    let options = Preset::load(&path).unwrap().to_options().unwrap();
    assert_eq!(options.algorithm, DitherAlgorithm::Bayer);
    assert_eq!(options.pixelation_scale, 3);
    assert_eq!(options.palette_size, 4, "unset fields use defaults");
}

#[test]
fn test_malformed_json_is_a_preset_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Preset::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Preset error:"));
}

#[test]
fn test_unknown_algorithm_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typo.json");
    std::fs::write(&path, r#"{ "algorithm": "floydd-steinberg" }"#).unwrap();

    let preset = Preset::load(&path).unwrap();
    assert!(preset.to_options().is_err());
}

#[test]
fn test_out_of_range_value_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("range.json");
    std::fs::write(&path, r#"{ "brightness": 500.0 }"#).unwrap();

    let preset = Preset::load(&path).unwrap();
    let err = preset.to_options().unwrap_err();
    assert!(err.to_string().contains("brightness"));
}

#[test]
fn test_randomized_preset_is_reproducible_per_seed() {
    let mut a = Preset::default();
    let mut b = Preset::default();
    a.randomize(&mut StdRng::seed_from_u64(314));
    b.randomize(&mut StdRng::seed_from_u64(314));
    assert_eq!(a, b);

    let mut c = Preset::default();
    c.randomize(&mut StdRng::seed_from_u64(315));
    assert_ne!(a, c, "different seeds should produce different presets");
}

#[test]
fn test_randomized_preset_survives_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.json");

    let mut preset = Preset::default();
    preset.randomize(&mut StdRng::seed_from_u64(8));
    preset.save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, preset);
    assert!(loaded.to_options().is_ok());
}
