use ecosim_lib::model::config::{AppConfig, SeasonProgression};
use ecosim_lib::model::ecosystem::Ecosystem;

#[test]
fn test_missing_file_uses_defaults() {
    let config = AppConfig::load("does/not/exist.toml").expect("defaults");
    assert_eq!(config.world.width, 1024);
    assert_eq!(config.placement.min_distance, 50.0);
}

#[test]
fn test_sample_config_parses() {
    let content = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"))
        .expect("sample config present");
    let config = AppConfig::from_toml(&content).expect("sample config is valid");
    assert_eq!(config.cycle.season_progression, SeasonProgression::ResetToSpring);
}

#[test]
fn test_invalid_config_is_rejected_by_ecosystem() {
    let mut config = AppConfig::default();
    config.world.height = -1;
    let err = Ecosystem::new(config).expect_err("negative height");
    assert!(!err.suggestion().is_empty());
}

#[test]
fn test_seed_changes_fingerprint() {
    let a = AppConfig::default();
    let mut b = AppConfig::default();
    b.world.seed = Some(1);
    assert_ne!(a.fingerprint(), b.fingerprint());
}
