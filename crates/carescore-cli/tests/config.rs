//! Config file versioning and persistence.

use carescore_cli::config::{
    self, CarescoreConfig, CURRENT_VERSION, DEFAULT_FACILITY_NAME,
};
use carescore_core::models::patient::CareSetting;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = config::load_or_default(&dir.path().join("config.json")).expect("defaults");
    assert_eq!(loaded.facility_name, DEFAULT_FACILITY_NAME);
    assert_eq!(loaded.default_care_setting, CareSetting::Hospital);
    assert_eq!(loaded.config_version, CURRENT_VERSION);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "facility_name": "Harbor View", "created_at": "2025-01-02T03:04:05Z" }"#,
    )
    .expect("write");

    let loaded = config::load_config(&path).expect("migrated");
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.facility_name, "Harbor View");
    assert_eq!(loaded.default_care_setting, CareSetting::Hospital);
    assert_eq!(loaded.default_assessor, None);
}

#[test]
fn newer_config_is_rejected() {
    let value = serde_json::json!({ "config_version": CURRENT_VERSION + 1 });
    let err = config::migrate(value, CURRENT_VERSION + 1).expect_err("too new");
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn save_then_load_keeps_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.json");
    let saved = CarescoreConfig {
        config_version: 0,
        facility_name: "Northside Hospice".to_string(),
        default_assessor: Some("RN Kim".to_string()),
        default_care_setting: CareSetting::NursingHome,
        created_at: "2026-10-14T08:00:00Z".parse().expect("timestamp"),
    };
    config::save_config(&path, &saved).expect("save");
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = config::load_config(&path).expect("load");
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.facility_name, saved.facility_name);
    assert_eq!(loaded.default_assessor, saved.default_assessor);
    assert_eq!(loaded.default_care_setting, CareSetting::NursingHome);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    config::save_config(&path, &CarescoreConfig::default()).expect("save");
    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn facility_override_wins_unless_blank() {
    let cfg = CarescoreConfig::default();
    assert_eq!(config::effective_facility(&cfg, Some("Override Clinic")), "Override Clinic");
    assert_eq!(config::effective_facility(&cfg, Some("  ")), DEFAULT_FACILITY_NAME);
    assert_eq!(config::effective_facility(&cfg, None), DEFAULT_FACILITY_NAME);
}
