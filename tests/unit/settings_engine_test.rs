//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use tab_session_lite::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tab_session_lite::types::errors::SettingsError;
use tab_session_lite::types::settings::EngineSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, EngineSettings::default());
    assert_eq!(settings.restore.low_threshold, 50);
    assert_eq!(settings.restore.high_threshold, 100);
    assert_eq!(settings.geometry.slack, 10);
}

/// A change made through `set_value` must be visible to a brand-new engine
/// reading the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("restore.high_tab_delay_ms", serde_json::json!(75))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.restore.high_tab_delay_ms, 75);
    assert_eq!(settings.restore.low_threshold, 50);
}

#[test]
fn test_set_value_unknown_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let err = engine
        .set_value("restore.does_not_exist", serde_json::json!(1))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));

    let err = engine.set_value("", serde_json::json!(1)).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("geometry.fallback_offset", serde_json::json!(120))
        .unwrap();
    assert_eq!(engine.get_settings().geometry.fallback_offset, 120);

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), EngineSettings::default());

    let mut reread = engine_in_temp(&dir);
    assert_eq!(reread.load().unwrap(), EngineSettings::default());
}

#[test]
fn test_config_path_is_the_override() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert!(engine.get_config_path().ends_with("settings.json"));
    assert!(engine
        .get_config_path()
        .starts_with(&*dir.path().to_string_lossy()));
}
