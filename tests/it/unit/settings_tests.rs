//! Settings loading tests.

use emojiart::settings::{Settings, SettingsError};
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        default_emoji_size: 64.0,
        long_press_ms: 750,
        palette: vec!["🐙".into(), "🦑".into()],
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.long_press_duration().as_millis(), 750);
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "long_press_ms": 800 }"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.long_press_ms, 800);
    assert_eq!(settings.default_emoji_size, 40.0);
}
