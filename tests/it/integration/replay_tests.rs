//! Replay of scripted sessions.

use emojiart::geometry::point;
use emojiart::replay::{self, ReplayScript};
use emojiart::settings::Settings;
use tempfile::TempDir;

const SESSION: &str = r#"{
    "viewport": { "width": 800.0, "height": 600.0 },
    "events": [
        { "event": "drop", "at": { "x": 0.0, "y": 0.0 },
          "payloads": [{ "kind": "url", "value": "beach.jpg" }] },
        { "event": "background_loaded", "url": "beach.jpg",
          "size": { "width": 400.0, "height": 300.0 } },
        { "event": "double_tap", "at": { "x": 10.0, "y": 10.0 } },
        { "event": "drop", "at": { "x": 400.0, "y": 300.0 },
          "payloads": [{ "kind": "text", "value": "🐶" }] },
        { "event": "drop", "at": { "x": 480.0, "y": 300.0 },
          "payloads": [{ "kind": "text", "value": "🌞" }] },
        { "event": "tap", "at": { "x": 400.0, "y": 300.0 } },
        { "event": "pinch_changed", "magnification": 1.5 },
        { "event": "pinch_ended", "magnification": 2.0 },
        { "event": "drag_changed", "start": { "x": 480.0, "y": 300.0 },
          "translation": { "x": 10.0, "y": 0.0 } },
        { "event": "drag_ended", "start": { "x": 480.0, "y": 300.0 },
          "translation": { "x": 20.0, "y": 40.0 } },
        { "event": "long_press", "at": { "x": 400.0, "y": 300.0 }, "held_ms": 2500 }
    ]
}"#;

#[test]
fn test_full_session() {
    let script: ReplayScript = serde_json::from_str(SESSION).unwrap();
    let report = replay::run(&script, &Settings::default());

    assert_eq!(report.zoom, 2.0);
    assert_eq!(report.document.background.as_ref().unwrap().url, "beach.jpg");

    // The dog was scaled then long-pressed away; the sun was dragged
    let emojis = &report.document.emojis;
    assert_eq!(emojis.len(), 1);
    assert_eq!(emojis[0].text, "🌞");
    assert_eq!(emojis[0].location, point(50.0, 20.0));
    assert!(report.selection.is_empty());
}

#[test]
fn test_script_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, SESSION).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let script: ReplayScript = serde_json::from_str(&contents).unwrap();
    assert_eq!(script.events.len(), 11);
}

#[test]
fn test_empty_script() {
    let script: ReplayScript =
        serde_json::from_str(r#"{ "viewport": { "width": 100.0, "height": 100.0 } }"#).unwrap();
    let report = replay::run(&script, &Settings::default());
    assert!(report.document.emojis.is_empty());
    assert_eq!(report.zoom, 1.0);
}
