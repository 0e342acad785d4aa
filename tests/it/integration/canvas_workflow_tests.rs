//! Canvas Workflow Integration Tests

use emojiart::document::{DocumentCommand, EmojiArtModel, SharedDocument};
use emojiart::geometry::{Offset, offset, point, size};
use emojiart::palette::Palette;
use emojiart::settings::Settings;
use emojiart::types::DropPayload;
use emojiart::view::CanvasView;
use std::time::Duration;

use crate::helpers::{TestDocumentBuilder, empty_document, view, viewport};

#[test]
fn test_palette_drag_onto_canvas() {
    let palette = Palette::new(["🐶", "🌲"]);
    let mut doc = empty_document();
    let mut view = view();

    let payload = palette.drag_payload(1).unwrap();
    assert!(view.drop_payloads(&mut doc, &[payload], point(460.0, 260.0)));

    let emoji = &doc.emojis()[0];
    assert_eq!(emoji.text, "🌲");
    assert_eq!(emoji.location, point(60.0, -40.0));
    assert_eq!(emoji.size, 40.0);
}

#[test]
fn test_url_drop_never_adds_emojis() {
    let mut model = TestDocumentBuilder::new().build_recording();
    let mut view = view();

    let payloads = [
        DropPayload::Text("🐶".into()),
        DropPayload::Url("https://example.com/first.jpg".into()),
        DropPayload::Url("https://example.com/second.jpg".into()),
    ];
    assert!(view.drop_payloads(&mut model, &payloads, point(0.0, 0.0)));

    assert_eq!(
        model.take_commands(),
        vec![DocumentCommand::SetBackground {
            url: "https://example.com/first.jpg".into()
        }]
    );
}

#[test]
fn test_multiple_text_drops_share_location() {
    let mut doc = empty_document();
    let mut view = view();

    let payloads = [DropPayload::Text("🐶".into()), DropPayload::Text("🐱".into())];
    view.drop_payloads(&mut doc, &payloads, point(400.0, 300.0));

    assert_eq!(doc.emojis().len(), 2);
    assert!(doc.emojis().iter().all(|e| e.location == point(0.0, 0.0)));
}

#[test]
fn test_pinch_semantics_follow_selection() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();

    view.pinch_ended(&mut doc, 1.5);
    assert_eq!(view.state().steady_zoom(), 1.5);
    assert_eq!(doc.get_emoji(1).unwrap().size, 40.0);

    view.tap(&doc, point(400.0, 300.0));
    view.pinch_ended(&mut doc, 1.5);
    assert_eq!(view.state().steady_zoom(), 1.5);
    assert_eq!(doc.get_emoji(1).unwrap().size, 60.0);
}

#[test]
fn test_selection_at_pinch_start_is_kept() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();

    view.pinch_changed(1.1);
    view.tap(&doc, point(400.0, 300.0));
    view.pinch_ended(&mut doc, 2.0);

    assert_eq!(view.state().steady_zoom(), 2.0);
    assert_eq!(doc.get_emoji(1).unwrap().size, 40.0);
}

#[test]
fn test_pinch_commits_exact_product() {
    let mut doc = empty_document();
    let mut view = view();

    view.pinch_ended(&mut doc, 4.0);
    view.pinch_changed(50.0);
    assert_eq!(view.effective_zoom(), 200.0);

    view.pinch_ended(&mut doc, 50.0);
    assert_eq!(view.state().steady_zoom(), 200.0);
    assert_eq!(view.effective_zoom(), 200.0);
}

#[test]
fn test_zoom_to_fit_tiny_background_is_exact() {
    let doc = TestDocumentBuilder::new().with_background("icon.png", (4.0, 3.0)).build();
    let mut view = view();

    assert!(view.zoom_to_fit(&doc));
    assert_eq!(view.state().steady_zoom(), 200.0);
}

#[test]
fn test_invalid_pinch_changes_nothing() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();
    view.pinch_changed(0.0);
    view.pinch_ended(&mut doc, -1.0);
    assert_eq!(view.state().steady_zoom(), 1.0);

    view.tap(&doc, point(400.0, 300.0));
    view.pinch_ended(&mut doc, f32::NAN);
    assert_eq!(doc.get_emoji(1).unwrap().size, 40.0);
}

#[test]
fn test_zero_drag_issues_no_move() {
    let mut model = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build_recording();
    let mut view = view();
    view.drag_ended(&mut model, point(400.0, 300.0), Offset::ZERO);
    assert!(model.take_commands().is_empty());
}

#[test]
fn test_pan_then_drop_uses_current_transform() {
    let mut doc = empty_document();
    let mut view = view();
    view.pinch_ended(&mut doc, 2.0);
    view.drag_ended(&mut doc, point(0.0, 0.0), offset(100.0, 0.0));

    view.drop_payloads(&mut doc, &[DropPayload::Text("🐶".into())], point(500.0, 300.0));

    // Pan is 50 document units; the drop lands on the old origin
    assert_eq!(view.state().steady_pan(), offset(50.0, 0.0));
    assert_eq!(doc.emojis()[0].location, point(0.0, 0.0));
}

#[test]
fn test_zoom_to_fit_after_background_loads() {
    let mut doc = TestDocumentBuilder::new().with_pending_background("bg.png").build();
    let mut view = view();

    view.drag_ended(&mut doc, point(0.0, 0.0), offset(10.0, 10.0));
    assert!(!view.double_tap(&doc, point(0.0, 0.0)));

    doc.set_background_size("bg.png", size(400.0, 300.0));
    assert!(view.double_tap(&doc, point(0.0, 0.0)));
    assert_eq!(view.state().steady_zoom(), 2.0);
    assert_eq!(view.state().steady_pan(), Offset::ZERO);
}

#[test]
fn test_double_tap_on_emoji_keeps_transform() {
    let doc = TestDocumentBuilder::new()
        .with_emoji("🐶", (0.0, 0.0))
        .with_background("bg.png", (400.0, 300.0))
        .build();
    let mut view = view();
    assert!(!view.double_tap(&doc, point(400.0, 300.0)));
    assert_eq!(view.state().steady_zoom(), 1.0);
}

#[test]
fn test_long_press_uses_configured_duration() {
    let settings = Settings {
        long_press_ms: 500,
        ..Settings::default()
    };
    let mut doc = TestDocumentBuilder::new().with_emoji_row(&["🐶", "🐱"]).build();
    let mut view = CanvasView::with_settings(viewport(), &settings);

    view.press_began(&doc, point(500.0, 300.0));
    view.press_held(&mut doc, Duration::from_millis(500));
    view.press_held(&mut doc, Duration::from_millis(900));
    view.press_ended();

    let ids: Vec<_> = doc.emojis().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_long_press_on_background_removes_nothing() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();
    view.press_began(&doc, point(10.0, 10.0));
    view.press_held(&mut doc, Duration::from_secs(5));
    assert_eq!(doc.emojis().len(), 1);
}

#[test]
fn test_render_tracks_in_flight_gestures() {
    let doc = TestDocumentBuilder::new()
        .with_emoji("🐶", (0.0, 0.0))
        .with_background("bg.png", (400.0, 300.0))
        .build();
    let mut view = view();

    view.pinch_changed(2.0);
    let frame = view.render(&doc.snapshot());
    let background = frame.background.as_ref().unwrap();
    assert_eq!(background.scale, 2.0);
    assert_eq!(background.displayed_size, size(800.0, 600.0));
    assert_eq!(frame.emoji(1).unwrap().font_size, 80.0);

    view.cancel_gestures();
    view.drag_changed(&doc, point(10.0, 10.0), offset(30.0, 0.0));
    let frame = view.render(&doc.snapshot());
    assert_eq!(frame.background.unwrap().center, point(430.0, 300.0));
    assert_eq!(frame.emojis[0].position, point(430.0, 300.0));
}

#[test]
fn test_selected_flag_in_render() {
    let doc = TestDocumentBuilder::new().with_emoji_row(&["🐶", "🐱"]).build();
    let mut view = view();
    view.tap(&doc, point(500.0, 300.0));

    let frame = view.render(&doc.snapshot());
    assert!(!frame.emoji(1).unwrap().selected);
    assert!(frame.emoji(2).unwrap().selected);
}

#[test]
fn test_view_over_shared_document() {
    let mut shared = SharedDocument::new(TestDocumentBuilder::new().with_pending_background("bg.png").build());
    let loader = shared.clone();
    let mut view = view();

    view.drop_payloads(&mut shared, &[DropPayload::Text("🐶".into())], point(400.0, 300.0));
    std::thread::spawn(move || {
        loader.with(|doc| doc.set_background_size("bg.png", size(1600.0, 1200.0)));
    })
    .join()
    .unwrap();

    assert!(view.zoom_to_fit(&shared));
    assert_eq!(view.state().steady_zoom(), 0.5);
    assert_eq!(shared.snapshot().emojis.len(), 1);
}
