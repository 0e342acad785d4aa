//! Hit testing through the view, including zoom and pan.

use emojiart::geometry::{offset, point};
use emojiart::view::HitTarget;

use crate::helpers::{TestDocumentBuilder, view};

#[test]
fn test_hit_box_is_emoji_size() {
    let doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();

    assert_eq!(view.hit_test(&doc, point(419.0, 300.0)), HitTarget::Emoji(1));
    assert_eq!(view.hit_test(&doc, point(421.0, 300.0)), HitTarget::Background);
}

#[test]
fn test_overlapping_emojis_pick_topmost() {
    let doc = TestDocumentBuilder::new()
        .with_emoji("🐶", (0.0, 0.0))
        .with_emoji("🐱", (10.0, 0.0))
        .build();
    let mut view = view();

    assert_eq!(view.hit_test(&doc, point(405.0, 300.0)), HitTarget::Emoji(2));
    assert_eq!(view.hit_test(&doc, point(385.0, 300.0)), HitTarget::Emoji(1));
}

#[test]
fn test_hit_follows_pan() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();

    // Pan the canvas 100px right by dragging the background
    view.drag_ended(&mut doc, point(10.0, 10.0), offset(100.0, 0.0));

    assert_eq!(view.hit_test(&doc, point(400.0, 300.0)), HitTarget::Background);
    assert_eq!(view.hit_test(&doc, point(500.0, 300.0)), HitTarget::Emoji(1));
}

#[test]
fn test_hit_box_grows_with_zoom() {
    let mut doc = TestDocumentBuilder::new().with_emoji("🐶", (0.0, 0.0)).build();
    let mut view = view();
    view.pinch_ended(&mut doc, 2.0);

    assert_eq!(view.hit_test(&doc, point(435.0, 300.0)), HitTarget::Emoji(1));
    assert_eq!(view.hit_test(&doc, point(445.0, 300.0)), HitTarget::Background);
}
