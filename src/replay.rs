//! Scripted gesture sessions.
//!
//! A script is a viewport plus a list of gesture events in JSON. Replaying it
//! drives a `CanvasView` against a fresh document, which is how the binary
//! and the integration tests exercise whole interactions without a UI.
//!
//! ```json
//! {
//!   "viewport": { "width": 800.0, "height": 600.0 },
//!   "events": [
//!     { "event": "drop", "at": { "x": 400.0, "y": 300.0 },
//!       "payloads": [{ "kind": "text", "value": "🐶" }] },
//!     { "event": "pinch_ended", "magnification": 2.0 }
//!   ]
//! }
//! ```

use crate::document::{DocumentSnapshot, EmojiArtDocument, EmojiArtModel};
use crate::geometry::{Offset, Point, Size};
use crate::settings::Settings;
use crate::types::{DropPayload, EmojiId};
use crate::view::CanvasView;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// One gesture event, in screen coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    Tap {
        at: Point,
    },
    DoubleTap {
        at: Point,
    },
    PinchChanged {
        magnification: f32,
    },
    PinchEnded {
        magnification: f32,
    },
    DragChanged {
        start: Point,
        translation: Offset,
    },
    DragEnded {
        start: Point,
        translation: Offset,
    },
    /// Press at `at`, held for `held_ms`, then released
    LongPress {
        at: Point,
        held_ms: u64,
    },
    Drop {
        at: Point,
        payloads: Vec<DropPayload>,
    },
    ZoomToFit,
    /// The image loader finished fetching `url`
    BackgroundLoaded {
        url: String,
        size: Size,
    },
    Resize {
        viewport: Size,
    },
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub viewport: Size,
    #[serde(default)]
    pub events: Vec<GestureEvent>,
}

/// Final state of a replayed session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplayReport {
    pub document: DocumentSnapshot,
    pub zoom: f32,
    pub pan: Offset,
    pub selection: Vec<EmojiId>,
}

/// Replay `script` against an empty document.
pub fn run(script: &ReplayScript, settings: &Settings) -> ReplayReport {
    let mut document = EmojiArtDocument::new();
    let mut view = CanvasView::with_settings(script.viewport, settings);

    for event in &script.events {
        debug!(?event, "Replaying");
        apply_event(&mut view, &mut document, event);
    }

    let report = ReplayReport {
        document: document.snapshot(),
        zoom: view.state().steady_zoom(),
        pan: view.state().steady_pan(),
        selection: view.selection().sorted_ids(),
    };
    info!(
        events = script.events.len(),
        emojis = report.document.emojis.len(),
        "Replay finished"
    );
    report
}

fn apply_event(view: &mut CanvasView, document: &mut EmojiArtDocument, event: &GestureEvent) {
    match event {
        GestureEvent::Tap { at } => view.tap(&*document, *at),
        GestureEvent::DoubleTap { at } => {
            view.double_tap(&*document, *at);
        }
        GestureEvent::PinchChanged { magnification } => view.pinch_changed(*magnification),
        GestureEvent::PinchEnded { magnification } => view.pinch_ended(document, *magnification),
        GestureEvent::DragChanged { start, translation } => {
            view.drag_changed(&*document, *start, *translation)
        }
        GestureEvent::DragEnded { start, translation } => {
            view.drag_ended(document, *start, *translation)
        }
        GestureEvent::LongPress { at, held_ms } => {
            view.press_began(&*document, *at);
            view.press_held(document, Duration::from_millis(*held_ms));
            view.press_ended();
        }
        GestureEvent::Drop { at, payloads } => {
            view.drop_payloads(document, payloads, *at);
        }
        GestureEvent::ZoomToFit => {
            view.zoom_to_fit(&*document);
        }
        GestureEvent::BackgroundLoaded { url, size } => {
            document.set_background_size(url, *size);
        }
        GestureEvent::Resize { viewport } => view.set_viewport(*viewport),
        GestureEvent::Cancel => view.cancel_gestures(),
    }
}
