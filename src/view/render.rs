//! Render pass - screen-space layout of the current document.
//!
//! Nothing here is drawn; the output is the positions and sizes a toolkit
//! needs to draw the frame. It is recomputed from the document snapshot on
//! every redraw, so committed state always comes from the document.

use super::CanvasView;
use crate::document::DocumentSnapshot;
use crate::geometry::{Offset, Point, Size, size};
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::EmojiId;
use serde::Serialize;
use tracing::trace;

/// One emoji, ready to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedEmoji {
    pub id: EmojiId,
    pub text: String,
    /// Screen-space center of the glyph
    pub position: Point,
    /// Font size in screen pixels
    pub font_size: f32,
    /// Drawn with a highlight
    pub selected: bool,
}

/// The background image, ready to draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedBackground {
    pub url: String,
    /// Screen-space center of the image
    pub center: Point,
    /// Scale applied to the image's pixel size
    pub scale: f32,
    /// Displayed size in screen pixels
    pub displayed_size: Size,
}

/// A full frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderedCanvas {
    pub background: Option<RenderedBackground>,
    /// Back to front
    pub emojis: Vec<RenderedEmoji>,
}

impl RenderedCanvas {
    pub fn emoji(&self, id: EmojiId) -> Option<&RenderedEmoji> {
        self.emojis.iter().find(|e| e.id == id)
    }
}

impl CanvasView {
    /// Zoom used for an emoji's font size. Emojis being pinched use the
    /// steady zoom times their in-flight ratio; everything else follows the
    /// canvas.
    pub fn zoom_for_emoji(&self, id: EmojiId) -> f32 {
        // A selection pinch leaves the canvas at steady zoom, so at most one
        // of the two factors differs from 1.
        self.effective_zoom() * self.zoom.emoji_magnification(id)
    }

    /// Lay out `snapshot` for the current view state.
    pub fn render(&self, snapshot: &DocumentSnapshot) -> RenderedCanvas {
        profile_scope!("render");

        let ctx = self.coordinate_context();
        let background = snapshot.background.as_ref().map(|bg| RenderedBackground {
            url: bg.url.clone(),
            center: CoordinateConverter::document_to_screen(Point::ORIGIN, &ctx),
            scale: ctx.zoom,
            displayed_size: size(bg.size.width * ctx.zoom, bg.size.height * ctx.zoom),
        });

        let emojis: Vec<RenderedEmoji> = snapshot
            .emojis
            .iter()
            .map(|emoji| {
                let drag: Offset = CoordinateConverter::delta_document_to_screen(
                    self.drag.preview_offset(emoji.id),
                    ctx.zoom,
                );
                RenderedEmoji {
                    id: emoji.id,
                    text: emoji.text.clone(),
                    position: CoordinateConverter::document_to_screen(emoji.location, &ctx) + drag,
                    font_size: emoji.size * self.zoom_for_emoji(emoji.id),
                    selected: self.state.selection.contains(emoji.id),
                }
            })
            .collect();

        trace!(emojis = emojis.len(), zoom = ctx.zoom, "Rendered canvas");
        RenderedCanvas { background, emojis }
    }
}
