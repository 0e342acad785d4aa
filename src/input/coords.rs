//! Coordinate conversion between document space and screen space.
//!
//! The forward transform scales a document point by the zoom, moves the
//! document origin to the center of the viewport, then translates by the pan
//! (stored in document units, so it is scaled by the zoom as well):
//!
//! ```text
//! screen = doc * zoom + viewport / 2 + pan * zoom
//! doc    = (screen - viewport / 2 - pan * zoom) / zoom
//! ```

use crate::geometry::{Offset, Point, Size, point};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateContext {
    /// Effective zoom, strictly positive
    pub zoom: f32,
    /// Effective pan in document units
    pub pan: Offset,
    /// Size of the rendered viewport
    pub viewport: Size,
}

impl CoordinateContext {
    #[inline]
    pub fn new(zoom: f32, pan: Offset, viewport: Size) -> Self {
        Self {
            zoom,
            pan,
            viewport,
        }
    }

    /// Pan expressed in screen pixels.
    #[inline]
    pub fn screen_pan(&self) -> Offset {
        self.pan * self.zoom
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a document position to a screen position
    #[inline]
    pub fn document_to_screen(doc_pos: Point, ctx: &CoordinateContext) -> Point {
        doc_pos.scale(ctx.zoom) + ctx.viewport.half() + ctx.screen_pan()
    }

    /// Convert a screen position to a document position
    #[inline]
    pub fn screen_to_document(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        let centered = screen_pos - ctx.viewport.half() - ctx.screen_pan();
        point(centered.x / ctx.zoom, centered.y / ctx.zoom)
    }

    /// Convert a delta from screen to document (for drag operations)
    #[inline]
    pub fn delta_screen_to_document(delta: Offset, zoom: f32) -> Offset {
        delta / zoom
    }

    /// Convert a delta from document to screen
    #[inline]
    pub fn delta_document_to_screen(delta: Offset, zoom: f32) -> Offset {
        delta * zoom
    }
}
