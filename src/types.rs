//! Core types for the EmojiArt canvas.
//!
//! This module defines the data the view reads from the document model
//! (emojis and the background image) and the payloads a drop can carry.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Identifier of an emoji, unique within one document.
pub type EmojiId = u64;

/// An emoji glyph placed on the canvas.
///
/// Positions and sizes are in document space. The view never mutates these
/// directly; every change goes through a `DocumentCommand`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    /// Unique identifier for this emoji
    pub id: EmojiId,
    /// The glyph (may be several code points, e.g. flags or ZWJ sequences)
    pub text: String,
    /// Center of the glyph in document coordinates
    pub location: Point,
    /// Base font size in document units
    pub size: f32,
}

impl Emoji {
    /// Half the side of the square hit box around `location`.
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

/// The image drawn behind all emojis.
///
/// Dimensions are filled in by whoever loads the image; until then, or when
/// the image turns out to be degenerate, they may be zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Where the image was dropped from
    pub url: String,
    /// Pixel dimensions
    pub size: Size,
}

impl BackgroundImage {
    pub fn has_extent(&self) -> bool {
        !self.size.is_empty()
    }
}

/// One item offered by a drag-and-drop session.
///
/// Providers arrive in the order the platform supplied them; the drop handler
/// relies on that order when picking the first URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DropPayload {
    /// A reference to an external image resource
    Url(String),
    /// Plain text, treated as an emoji glyph
    Text(String),
    /// Anything else (files, rich text, ...), identified by its type id
    Unsupported(String),
}

impl DropPayload {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            DropPayload::Url(url) if !url.trim().is_empty() => Some(url),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DropPayload::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}
