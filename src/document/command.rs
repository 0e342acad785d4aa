//! Commands the view sends to the document model.
//!
//! Gesture interpreters return these as plain values instead of calling the
//! model directly, so a whole gesture can be inspected, logged or replayed
//! before anything is dispatched.

use crate::geometry::{Offset, Point};
use crate::types::EmojiId;
use serde::{Deserialize, Serialize};

/// A mutation request for the document model.
///
/// All geometry is in document space. Moves and scales are relative so they
/// compose with whatever the document already holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DocumentCommand {
    /// Replace the background with the image at `url`
    SetBackground { url: String },
    /// Place a new emoji centered at `location`
    AddEmoji {
        text: String,
        location: Point,
        size: f32,
    },
    /// Translate an emoji by `by`
    MoveEmoji { id: EmojiId, by: Offset },
    /// Multiply an emoji's size by `by`
    ScaleEmoji { id: EmojiId, by: f32 },
    /// Delete an emoji
    RemoveEmoji { id: EmojiId },
}

impl DocumentCommand {
    /// Short name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCommand::SetBackground { .. } => "set_background",
            DocumentCommand::AddEmoji { .. } => "add_emoji",
            DocumentCommand::MoveEmoji { .. } => "move_emoji",
            DocumentCommand::ScaleEmoji { .. } => "scale_emoji",
            DocumentCommand::RemoveEmoji { .. } => "remove_emoji",
        }
    }

    /// The emoji this command targets, if any.
    pub fn target(&self) -> Option<EmojiId> {
        match self {
            DocumentCommand::MoveEmoji { id, .. }
            | DocumentCommand::ScaleEmoji { id, .. }
            | DocumentCommand::RemoveEmoji { id } => Some(*id),
            DocumentCommand::SetBackground { .. } | DocumentCommand::AddEmoji { .. } => None,
        }
    }
}
