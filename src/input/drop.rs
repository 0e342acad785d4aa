//! Drag-and-drop onto the canvas.
//!
//! A URL payload sets the background and ends the drop. Without one, every
//! text payload becomes a new emoji at the drop location.

use super::coords::{CoordinateContext, CoordinateConverter};
use crate::document::DocumentCommand;
use crate::geometry::Point;
use crate::types::DropPayload;
use tracing::debug;

/// Result of resolving a drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropOutcome {
    pub commands: Vec<DocumentCommand>,
    /// Document-space drop location
    pub location: Point,
}

impl DropOutcome {
    /// Whether any payload was used. The UI shows a rejection indicator when
    /// this is false.
    pub fn consumed(&self) -> bool {
        !self.commands.is_empty()
    }
}

/// Turn payloads dropped at `screen_location` into document commands.
pub fn resolve_drop(
    payloads: &[DropPayload],
    screen_location: Point,
    ctx: &CoordinateContext,
    default_size: f32,
) -> DropOutcome {
    let location = CoordinateConverter::screen_to_document(screen_location, ctx);

    if let Some(url) = payloads.iter().find_map(DropPayload::as_url) {
        debug!(url, "Drop resolved to background image");
        return DropOutcome {
            commands: vec![DocumentCommand::SetBackground { url: url.to_string() }],
            location,
        };
    }

    let commands: Vec<DocumentCommand> = payloads
        .iter()
        .filter_map(DropPayload::as_text)
        .map(|text| DocumentCommand::AddEmoji {
            text: text.to_string(),
            location,
            size: default_size,
        })
        .collect();

    debug!(
        added = commands.len(),
        offered = payloads.len(),
        x = location.x,
        y = location.y,
        "Drop resolved to emojis"
    );
    DropOutcome { commands, location }
}
