//! Emoji dragging.
//!
//! A drag that starts on an emoji moves that emoji alone, selected or not.
//! While the finger is down only its rendered position changes; on release
//! the document gets one relative `MoveEmoji` in document units.

use super::coords::CoordinateConverter;
use super::state::GesturePhase;
use crate::document::DocumentCommand;
use crate::geometry::Offset;
use crate::types::EmojiId;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq)]
pub struct ItemDrag {
    /// Emoji under the finger when the drag began
    pub item: EmojiId,
    /// In-flight translation in document units
    pub offset: Offset,
}

#[derive(Debug, Default)]
pub struct ItemDragGesture {
    phase: GesturePhase<ItemDrag>,
}

impl ItemDragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_tracking()
    }

    /// Start dragging `item`.
    pub fn begin(&mut self, item: EmojiId) {
        debug!(item, "Emoji drag started");
        self.phase.begin(ItemDrag {
            item,
            offset: Offset::ZERO,
        });
    }

    /// Feed the total translation since the drag began. No-op when idle.
    pub fn changed(&mut self, translation: Offset, zoom: f32) {
        if let Some(drag) = self.phase.tracking_mut() {
            drag.offset = CoordinateConverter::delta_screen_to_document(translation, zoom);
            trace!(item = drag.item, x = drag.offset.x, y = drag.offset.y, "Emoji drag changed");
        }
    }

    /// Finish the drag, returning the move command if the emoji moved.
    pub fn ended(&mut self, translation: Offset, zoom: f32) -> Option<DocumentCommand> {
        let drag = self.phase.take()?;
        let by = CoordinateConverter::delta_screen_to_document(translation, zoom);
        if by.is_zero() || !(by.x.is_finite() && by.y.is_finite()) {
            return None;
        }
        debug!(item = drag.item, x = by.x, y = by.y, "Emoji drag committed");
        Some(DocumentCommand::MoveEmoji { id: drag.item, by })
    }

    pub fn cancel(&mut self) {
        self.phase.reset();
    }

    /// In-flight document-space offset for `id` (zero if it is not moving).
    pub fn preview_offset(&self, id: EmojiId) -> Offset {
        match self.phase.tracking() {
            Some(drag) if drag.item == id => drag.offset,
            _ => Offset::ZERO,
        }
    }
}
