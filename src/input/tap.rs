//! Taps and long presses.
//!
//! - single tap on an emoji toggles it in the selection
//! - single tap on the background clears the selection
//! - long press on an emoji removes it once the hold passes the threshold

use super::state::GesturePhase;
use crate::document::DocumentCommand;
use crate::types::EmojiId;
use crate::view::ViewState;
use std::time::Duration;
use tracing::debug;

/// Toggle `id` in the selection.
pub fn tap_emoji(state: &mut ViewState, id: EmojiId) {
    let selected = state.selection.toggle(id);
    debug!(id, selected, "Tapped emoji");
}

/// Clear the selection, whatever it held.
pub fn tap_background(state: &mut ViewState) {
    if !state.selection.is_empty() {
        debug!(count = state.selection.len(), "Clearing selection");
    }
    state.selection.clear();
}

#[derive(Clone, Debug, PartialEq)]
struct Press {
    item: EmojiId,
    fired: bool,
}

/// Long press on an emoji. Fires at most once per press.
#[derive(Debug)]
pub struct LongPressGesture {
    minimum_duration: Duration,
    phase: GesturePhase<Press>,
}

impl Default for LongPressGesture {
    fn default() -> Self {
        Self::new(crate::constants::LONG_PRESS_DURATION)
    }
}

impl LongPressGesture {
    pub fn new(minimum_duration: Duration) -> Self {
        Self {
            minimum_duration,
            phase: GesturePhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_tracking()
    }

    /// Finger went down on `item`.
    pub fn pressed(&mut self, item: EmojiId) {
        self.phase.begin(Press { item, fired: false });
    }

    /// The press has been held for `elapsed`. Returns the remove command the
    /// first time the threshold is reached.
    pub fn held(&mut self, elapsed: Duration) -> Option<DocumentCommand> {
        let press = self.phase.tracking_mut()?;
        if press.fired || elapsed < self.minimum_duration {
            return None;
        }
        press.fired = true;
        debug!(id = press.item, elapsed_ms = elapsed.as_millis() as u64, "Long press fired");
        Some(DocumentCommand::RemoveEmoji { id: press.item })
    }

    /// Finger lifted or moved away.
    pub fn released(&mut self) {
        self.phase.reset();
    }
}
