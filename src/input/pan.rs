//! Background drag - canvas panning.
//!
//! Translations arrive in screen pixels and are divided by the zoom at the
//! time of the sample, so the canvas moves under the finger at the same speed
//! whatever the zoom level.

use super::coords::CoordinateConverter;
use super::state::GesturePhase;
use crate::geometry::Offset;
use crate::view::ViewState;
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct PanGesture {
    /// In-flight pan in document units
    phase: GesturePhase<Offset>,
}

impl PanGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_tracking()
    }

    /// Feed the total translation since the gesture began.
    pub fn changed(&mut self, translation: Offset, zoom: f32) {
        let delta = CoordinateConverter::delta_screen_to_document(translation, zoom);
        match self.phase.tracking_mut() {
            Some(current) => *current = delta,
            None => self.phase.begin(delta),
        }
        trace!(x = delta.x, y = delta.y, "Pan changed");
    }

    /// Commit the final translation into the steady pan.
    pub fn ended(&mut self, state: &mut ViewState, translation: Offset, zoom: f32) {
        self.phase.reset();
        let delta = CoordinateConverter::delta_screen_to_document(translation, zoom);
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }
        state.commit_pan_delta(delta);
        let pan = state.steady_pan();
        debug!(x = pan.x, y = pan.y, "Committed pan");
    }

    pub fn cancel(&mut self) {
        self.phase.reset();
    }

    /// In-flight pan to add to the steady pan for preview.
    pub fn preview_offset(&self) -> Offset {
        self.phase.tracking().copied().unwrap_or(Offset::ZERO)
    }
}
