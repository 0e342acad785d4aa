//! Pinch gesture - canvas zoom or selected-emoji scaling.
//!
//! The same physical gesture has two meanings, picked once when the gesture
//! starts: with an empty selection it zooms the whole canvas, otherwise it
//! scales every selected emoji and leaves the canvas zoom alone.

use super::state::GesturePhase;
use crate::document::DocumentCommand;
use crate::types::EmojiId;
use crate::view::ViewState;
use tracing::{debug, trace, warn};

/// What a pinch acts on.
#[derive(Clone, Debug, PartialEq)]
pub enum ZoomTarget {
    /// Global canvas zoom
    Canvas,
    /// Per-emoji scale of the emojis selected at gesture start
    Selection(Vec<EmojiId>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTracking {
    pub target: ZoomTarget,
    /// Latest magnification ratio, 1.0 = unchanged
    pub magnification: f32,
}

#[derive(Debug, Default)]
pub struct ZoomGesture {
    phase: GesturePhase<ZoomTracking>,
}

fn is_valid_magnification(magnification: f32) -> bool {
    magnification.is_finite() && magnification > 0.0
}

impl ZoomGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &GesturePhase<ZoomTracking> {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_tracking()
    }

    fn target_for(state: &ViewState) -> ZoomTarget {
        if state.selection.is_empty() {
            ZoomTarget::Canvas
        } else {
            ZoomTarget::Selection(state.selection.sorted_ids())
        }
    }

    /// Feed one magnification sample.
    ///
    /// The first sample decides the target. Non-positive or non-finite
    /// samples are dropped and the previous value kept.
    pub fn changed(&mut self, state: &ViewState, magnification: f32) {
        if !is_valid_magnification(magnification) {
            warn!(magnification, "Ignoring invalid pinch sample");
            return;
        }
        match self.phase.tracking_mut() {
            Some(tracking) => tracking.magnification = magnification,
            None => self.phase.begin(ZoomTracking {
                target: Self::target_for(state),
                magnification,
            }),
        }
        trace!(magnification, "Pinch changed");
    }

    /// Finish the gesture with its final ratio.
    ///
    /// Canvas pinches are committed straight into `state`; selection pinches
    /// come back as one `ScaleEmoji` command per emoji.
    pub fn ended(&mut self, state: &mut ViewState, magnification: f32) -> Vec<DocumentCommand> {
        let target = match self.phase.take() {
            Some(tracking) => tracking.target,
            None => Self::target_for(state),
        };
        if !is_valid_magnification(magnification) {
            warn!(magnification, "Dropping pinch with invalid final ratio");
            return Vec::new();
        }

        match target {
            ZoomTarget::Canvas => {
                let zoom = state.steady_zoom() * magnification;
                state.commit_zoom(zoom);
                debug!(magnification, zoom = state.steady_zoom(), "Committed canvas zoom");
                Vec::new()
            }
            ZoomTarget::Selection(ids) => {
                debug!(magnification, count = ids.len(), "Scaling selected emojis");
                ids.into_iter()
                    .map(|id| DocumentCommand::ScaleEmoji { id, by: magnification })
                    .collect()
            }
        }
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        self.phase.reset();
    }

    /// In-flight ratio applied to the canvas zoom (1.0 unless a canvas pinch
    /// is running).
    pub fn canvas_magnification(&self) -> f32 {
        match self.phase.tracking() {
            Some(ZoomTracking {
                target: ZoomTarget::Canvas,
                magnification,
            }) => *magnification,
            _ => 1.0,
        }
    }

    /// In-flight ratio applied to one emoji (1.0 unless it is being scaled).
    pub fn emoji_magnification(&self, id: EmojiId) -> f32 {
        match self.phase.tracking() {
            Some(ZoomTracking {
                target: ZoomTarget::Selection(ids),
                magnification,
            }) if ids.contains(&id) => *magnification,
            _ => 1.0,
        }
    }
}
