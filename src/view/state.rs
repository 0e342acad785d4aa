//! View state - everything the canvas remembers between gestures.
//!
//! Steady zoom, steady pan and the selection live here in one struct that the
//! gesture interpreters receive by reference. In-flight gesture values are
//! deliberately absent; each interpreter owns its own.

use crate::constants::DEFAULT_ZOOM;
use crate::geometry::{Offset, Size};
use crate::selection::SelectionSet;
use tracing::warn;

/// Committed zoom and pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Last committed zoom, always finite and positive
    pub steady_zoom: f32,
    /// Last committed pan in document units
    pub steady_pan: Offset,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            steady_zoom: DEFAULT_ZOOM,
            steady_pan: Offset::ZERO,
        }
    }
}

/// Canvas view state for the lifetime of the view.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub transform: TransformState,
    pub selection: SelectionSet,
    pub viewport: Size,
}

impl ViewState {
    pub fn new(viewport: Size) -> Self {
        Self {
            transform: TransformState::default(),
            selection: SelectionSet::new(),
            viewport,
        }
    }

    #[inline]
    pub fn steady_zoom(&self) -> f32 {
        self.transform.steady_zoom
    }

    #[inline]
    pub fn steady_pan(&self) -> Offset {
        self.transform.steady_pan
    }

    /// Commit a new steady zoom.
    ///
    /// Non-positive and non-finite values are rejected so the zoom can never
    /// reach zero. Returns whether the zoom was accepted.
    pub fn commit_zoom(&mut self, zoom: f32) -> bool {
        if !(zoom.is_finite() && zoom > 0.0) {
            warn!(zoom, "Rejecting invalid zoom");
            return false;
        }
        self.transform.steady_zoom = zoom;
        true
    }

    /// Add a document-space delta to the steady pan.
    pub fn commit_pan_delta(&mut self, delta: Offset) {
        self.transform.steady_pan += delta;
    }

    /// Replace zoom and pan in one step.
    pub fn commit_transform(&mut self, zoom: f32, pan: Offset) -> bool {
        if !(zoom.is_finite() && zoom > 0.0) {
            warn!(zoom, "Rejecting invalid zoom");
            return false;
        }
        self.transform = TransformState {
            steady_zoom: zoom,
            steady_pan: pan,
        };
        true
    }
}
