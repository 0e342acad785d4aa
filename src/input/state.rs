//! Per-gesture state machine.
//!
//! Every gesture interpreter owns one `GesturePhase`. In-flight values live in
//! the `Tracking` payload and are never visible to other interpreters.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Tracking        (first sample of a gesture)
//! Tracking -> Tracking    (further samples replace the payload)
//! Tracking -> Idle        (gesture end: payload is taken and committed)
//! Tracking -> Idle        (cancel: payload is dropped, nothing commits)
//! ```

/// Phase of a single gesture recognizer.
#[derive(Debug, Clone, PartialEq)]
pub enum GesturePhase<T> {
    /// No gesture in progress
    Idle,
    /// Gesture in progress with its in-flight value
    Tracking(T),
}

impl<T> Default for GesturePhase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> GesturePhase<T> {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in progress
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }

    /// In-flight value, if tracking
    pub fn tracking(&self) -> Option<&T> {
        match self {
            Self::Tracking(value) => Some(value),
            Self::Idle => None,
        }
    }

    pub fn tracking_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Tracking(value) => Some(value),
            Self::Idle => None,
        }
    }

    /// Start tracking, replacing any previous in-flight value
    pub fn begin(&mut self, value: T) {
        *self = Self::Tracking(value);
    }

    /// Leave the tracking state, handing the in-flight value to the caller
    /// for committing.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Tracking(value) => Some(value),
            Self::Idle => None,
        }
    }

    /// Reset to Idle without committing
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
