//! Gesture interpretation for the canvas.
//!
//! This module turns raw gesture samples into transient view state and, when
//! a gesture completes, into committed view state or `DocumentCommand`s.
//!
//! ## Architecture
//!
//! Each recognizer owns an explicit `GesturePhase` (idle or tracking). The
//! in-flight value stays private to that recognizer until the gesture ends,
//! at which point it is merged into `ViewState` or returned as commands.
//!
//! ## Modules
//!
//! - `coords` - Document/screen coordinate conversion
//! - `state` - The per-gesture phase state machine
//! - `zoom` - Pinch: canvas zoom or selected-emoji scaling
//! - `pan` - Background drag panning
//! - `drag` - Emoji dragging
//! - `tap` - Selection taps and long-press removal
//! - `transform` - Zoom to fit
//! - `drop` - Drag-and-drop payload resolution

pub mod coords;
mod drag;
mod drop;
mod pan;
mod state;
mod tap;
mod transform;
mod zoom;

pub use drag::{ItemDrag, ItemDragGesture};
pub use drop::{DropOutcome, resolve_drop};
pub use pan::PanGesture;
pub use state::GesturePhase;
pub use tap::{LongPressGesture, tap_background, tap_emoji};
pub use transform::{fit_zoom, zoom_to_fit};
pub use zoom::{ZoomGesture, ZoomTarget, ZoomTracking};
