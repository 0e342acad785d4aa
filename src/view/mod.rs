//! The canvas view.
//!
//! - `state` - Steady zoom, steady pan, selection
//! - `canvas` - `CanvasView`, which routes gestures and dispatches commands
//! - `hit_test` - Topmost emoji under a point
//! - `render` - Screen-space layout of a document snapshot

mod canvas;
mod render;
mod state;

pub use canvas::CanvasView;
pub use hit_test::{HitTarget, HitTester};
pub use render::{RenderedBackground, RenderedCanvas, RenderedEmoji};
pub use state::{TransformState, ViewState};
