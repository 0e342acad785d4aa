//! Interaction core for a zoomable, pannable emoji collage canvas.
//!
//! Gesture samples go in, `DocumentCommand`s and view state come out. The
//! crate draws nothing; `CanvasView::render` produces the screen-space layout
//! a toolkit needs to draw a frame.

pub mod constants;
pub mod document;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod perf;
pub mod replay;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod view;
