//! Application-wide constants.
//!
//! Centralizes magic numbers so gesture thresholds and defaults live in one
//! place. Values a user may want to tune are mirrored in `Settings`.

use std::time::Duration;

// ============================================================================
// Item Defaults
// ============================================================================

/// Font size given to an emoji dropped onto the canvas
pub const DEFAULT_EMOJI_SIZE: f32 = 40.0;

/// Emoji offered by the palette when no settings file overrides them
pub const DEFAULT_PALETTE: &[&str] = &[
    "🍏", "🚗", "🚕", "🚙", "🏎", "🚓", "🚑", "🚒", "🚐", "🚚", "✈️", "🚀", "⛵️", "🌲", "🌞",
    "🌧", "⛄️", "🐶", "🐱", "🦊",
];

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

// ============================================================================
// Input Handling
// ============================================================================

/// How long a press must be held on an emoji before it is removed
pub const LONG_PRESS_DURATION: Duration = Duration::from_secs(2);

/// Tolerance used when comparing round-tripped coordinates
pub const COORD_EPSILON: f32 = 1e-3;
