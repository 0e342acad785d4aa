//! Document model collaborator.
//!
//! - `command` - The mutations the view may request
//! - `model` - The `EmojiArtModel` trait and an observable in-memory document

mod command;
mod model;

pub use command::DocumentCommand;
pub use model::{DocumentSnapshot, EmojiArtDocument, EmojiArtModel, SharedDocument, SubscriptionId};
