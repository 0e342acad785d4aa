//! In-memory, observable document model.
//!
//! `EmojiArtDocument` is the single source of truth for emoji positions and
//! sizes. The view reads it through `snapshot()` and writes to it only through
//! `apply()`. Subscribers are notified with a fresh snapshot after every
//! change, which is how a renderer knows to redraw.

use super::DocumentCommand;
use crate::geometry::{Offset, Point, Size};
use crate::types::{BackgroundImage, Emoji, EmojiId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-only view of a document at one moment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Emojis in z-order, back to front
    pub emojis: Vec<Emoji>,
    pub background: Option<BackgroundImage>,
}

impl DocumentSnapshot {
    pub fn emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EmojiId) -> bool {
        self.emoji(id).is_some()
    }
}

/// The collaborator the view issues commands to.
pub trait EmojiArtModel {
    /// Current emojis and background.
    fn snapshot(&self) -> DocumentSnapshot;

    /// Apply a command. Fire-and-forget: the view never inspects a result.
    fn apply(&mut self, command: DocumentCommand);
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DocumentSnapshot) + Send>;

/// Document holding emojis and an optional background.
pub struct EmojiArtDocument {
    emojis: Vec<Emoji>,
    background: Option<BackgroundImage>,
    next_emoji_id: EmojiId,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription_id: u64,
}

impl Default for EmojiArtDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmojiArtDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiArtDocument")
            .field("emojis", &self.emojis)
            .field("background", &self.background)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl EmojiArtDocument {
    pub fn new() -> Self {
        Self {
            emojis: Vec::new(),
            background: None,
            next_emoji_id: 1,
            subscribers: Vec::new(),
            next_subscription_id: 0,
        }
    }

    /// Rebuild a document from a snapshot, continuing ids after the largest one.
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Self {
        let next_emoji_id = snapshot
            .emojis
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Self {
            emojis: snapshot.emojis,
            background: snapshot.background,
            next_emoji_id,
            ..Self::new()
        }
    }

    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    pub fn get_emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.iter().find(|e| e.id == id)
    }

    fn get_emoji_mut(&mut self, id: EmojiId) -> Option<&mut Emoji> {
        self.emojis.iter_mut().find(|e| e.id == id)
    }

    /// Register a callback invoked with the new snapshot after every change.
    ///
    /// Callbacks run synchronously inside the mutating call and must not
    /// re-enter the document.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&DocumentSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }

    /// Point the background at a new image. Its dimensions stay unknown
    /// (zero) until `set_background_size` reports them.
    pub fn set_background(&mut self, url: impl Into<String>) {
        self.background = Some(BackgroundImage {
            url: url.into(),
            size: Size::ZERO,
        });
        self.notify();
    }

    /// Deliver the dimensions of a loaded background image.
    ///
    /// Ignored if the background has changed since the load started.
    pub fn set_background_size(&mut self, url: &str, size: Size) -> bool {
        match self.background.as_mut() {
            Some(bg) if bg.url == url => {
                bg.size = size;
                self.notify();
                true
            }
            _ => {
                debug!(url, "Discarding stale background load");
                false
            }
        }
    }

    pub fn add_emoji(&mut self, text: impl Into<String>, location: Point, size: f32) -> EmojiId {
        let id = self.next_emoji_id;
        self.next_emoji_id = self.next_emoji_id.saturating_add(1);
        self.emojis.push(Emoji {
            id,
            text: text.into(),
            location,
            size,
        });
        self.notify();
        id
    }

    pub fn move_emoji(&mut self, id: EmojiId, by: Offset) -> bool {
        let Some(emoji) = self.get_emoji_mut(id) else {
            warn!(id, "move_emoji: no such emoji");
            return false;
        };
        emoji.location = emoji.location + by;
        self.notify();
        true
    }

    pub fn scale_emoji(&mut self, id: EmojiId, by: f32) -> bool {
        if !(by.is_finite() && by > 0.0) {
            warn!(id, by, "scale_emoji: ignoring non-positive ratio");
            return false;
        }
        let Some(emoji) = self.get_emoji_mut(id) else {
            warn!(id, "scale_emoji: no such emoji");
            return false;
        };
        emoji.size *= by;
        self.notify();
        true
    }

    pub fn remove_emoji(&mut self, id: EmojiId) -> bool {
        let before = self.emojis.len();
        self.emojis.retain(|e| e.id != id);
        if self.emojis.len() == before {
            warn!(id, "remove_emoji: no such emoji");
            return false;
        }
        self.notify();
        true
    }
}

impl EmojiArtModel for EmojiArtDocument {
    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            emojis: self.emojis.clone(),
            background: self.background.clone(),
        }
    }

    fn apply(&mut self, command: DocumentCommand) {
        debug!(command = command.label(), "Applying document command");
        match command {
            DocumentCommand::SetBackground { url } => self.set_background(url),
            DocumentCommand::AddEmoji { text, location, size } => {
                self.add_emoji(text, location, size);
            }
            DocumentCommand::MoveEmoji { id, by } => {
                self.move_emoji(id, by);
            }
            DocumentCommand::ScaleEmoji { id, by } => {
                self.scale_emoji(id, by);
            }
            DocumentCommand::RemoveEmoji { id } => {
                self.remove_emoji(id);
            }
        }
    }
}

/// A document shared between the view and an image loader running elsewhere.
#[derive(Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<EmojiArtDocument>>,
}

impl SharedDocument {
    pub fn new(document: EmojiArtDocument) -> Self {
        Self {
            inner: Arc::new(Mutex::new(document)),
        }
    }

    /// Run `f` with exclusive access to the document.
    pub fn with<R>(&self, f: impl FnOnce(&mut EmojiArtDocument) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl EmojiArtModel for SharedDocument {
    fn snapshot(&self) -> DocumentSnapshot {
        self.inner.lock().snapshot()
    }

    fn apply(&mut self, command: DocumentCommand) {
        self.inner.lock().apply(command);
    }
}
