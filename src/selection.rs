//! Selection of emojis on the canvas.
//!
//! Each emoji is either selected or not. A tap on an emoji toggles it, a tap
//! on the background clears everything. Ids of emojis that have since been
//! removed may linger; membership tests against them simply fail.

use crate::types::EmojiId;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<EmojiId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: EmojiId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: EmojiId) {
        self.ids.insert(id);
    }

    pub fn deselect(&mut self, id: EmojiId) -> bool {
        self.ids.remove(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: EmojiId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in ascending order, so commands come out deterministic.
    pub fn sorted_ids(&self) -> Vec<EmojiId> {
        let mut ids: Vec<EmojiId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Drop ids for which `exists` returns false.
    pub fn retain_existing(&mut self, exists: impl Fn(EmojiId) -> bool) {
        self.ids.retain(|id| exists(*id));
    }
}
