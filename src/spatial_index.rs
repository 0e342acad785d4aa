//! Spatial Index Module
//!
//! R-tree of emoji hit boxes in document space, used to find what is under a
//! tap or the start of a drag without scanning every emoji.

use crate::geometry::Point;
use crate::types::{Emoji, EmojiId};
use rstar::{AABB, RTree, RTreeObject};

/// Square hit box centered on an emoji's location.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub emoji_id: EmojiId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(emoji_id: EmojiId, center: Point, half_extent: f32) -> Self {
        let half = half_extent.abs();
        Self {
            emoji_id,
            min_x: center.x - half,
            min_y: center.y - half,
            max_x: center.x + half,
            max_y: center.y + half,
        }
    }

    pub fn for_emoji(emoji: &Emoji) -> Self {
        Self::new(emoji.id, emoji.location, emoji.half_extent())
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index over emoji hit boxes.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// All emojis whose hit box contains the document point. Unordered.
    pub fn query_point(&self, at: Point) -> Vec<EmojiId> {
        let point_envelope = AABB::from_point([at.x, at.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(at.x, at.y))
            .map(|entry| entry.emoji_id)
            .collect()
    }

    /// Replace the whole index with one bulk load.
    pub fn rebuild<'a, I>(&mut self, emojis: I)
    where
        I: IntoIterator<Item = &'a Emoji>,
    {
        let entries: Vec<SpatialEntry> = emojis.into_iter().map(SpatialEntry::for_emoji).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
