//! Tracks: ordered containers of clips and gaps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clip::{MediaClip, NestedClip};

/// Kind of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
}

/// An item in a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackItem {
    /// A clip referencing a media pool item.
    Media(MediaClip),
    /// A clip referencing a master clip (two-hop nested reference).
    Nested(NestedClip),
    /// Empty space.
    Gap { duration_secs: f64 },
}

impl TrackItem {
    /// Timeline duration of this item in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self {
            TrackItem::Media(clip) => clip.duration_secs,
            TrackItem::Nested(clip) => clip.duration_secs,
            TrackItem::Gap { duration_secs } => *duration_secs,
        }
    }
}

/// A track holding an ordered list of clips and gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track id.
    pub id: String,
    pub name: String,
    pub kind: TrackKind,
    /// Items in timeline order.
    pub items: Vec<TrackItem>,
    pub muted: bool,
    pub locked: bool,
}

impl Track {
    /// Create a new video track.
    pub fn new_video(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Video)
    }

    /// Create a new audio track.
    pub fn new_audio(name: impl Into<String>) -> Self {
        Self::new(name, TrackKind::Audio)
    }

    fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            items: Vec::new(),
            muted: false,
            locked: false,
        }
    }

    /// Total duration of the track in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.items.iter().map(|i| i.duration_secs()).sum()
    }

    /// Append an item at the end of the track.
    pub fn append(&mut self, item: TrackItem) {
        self.items.push(item);
    }

    /// Insert an item at the given index (clamped to the end).
    pub fn insert(&mut self, index: usize, item: TrackItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Remove the item at the given index. Returns the removed item.
    pub fn remove(&mut self, index: usize) -> Option<TrackItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Timeline start time of the item at `index`, in seconds. An index
    /// past the end yields the track duration, matching `insert`'s
    /// clamping.
    pub fn item_start_secs(&self, index: usize) -> f64 {
        self.items
            .iter()
            .take(index)
            .map(|i| i.duration_secs())
            .sum()
    }

    /// Find a media clip by clip id. Returns (index, clip).
    pub fn find_media_clip(&self, clip_id: &str) -> Option<(usize, &MediaClip)> {
        self.items.iter().enumerate().find_map(|(i, item)| match item {
            TrackItem::Media(clip) if clip.id == clip_id => Some((i, clip)),
            _ => None,
        })
    }

    /// Ids of pool items referenced by clips on this track.
    pub fn referenced_media_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            TrackItem::Media(clip) => Some(clip.media_id.as_str()),
            _ => None,
        })
    }

    /// Master-clip ids referenced by nested clips on this track.
    pub fn referenced_master_clip_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            TrackItem::Nested(clip) => Some(clip.master_clip_id.as_str()),
            _ => None,
        })
    }

    /// Number of clips (media or nested, excluding gaps).
    pub fn clip_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| !matches!(i, TrackItem::Gap { .. }))
            .count()
    }
}
