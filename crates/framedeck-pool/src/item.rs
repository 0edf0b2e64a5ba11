//! Pool items: one record per source asset.

use std::collections::BTreeSet;

use framedeck_media::MediaMetadata;
use serde::{Deserialize, Serialize};

use crate::bin::ROOT_BIN_ID;

/// What kind of asset a pool item describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    /// A sequence used as source media (see master clips).
    Sequence,
    /// A compound clip baked from a nested sequence.
    Compound,
}

/// Availability of the underlying file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Online,
    Offline,
    Missing,
    /// Original offline but a proxy is available.
    Proxy,
}

/// Where the asset lives on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    /// Absolute path.
    pub path: String,
    /// Path relative to the project file, when inside the project tree.
    pub relative_path: Option<String>,
    /// Content hash for relink-after-move detection.
    pub content_hash: Option<String>,
}

impl MediaSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative_path: None,
            content_hash: None,
        }
    }
}

/// Cached usage bookkeeping: which sequences reference this item.
///
/// `count` always equals `sequences.len()`; both change only through
/// [`UsageInfo::mark_used`] and [`UsageInfo::mark_unused`]. This is a hint
/// for the UI — the optimizer recomputes ground truth from clips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageInfo {
    /// Sequence ids that reference this item.
    pub sequences: BTreeSet<String>,
    /// Number of referencing sequences.
    pub count: usize,
    /// Unix seconds of the last `mark_used` call.
    pub last_used: Option<u64>,
}

impl UsageInfo {
    /// Record that a sequence uses this item. Idempotent.
    pub fn mark_used(&mut self, sequence_id: &str, now: u64) {
        self.sequences.insert(sequence_id.to_string());
        self.count = self.sequences.len();
        self.last_used = Some(now);
    }

    /// Record that a sequence no longer uses this item. Idempotent.
    pub fn mark_unused(&mut self, sequence_id: &str) {
        self.sequences.remove(sequence_id);
        self.count = self.sequences.len();
    }
}

/// One source asset in the media pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPoolItem {
    /// Unique item id.
    pub id: String,
    pub kind: MediaKind,
    pub name: String,
    pub source: MediaSource,
    pub status: MediaStatus,
    /// Owning bin; `ROOT_BIN_ID` for top-level items.
    pub bin_id: String,
    pub metadata: MediaMetadata,
    pub usage: UsageInfo,
    /// Path of a generated proxy file, if any.
    pub proxy_path: Option<String>,
    /// Path of a generated thumbnail, if any.
    pub thumbnail_path: Option<String>,
    /// Path of a generated waveform image, if any.
    pub waveform_path: Option<String>,
    pub tags: BTreeSet<String>,
    pub color_label: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

impl MediaPoolItem {
    /// Create an online item in the root bin with empty metadata.
    pub fn new(id: impl Into<String>, kind: MediaKind, name: impl Into<String>, path: &str) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            source: MediaSource::new(path),
            status: MediaStatus::Online,
            bin_id: ROOT_BIN_ID.to_string(),
            metadata: MediaMetadata::default(),
            usage: UsageInfo::default(),
            proxy_path: None,
            thumbnail_path: None,
            waveform_path: None,
            tags: BTreeSet::new(),
            color_label: None,
            rating: None,
            notes: None,
        }
    }

    /// Set the star rating, clamped into 1..=5.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating.clamp(1, 5));
    }

    /// Case-insensitive substring match against name, tags, and notes
    /// (OR semantics). `query` must already be lowercased.
    pub(crate) fn matches_query(&self, query: &str) -> bool {
        if contains_lowercase(&self.name, query) {
            return true;
        }
        if self.tags.iter().any(|t| contains_lowercase(t, query)) {
            return true;
        }
        self.notes
            .as_deref()
            .is_some_and(|notes| contains_lowercase(notes, query))
    }
}

/// Substring search that lowercases the haystack on the fly, so a query
/// pass allocates nothing per item. `needle_lc` must already be lowercased.
fn contains_lowercase(haystack: &str, needle_lc: &str) -> bool {
    haystack
        .char_indices()
        .any(|(start, _)| starts_with_lowercase(&haystack[start..], needle_lc))
}

fn starts_with_lowercase(haystack: &str, needle_lc: &str) -> bool {
    let mut folded = haystack.chars().flat_map(char::to_lowercase);
    needle_lc.chars().all(|n| folded.next() == Some(n))
}
