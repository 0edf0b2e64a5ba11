//! The media pool aggregate and its pure operations.

use framedeck_core::{clock, FramedeckError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bin::{MediaBin, ROOT_BIN_ID};
use crate::item::{MediaPoolItem, MediaStatus};
use crate::smart::SmartCollection;

/// Field the pool view sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Name,
    ImportedDate,
    FileSize,
    Kind,
}

/// How the pool is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Display preferences persisted with the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub sort_by: SortField,
    pub ascending: bool,
    pub mode: ViewMode,
    /// Thumbnail edge length in pixels for grid mode.
    pub thumbnail_size: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            sort_by: SortField::Name,
            ascending: true,
            mode: ViewMode::List,
            thumbnail_size: 128,
        }
    }
}

/// Derived counters, recomputed by every item-mutating operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    pub total_items: usize,
    /// Sum of item file sizes in bytes.
    pub total_size: u64,
    pub online: usize,
    pub offline: usize,
    pub missing: usize,
    pub proxy: usize,
}

impl PoolStats {
    fn compute(items: &IndexMap<String, MediaPoolItem>) -> Self {
        let mut stats = Self {
            total_items: items.len(),
            ..Self::default()
        };
        for item in items.values() {
            stats.total_size += item.metadata.file_size;
            match item.status {
                MediaStatus::Online => stats.online += 1,
                MediaStatus::Offline => stats.offline += 1,
                MediaStatus::Missing => stats.missing += 1,
                MediaStatus::Proxy => stats.proxy += 1,
            }
        }
        stats
    }
}

/// The project-wide registry of source assets, independent of any timeline.
///
/// All operations are pure: they return a new pool and leave `self`
/// untouched. The caller replaces its pool with the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPool {
    /// Items keyed by id, persisted as ordered pairs.
    #[serde(with = "framedeck_core::pairs")]
    pub items: IndexMap<String, MediaPoolItem>,
    /// Bins keyed by id, persisted as ordered pairs.
    #[serde(with = "framedeck_core::pairs")]
    pub bins: IndexMap<String, MediaBin>,
    pub smart_collections: Vec<SmartCollection>,
    pub view_settings: ViewSettings,
    pub stats: PoolStats,
}

impl MediaPool {
    /// Create an empty pool containing only the root bin.
    pub fn new() -> Self {
        let mut bins = IndexMap::new();
        let root = MediaBin::root();
        bins.insert(root.id.clone(), root);
        Self {
            items: IndexMap::new(),
            bins,
            smart_collections: Vec::new(),
            view_settings: ViewSettings::default(),
            stats: PoolStats::default(),
        }
    }

    /// Insert an item keyed by id. An id collision replaces the old item
    /// outright (last-write-wins, no merge).
    #[must_use]
    pub fn add_item(&self, item: MediaPoolItem) -> Self {
        let mut next = self.clone();
        next.items.insert(item.id.clone(), item);
        next.stats = PoolStats::compute(&next.items);
        next
    }

    /// Remove an item by id, returning it alongside the new pool.
    #[must_use]
    pub fn remove_item(&self, item_id: &str) -> (Self, Option<MediaPoolItem>) {
        let mut next = self.clone();
        let removed = next.items.shift_remove(item_id);
        if removed.is_some() {
            next.stats = PoolStats::compute(&next.items);
        }
        (next, removed)
    }

    /// Move an item into another bin. Both the item and the target bin
    /// must exist.
    pub fn move_item_to_bin(&self, item_id: &str, bin_id: &str) -> Result<Self> {
        if !self.bins.contains_key(bin_id) {
            return Err(FramedeckError::Reference(format!(
                "bin '{bin_id}' does not exist"
            )));
        }
        let mut next = self.clone();
        let item = next.items.get_mut(item_id).ok_or_else(|| {
            FramedeckError::Reference(format!("item '{item_id}' does not exist"))
        })?;
        item.bin_id = bin_id.to_string();
        Ok(next)
    }

    /// Update the cached usage hint for an item. Unknown ids are a silent
    /// no-op: usage updates may race with deletion and the hint is not a
    /// correctness-critical path.
    #[must_use]
    pub fn update_item_usage(&self, item_id: &str, sequence_id: &str, used: bool) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(item_id) {
            if used {
                item.usage.mark_used(sequence_id, clock::unix_now());
            } else {
                item.usage.mark_unused(sequence_id);
            }
        }
        next
    }

    /// Add a tag to an item. Unknown ids are a silent no-op, like usage.
    #[must_use]
    pub fn add_tag(&self, item_id: &str, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(item_id) {
            item.tags.insert(tag.to_string());
        }
        next
    }

    /// Remove a tag from an item.
    #[must_use]
    pub fn remove_tag(&self, item_id: &str, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(item_id) {
            item.tags.remove(tag);
        }
        next
    }

    /// Create a bin under `parent_id` (root when `None`), with a fresh id
    /// supplied by the caller. Its sort order is appended after existing
    /// siblings.
    #[must_use]
    pub fn create_bin(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<String>,
    ) -> (Self, MediaBin) {
        let parent_id = parent_id.unwrap_or_else(|| ROOT_BIN_ID.to_string());
        let sort_order = self
            .bins
            .values()
            .filter(|b| b.parent_id.as_deref() == Some(parent_id.as_str()))
            .map(|b| b.sort_order + 1)
            .max()
            .unwrap_or(0);
        let bin = MediaBin::new(id, name, Some(parent_id), sort_order, clock::unix_now());
        let mut next = self.clone();
        next.bins.insert(bin.id.clone(), bin.clone());
        (next, bin)
    }

    /// Items directly inside a bin. Does not recurse into child bins.
    pub fn items_in_bin(&self, bin_id: &str) -> Vec<&MediaPoolItem> {
        self.items
            .values()
            .filter(|item| item.bin_id == bin_id)
            .collect()
    }

    /// Direct child bins of a parent, in sort order.
    pub fn child_bins(&self, parent_id: &str) -> Vec<&MediaBin> {
        let mut children: Vec<&MediaBin> = self
            .bins
            .values()
            .filter(|b| b.parent_id.as_deref() == Some(parent_id))
            .collect();
        children.sort_by_key(|b| b.sort_order);
        children
    }

    /// Case-insensitive substring search over name, tags, and notes (OR
    /// across fields). One linear pass; pool sizes are bounded by a single
    /// project, so no index is kept.
    pub fn search(&self, query: &str) -> Vec<&MediaPoolItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.items
            .values()
            .filter(|item| item.matches_query(&query))
            .collect()
    }

    /// Bins whose parent id does not resolve. Used by project validation.
    pub fn bins_with_unknown_parent(&self) -> Vec<&MediaBin> {
        self.bins
            .values()
            .filter(|b| {
                b.parent_id
                    .as_deref()
                    .is_some_and(|p| !self.bins.contains_key(p))
            })
            .collect()
    }

    /// Bins that sit on a parent cycle, violating the forest invariant.
    pub fn bins_on_parent_cycle(&self) -> Vec<&MediaBin> {
        self.bins
            .values()
            .filter(|bin| {
                let mut seen = 0usize;
                let mut current = bin.parent_id.as_deref();
                while let Some(parent) = current {
                    if parent == bin.id {
                        return true;
                    }
                    seen += 1;
                    if seen > self.bins.len() {
                        return true;
                    }
                    current = self.bins.get(parent).and_then(|b| b.parent_id.as_deref());
                }
                false
            })
            .collect()
    }
}

impl Default for MediaPool {
    fn default() -> Self {
        Self::new()
    }
}
