//! Bins: folder nodes organizing pool items into a tree.

use serde::{Deserialize, Serialize};

/// Id of the sentinel root bin present in every pool.
pub const ROOT_BIN_ID: &str = "root";

/// A folder node in the media pool.
///
/// The bin graph must remain a forest: `parent_id`, when set, must
/// reference an existing bin and following parents must never loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBin {
    /// Unique bin id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Parent bin id; `None` only for the root bin.
    pub parent_id: Option<String>,
    /// Position among siblings.
    pub sort_order: u32,
    /// Unix seconds the bin was created.
    pub created_date: u64,
    /// Optional label color.
    pub color: Option<String>,
    /// Optional icon name.
    pub icon: Option<String>,
}

impl MediaBin {
    /// Create a bin under the given parent.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: Option<String>,
        sort_order: u32,
        created_date: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            sort_order,
            created_date,
            color: None,
            icon: None,
        }
    }

    /// The sentinel root bin.
    pub fn root() -> Self {
        Self::new(ROOT_BIN_ID, "Media", None, 0, 0)
    }
}
