//! The project document: everything one editing project owns.

use std::collections::BTreeSet;

use framedeck_core::{FramedeckError, Result};
use framedeck_pool::MediaPool;
use framedeck_timeline::Sequence;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A cached thumbnail for one pool item, keyed by item id in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailRef {
    /// Path of the rendered thumbnail image.
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// Unix seconds the thumbnail was rendered.
    pub generated_at: u64,
}

/// Render/thumbnail cache state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheState {
    /// Thumbnails keyed by pool item id, persisted as ordered pairs.
    #[serde(with = "framedeck_core::pairs")]
    pub thumbnails: IndexMap<String, ThumbnailRef>,
}

/// One written backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupVersion {
    pub path: String,
    /// Unix seconds the backup was written.
    pub timestamp: u64,
}

/// Auto-save retention policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSavePolicy {
    /// Number of backup versions to retain; the oldest are trimmed beyond
    /// this.
    pub keep_versions: usize,
}

impl Default for AutoSavePolicy {
    fn default() -> Self {
        Self { keep_versions: 5 }
    }
}

/// Backup bookkeeping, oldest version first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupState {
    pub versions: Vec<BackupVersion>,
    pub auto_save: AutoSavePolicy,
}

/// How a collaborator participates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Viewer,
    Editor,
    Owner,
}

/// One collaborating user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollabUser {
    pub name: String,
    pub permission: Permission,
}

/// Collaboration transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollabMode {
    /// Review-only sharing.
    Review,
    /// Full multi-user editing.
    Edit,
}

/// Optional collaboration metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationSettings {
    pub enabled: bool,
    pub mode: CollabMode,
    pub server: Option<String>,
    pub project_id: Option<String>,
    pub users: Vec<CollabUser>,
}

/// The root of one editing project.
///
/// Created by [`crate::ProjectService::create_project`], mutated only
/// through the service and the pure pool/sequence operations, and dropped
/// when the owning session closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub name: String,
    pub media_pool: MediaPool,
    /// Sequences keyed by id, persisted as ordered pairs.
    #[serde(with = "framedeck_core::pairs")]
    pub sequences: IndexMap<String, Sequence>,
    /// Must key into `sequences`.
    pub active_sequence_id: String,
    pub cache: CacheState,
    pub backup: BackupState,
    pub collaboration: Option<CollaborationSettings>,
}

impl ProjectDocument {
    /// The active sequence, if `active_sequence_id` resolves.
    pub fn active_sequence(&self) -> Option<&Sequence> {
        self.sequences.get(&self.active_sequence_id)
    }

    /// Switch the active sequence. Fails if the id does not resolve.
    pub fn set_active_sequence(&mut self, sequence_id: &str) -> Result<()> {
        if !self.sequences.contains_key(sequence_id) {
            return Err(FramedeckError::Reference(format!(
                "sequence '{sequence_id}' does not exist"
            )));
        }
        self.active_sequence_id = sequence_id.to_string();
        Ok(())
    }

    /// Insert a sequence keyed by its id.
    pub fn insert_sequence(&mut self, sequence: Sequence) {
        self.sequences.insert(sequence.id.clone(), sequence);
    }

    /// Remove a sequence by id. The active sequence cannot be removed.
    pub fn remove_sequence(&mut self, sequence_id: &str) -> Result<Sequence> {
        if sequence_id == self.active_sequence_id {
            return Err(FramedeckError::Reference(format!(
                "sequence '{sequence_id}' is active and cannot be removed"
            )));
        }
        self.sequences.shift_remove(sequence_id).ok_or_else(|| {
            FramedeckError::Reference(format!("sequence '{sequence_id}' does not exist"))
        })
    }

    /// Pool item ids referenced by at least one clip in any sequence — the
    /// canonical reference set. The pool's usage counters are a cache and
    /// may be stale; this walk is the ground truth.
    pub fn referenced_media_ids(&self) -> BTreeSet<String> {
        self.sequences
            .values()
            .flat_map(|seq| seq.referenced_media_ids())
            .collect()
    }
}
