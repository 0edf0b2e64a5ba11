//! Project orchestration: create, open, save, validate, optimize, backup.
//!
//! One `ProjectService` instance is constructed per project session and
//! passed by reference to every operation — there is no shared global
//! instance. All document transformations are synchronous value
//! transformations; the three I/O operations (`save_project`,
//! `open_project`, `create_backup`) must not be invoked concurrently
//! against the same document. The service provides no queue or lock for
//! this — serializing I/O per document is the caller's obligation.

use std::collections::BTreeSet;

use framedeck_core::{clock, IdGenerator, Result};
use framedeck_pool::{MediaBin, MediaKind, MediaPool, MediaPoolItem, MediaStatus};
use framedeck_timeline::{Sequence, SequenceKind};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::document::{BackupState, BackupVersion, CacheState, ProjectDocument};
use crate::serialization::ProjectFile;
use crate::storage::Storage;

/// Result of a validation pass. Validation never fails — it is meant to be
/// called speculatively (e.g. before export) — so problems are reported
/// here instead of as errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Source paths of pool items whose status is missing.
    pub missing_media: Vec<String>,
    /// Structural problems: dangling references, bin cycles, and similar.
    pub issues: Vec<String>,
}

/// Result of a garbage-collection pass over the media pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimizeReport {
    /// Pool items removed.
    pub removed_items: usize,
    /// Bytes reclaimed, summed from removed items' file sizes.
    pub freed_space: u64,
}

/// Orchestration layer over the document model. Owns its persistence and
/// id-generation collaborators.
pub struct ProjectService {
    storage: Box<dyn Storage>,
    ids: Box<dyn IdGenerator>,
}

impl ProjectService {
    pub fn new(storage: Box<dyn Storage>, ids: Box<dyn IdGenerator>) -> Self {
        Self { storage, ids }
    }

    /// Create a fresh document: empty pool, one default main sequence set
    /// active, empty cache/backup, no collaboration.
    pub fn create_project(&self, name: impl Into<String>) -> ProjectDocument {
        let name = name.into();
        let sequence = Sequence::new(self.ids.next_id(), "Sequence 1", SequenceKind::Main);
        let active_sequence_id = sequence.id.clone();
        let mut sequences = IndexMap::new();
        sequences.insert(sequence.id.clone(), sequence);

        info!(project = %name, "created project");
        ProjectDocument {
            name,
            media_pool: MediaPool::new(),
            sequences,
            active_sequence_id,
            cache: CacheState::default(),
            backup: BackupState::default(),
            collaboration: None,
        }
    }

    /// Add a sequence with a fresh id. Returns the new id.
    pub fn add_sequence(
        &self,
        project: &mut ProjectDocument,
        name: impl Into<String>,
        kind: SequenceKind,
    ) -> String {
        let sequence = Sequence::new(self.ids.next_id(), name, kind);
        let id = sequence.id.clone();
        project.insert_sequence(sequence);
        id
    }

    /// Add a pool item with a fresh id, replacing the pool value. Returns
    /// the new item id.
    pub fn add_media(
        &self,
        project: &mut ProjectDocument,
        kind: MediaKind,
        name: impl Into<String>,
        path: &str,
    ) -> String {
        let item = MediaPoolItem::new(self.ids.next_id(), kind, name, path);
        let id = item.id.clone();
        project.media_pool = project.media_pool.add_item(item);
        id
    }

    /// Create a bin with a fresh id under `parent_id` (root when `None`).
    pub fn create_bin(
        &self,
        project: &mut ProjectDocument,
        name: impl Into<String>,
        parent_id: Option<String>,
    ) -> Result<MediaBin> {
        if let Some(parent) = parent_id.as_deref() {
            if !project.media_pool.bins.contains_key(parent) {
                return Err(framedeck_core::FramedeckError::Reference(format!(
                    "bin '{parent}' does not exist"
                )));
            }
        }
        let (pool, bin) = project
            .media_pool
            .create_bin(self.ids.next_id(), name, parent_id);
        project.media_pool = pool;
        Ok(bin)
    }

    /// Serialize the document and write it through the storage
    /// collaborator. I/O failure propagates; the in-memory document is
    /// unchanged either way.
    pub fn save_project(&self, project: &ProjectDocument, path: &str) -> Result<()> {
        let text = ProjectFile::new(project.clone()).to_json()?;
        self.storage.write_text(path, &text)?;
        info!(project = %project.name, path, "saved project");
        Ok(())
    }

    /// Read and reconstruct a document. Every keyed collection (pool
    /// items, bins, sequences, thumbnails) is rebuilt from its ordered
    /// pair form. Malformed files fail with a validation error before any
    /// document is returned.
    pub fn open_project(&self, path: &str) -> Result<ProjectDocument> {
        let text = self.storage.read_text(path)?;
        let file = ProjectFile::from_json(&text)?;
        info!(project = %file.project.name, path, "opened project");
        Ok(file.project)
    }

    /// Scan for problems. Never fails; see [`ValidationReport`].
    ///
    /// Missing media is the required baseline; the structural checks
    /// (dangling master-clip references, unresolved nested clips, bin
    /// forest violations, broken active-sequence id) are reported through
    /// `issues`.
    pub fn validate_project(&self, project: &ProjectDocument) -> ValidationReport {
        let mut report = ValidationReport::default();

        for item in project.media_pool.items.values() {
            if item.status == MediaStatus::Missing {
                report.missing_media.push(item.source.path.clone());
            }
            if !project.media_pool.bins.contains_key(&item.bin_id) {
                report.issues.push(format!(
                    "item '{}' references unknown bin '{}'",
                    item.id, item.bin_id
                ));
            }
        }

        for bin in project.media_pool.bins_with_unknown_parent() {
            report
                .issues
                .push(format!("bin '{}' has an unknown parent", bin.id));
        }
        for bin in project.media_pool.bins_on_parent_cycle() {
            report
                .issues
                .push(format!("bin '{}' sits on a parent cycle", bin.id));
        }

        if !project.sequences.contains_key(&project.active_sequence_id) {
            report.issues.push(format!(
                "active sequence '{}' does not exist",
                project.active_sequence_id
            ));
        }

        let known_sequences: BTreeSet<String> = project.sequences.keys().cloned().collect();
        for sequence in project.sequences.values() {
            for master_clip_id in sequence.dangling_master_clip_ids(&known_sequences) {
                report.issues.push(format!(
                    "master clip '{master_clip_id}' in sequence '{}' references a missing sequence",
                    sequence.id
                ));
            }
            for master_clip_id in sequence.unresolved_nested_clip_refs() {
                report.issues.push(format!(
                    "nested clip in sequence '{}' references unknown master clip '{master_clip_id}'",
                    sequence.id
                ));
            }
        }

        report.is_valid = report.missing_media.is_empty() && report.issues.is_empty();
        debug!(
            missing = report.missing_media.len(),
            issues = report.issues.len(),
            "validated project"
        );
        report
    }

    /// Garbage-collect pool items referenced by no clip in any sequence.
    ///
    /// The reference set is recomputed by walking every sequence's clips —
    /// the cached usage counters are never trusted. Items the walk finds
    /// referenced survive even when their usage count is zero; a
    /// disagreement between cache and walk is logged as a stale-usage
    /// warning, not an error. Removed items take their thumbnail cache
    /// entries with them.
    pub fn optimize_project(&self, project: &mut ProjectDocument) -> OptimizeReport {
        let referenced = project.referenced_media_ids();

        let mut unreferenced = Vec::new();
        for item in project.media_pool.items.values() {
            let is_referenced = referenced.contains(&item.id);
            if is_referenced != (item.usage.count > 0) {
                warn!(
                    item = %item.id,
                    cached_count = item.usage.count,
                    referenced = is_referenced,
                    "stale usage counter; trusting clip references"
                );
            }
            if !is_referenced {
                unreferenced.push(item.id.clone());
            }
        }

        let mut report = OptimizeReport::default();
        let mut pool = project.media_pool.clone();
        for item_id in &unreferenced {
            let (next, removed) = pool.remove_item(item_id);
            pool = next;
            if let Some(item) = removed {
                report.removed_items += 1;
                report.freed_space += item.metadata.file_size;
                project.cache.thumbnails.shift_remove(item_id);
            }
        }
        project.media_pool = pool;

        info!(
            removed = report.removed_items,
            freed = report.freed_space,
            "optimized project"
        );
        report
    }

    /// Write a timestamped backup copy, record it in `backup.versions`,
    /// and trim the oldest entries down to the retention limit. Returns
    /// the backup path.
    pub fn create_backup(
        &self,
        project: &mut ProjectDocument,
        project_path: &str,
    ) -> Result<String> {
        let timestamp = clock::unix_now();
        // Id suffix keeps paths unique when backups land within one second.
        let backup_path = format!("{project_path}.{timestamp}.{}.bak", self.ids.next_id());

        let text = ProjectFile::new(project.clone()).to_json()?;
        self.storage.write_text(&backup_path, &text)?;

        project.backup.versions.push(BackupVersion {
            path: backup_path.clone(),
            timestamp,
        });
        let keep = project.backup.auto_save.keep_versions;
        while project.backup.versions.len() > keep {
            let trimmed = project.backup.versions.remove(0);
            debug!(path = %trimmed.path, "trimmed old backup version");
        }

        info!(path = %backup_path, versions = project.backup.versions.len(), "created backup");
        Ok(backup_path)
    }
}
