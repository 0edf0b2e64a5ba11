//! Framedeck Project - the project document and its orchestration service.
//!
//! A [`ProjectDocument`] owns one media pool, a keyed collection of
//! sequences, a render/thumbnail cache, and backup metadata. All mutation
//! goes through [`ProjectService`] or the pure pool/sequence operations;
//! persistence is a versioned JSON file whose keyed collections round-trip
//! as ordered pairs.

pub mod document;
pub mod serialization;
pub mod service;
pub mod storage;

pub use document::{
    AutoSavePolicy, BackupState, BackupVersion, CacheState, CollabMode, CollabUser,
    CollaborationSettings, Permission, ProjectDocument, ThumbnailRef,
};
pub use serialization::{ProjectFile, CURRENT_VERSION};
pub use service::{OptimizeReport, ProjectService, ValidationReport};
pub use storage::{FsStorage, MemoryStorage, Storage};
