//! Framedeck Pool - the project-wide registry of source assets.
//!
//! The pool is a value type: every operation returns a new pool and leaves
//! the input untouched. Callers replace `project.media_pool` with the
//! result and serialize their own read-modify-write cycles.

pub mod bin;
pub mod item;
pub mod pool;
pub mod smart;

pub use bin::{MediaBin, ROOT_BIN_ID};
pub use item::{MediaKind, MediaPoolItem, MediaSource, MediaStatus, UsageInfo};
pub use pool::{MediaPool, PoolStats, SortField, ViewMode, ViewSettings};
pub use smart::{FilterCriterion, SmartCollection};
