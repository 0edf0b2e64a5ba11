//! Framedeck Core - Foundation types for the project document model
//!
//! This crate provides the fundamental pieces used throughout Framedeck:
//! - The error taxonomy (reference/persistence/validation/serialization)
//! - Id generation behind a trait (no global singletons)
//! - Wall-clock helpers for created/modified/backup timestamps
//! - Ordered-pair serialization for keyed collections

pub mod clock;
pub mod error;
pub mod id;
pub mod pairs;

pub use error::{FramedeckError, Result};
pub use id::{CountingGenerator, IdGenerator, UuidGenerator};
