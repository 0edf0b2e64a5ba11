//! Error types for Framedeck.

use thiserror::Error;

/// Main error type for Framedeck operations.
///
/// Stale usage counters are deliberately absent: a usage cache that
/// disagrees with the canonical clip references is a warning logged by the
/// optimizer, never an error.
#[derive(Error, Debug)]
pub enum FramedeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bin, sequence, or master-clip id failed to resolve.
    #[error("Reference error: {0}")]
    Reference(String),

    /// An I/O failure during save/open/backup. The in-memory document is
    /// left unchanged when this is returned.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A malformed project file. Open never returns a partially
    /// reconstructed document.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The external media analysis engine failed.
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for Framedeck operations.
pub type Result<T> = std::result::Result<T, FramedeckError>;
