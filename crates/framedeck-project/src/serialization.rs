//! Project file serialization with versioning and migration.
//!
//! JSON with a schema version field. Every keyed collection is stored as
//! an ordered list of `[key, value]` pairs (see `framedeck_core::pairs`),
//! so the on-disk format does not depend on any runtime's map semantics.

use framedeck_core::{FramedeckError, Result};
use serde::{Deserialize, Serialize};

use crate::document::ProjectDocument;

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Versioned project file wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Schema version for migration.
    pub version: u32,
    /// The document data.
    pub project: ProjectDocument,
    /// Application version that wrote this file.
    pub app_version: String,
}

impl ProjectFile {
    /// Wrap a document for writing.
    pub fn new(project: ProjectDocument) -> Self {
        Self {
            version: CURRENT_VERSION,
            project,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FramedeckError::Serialization(format!("Failed to serialize project: {e}")))
    }

    /// Deserialize, applying migrations if needed.
    ///
    /// Malformed input or missing required top-level fields fail with a
    /// validation error before any document is returned — never a
    /// partially reconstructed document.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| FramedeckError::Validation(format!("Invalid project file: {e}")))?;

        let version = raw.get("version").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        if version > CURRENT_VERSION {
            return Err(FramedeckError::Validation(format!(
                "Project file version {version} is newer than supported version {CURRENT_VERSION}"
            )));
        }

        let migrated = migrate(raw, version)?;

        serde_json::from_value(migrated)
            .map_err(|e| FramedeckError::Validation(format!("Malformed project file: {e}")))
    }
}

/// Apply sequential migrations from `from_version` to [`CURRENT_VERSION`].
fn migrate(mut data: serde_json::Value, from_version: u32) -> Result<serde_json::Value> {
    let mut version = from_version;

    while version < CURRENT_VERSION {
        match version {
            0 => {
                // v0 → v1: bare document without the version wrapper.
                if data.get("version").is_none() {
                    data = serde_json::json!({
                        "version": 1,
                        "project": data,
                        "app_version": "0.1.0",
                    });
                }
                version = 1;
            }
            _ => {
                return Err(FramedeckError::Validation(format!(
                    "No migration path from version {version}"
                )));
            }
        }
    }

    Ok(data)
}
