//! Per-asset technical metadata.

use serde::{Deserialize, Serialize};

/// Technical metadata for one source asset, filled in by the external
/// analysis engine's probe operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Frame rate in frames per second (0.0 for still images and audio).
    pub frame_rate: f64,
    /// Pixel width (0 for audio-only assets).
    pub width: u32,
    /// Pixel height (0 for audio-only assets).
    pub height: u32,
    /// Codec name as reported by the engine.
    pub codec: String,
    /// Bit rate in bits per second, when known.
    pub bit_rate: Option<u64>,
    /// File size in bytes.
    pub file_size: u64,
    /// Unix seconds the file was created.
    pub created_date: u64,
    /// Unix seconds the file was last modified.
    pub modified_date: u64,
    /// Unix seconds the asset was imported into the pool.
    pub imported_date: u64,
}

impl MediaMetadata {
    /// Resolution as a display string, e.g. "1920x1080".
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl Default for MediaMetadata {
    fn default() -> Self {
        Self {
            duration_secs: 0.0,
            frame_rate: 0.0,
            width: 0,
            height: 0,
            codec: String::new(),
            bit_rate: None,
            file_size: 0,
            created_date: 0,
            modified_date: 0,
            imported_date: 0,
        }
    }
}
