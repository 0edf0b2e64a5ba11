//! Boundary to the external media analysis engine.
//!
//! The engine is invoked with a named operation, a file path, and an options
//! record, and returns a structured report. Framedeck stores the results on
//! the owning pool item; it never performs the analysis itself.

use framedeck_core::{FramedeckError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metadata::MediaMetadata;

/// Named analysis operations the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisOperation {
    /// Probe container/stream metadata without decoding.
    Probe,
    /// Detect scene boundaries.
    SceneDetect,
    /// Sample visual quality scores.
    Quality,
    /// Detect silent audio ranges.
    SilenceDetect,
    /// Build a motion activity profile.
    Motion,
    /// Extract representative key frames.
    KeyFrames,
    /// Full audio analysis (loudness, peaks, channels).
    Audio,
}

/// Tuning options passed to the engine alongside the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Frame-difference threshold for scene cuts (0.0 to 1.0).
    pub scene_threshold: f32,
    /// Minimum scene length in seconds; shorter detections are suppressed.
    pub min_scene_length_secs: f64,
    /// Quality sampling rate in samples per second of footage.
    pub quality_sample_rate: f64,
    /// Level below which audio counts as silence, in dBFS.
    pub silence_threshold_db: f32,
    /// Minimum silence duration in seconds to report.
    pub min_silence_secs: f64,
    /// How many key frames to extract.
    pub key_frame_count: u32,
    /// Key frame JPEG quality (1-100).
    pub key_frame_quality: u8,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            scene_threshold: 0.5,
            min_scene_length_secs: 0.5,
            quality_sample_rate: 1.0,
            silence_threshold_db: -40.0,
            min_silence_secs: 1.0,
            key_frame_count: 5,
            key_frame_quality: 80,
        }
    }
}

/// One request to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub operation: AnalysisOperation,
    /// Path of the source file to analyze.
    pub path: String,
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    pub fn new(operation: AnalysisOperation, path: impl Into<String>) -> Self {
        Self {
            operation,
            path: path.into(),
            options: AnalysisOptions::default(),
        }
    }
}

/// A detected scene boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedScene {
    pub start_secs: f64,
    pub end_secs: f64,
    /// Confidence score (0.0 to 1.0).
    pub confidence: f32,
}

/// Sampled quality scores over the whole asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Overall score (0.0 to 1.0).
    pub overall: f32,
    pub sharpness: f32,
    pub exposure: f32,
    pub noise: f32,
}

/// A detected silent range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilenceRange {
    pub start_secs: f64,
    pub end_secs: f64,
    /// Mean level inside the range, in dBFS.
    pub mean_level_db: f32,
}

/// Motion activity sampled over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Seconds between samples.
    pub sample_interval_secs: f64,
    /// Normalized motion magnitude per sample (0.0 to 1.0).
    pub samples: Vec<f32>,
}

/// One extracted key frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFrameInfo {
    pub time_secs: f64,
    /// Path of the extracted image, relative to the project cache.
    pub image_path: String,
}

/// Audio-level analysis results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    pub peak_db: f32,
    pub loudness_lufs: f32,
    pub channels: u16,
    pub sample_rate: u32,
}

/// Everything the engine can hand back. Fields not produced by the
/// requested operation stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: Option<MediaMetadata>,
    pub scenes: Vec<DetectedScene>,
    pub quality: Option<QualityScores>,
    pub silences: Vec<SilenceRange>,
    pub motion: Option<MotionProfile>,
    pub key_frames: Vec<KeyFrameInfo>,
    pub audio: Option<AudioAnalysis>,
}

/// The external analysis engine, specified only at this boundary.
pub trait AnalysisEngine: Send + Sync {
    /// Run one analysis operation. Engine failures surface as
    /// [`FramedeckError::Analysis`] with a human-readable message.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport>;
}

/// Wrap a raw engine failure message with the operation and path that
/// produced it.
pub fn engine_error(request: &AnalysisRequest, message: &str) -> FramedeckError {
    debug!(
        operation = ?request.operation,
        path = %request.path,
        "analysis engine failure"
    );
    FramedeckError::Analysis(format!(
        "{:?} failed for '{}': {}",
        request.operation, request.path, message
    ))
}
