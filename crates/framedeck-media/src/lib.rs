//! Framedeck Media - metadata records and the analysis engine boundary.
//!
//! Actual decoding and analysis happen in an external engine; this crate
//! only defines the request/result contract and the metadata the document
//! model stores per asset.

pub mod analysis;
pub mod metadata;

pub use analysis::{
    AnalysisEngine, AnalysisOperation, AnalysisOptions, AnalysisReport, AnalysisRequest,
    AudioAnalysis, DetectedScene, KeyFrameInfo, MotionProfile, QualityScores, SilenceRange,
};
pub use metadata::MediaMetadata;
