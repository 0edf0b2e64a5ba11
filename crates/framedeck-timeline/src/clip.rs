//! Clip types placed on tracks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clip referencing a media pool item by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaClip {
    /// Unique clip id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Id of the referenced pool item.
    pub media_id: String,
    /// In point within the source, in seconds.
    pub source_in_secs: f64,
    /// Duration on the timeline, in seconds.
    pub duration_secs: f64,
    /// Playback speed (1.0 = normal).
    pub speed: f64,
    pub enabled: bool,
}

impl MediaClip {
    /// Create a clip over the full given duration of a pool item.
    pub fn new(name: impl Into<String>, media_id: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            media_id: media_id.into(),
            source_in_secs: 0.0,
            duration_secs,
            speed: 1.0,
            enabled: true,
        }
    }

    /// Out point within the source, in seconds.
    pub fn source_out_secs(&self) -> f64 {
        self.source_in_secs + self.duration_secs
    }
}

/// A clip that plays a nested sequence through a master-clip reference.
///
/// Resolving a nested clip takes two hops: clip -> master clip ->
/// sequence. The indirection lets one sequence be reused as a compound
/// clip in several parents without duplicating its composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedClip {
    /// Unique clip id.
    pub id: String,
    pub name: String,
    /// Id of an entry in the owning sequence's master-clip list.
    pub master_clip_id: String,
    /// Duration on the timeline, in seconds.
    pub duration_secs: f64,
    pub speed: f64,
    pub enabled: bool,
}

impl NestedClip {
    pub fn new(
        name: impl Into<String>,
        master_clip_id: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            master_clip_id: master_clip_id.into(),
            duration_secs,
            speed: 1.0,
            enabled: true,
        }
    }
}

/// A named reference to another sequence with trim points, used to reuse a
/// timeline as a compound clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterClip {
    /// Unique master-clip id.
    pub id: String,
    /// Id of the referenced sequence. Conventionally a nested sequence,
    /// but any sequence id resolves.
    pub sequence_id: String,
    pub name: String,
    /// Trim in point within the referenced sequence, in seconds.
    pub in_point_secs: f64,
    /// Trim out point within the referenced sequence, in seconds.
    pub out_point_secs: f64,
    pub speed: f64,
}

impl MasterClip {
    pub fn new(
        id: impl Into<String>,
        sequence_id: impl Into<String>,
        name: impl Into<String>,
        in_point_secs: f64,
        out_point_secs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            sequence_id: sequence_id.into(),
            name: name.into(),
            in_point_secs,
            out_point_secs,
            speed: 1.0,
        }
    }

    /// Trimmed duration at normal speed, in seconds.
    pub fn trimmed_duration_secs(&self) -> f64 {
        (self.out_point_secs - self.in_point_secs).max(0.0)
    }
}
