//! Sequence: one editable timeline.

use std::collections::BTreeSet;

use framedeck_core::clock;
use serde::{Deserialize, Serialize};

use crate::automation::AutomationLane;
use crate::clip::MasterClip;
use crate::history::EditHistory;
use crate::marker::Marker;
use crate::resource::SequenceResources;
use crate::track::Track;

/// How a sequence is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// A top-level deliverable timeline.
    Main,
    /// A timeline meant to be embedded through master clips.
    Nested,
}

/// Audio format of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            bit_depth: 24,
            channels: 2,
        }
    }
}

/// Format settings of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSettings {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    pub aspect_ratio: String,
    /// Declared duration in seconds; tracks may run shorter.
    pub duration_secs: f64,
    pub audio: AudioSettings,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frame_rate: 24.0,
            aspect_ratio: "16:9".to_string(),
            duration_secs: 0.0,
            audio: AudioSettings::default(),
        }
    }
}

/// Tracks, master-clip references, and automation of one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Tracks in stacking order.
    pub tracks: Vec<Track>,
    /// Named references to other sequences, resolvable from nested clips.
    pub master_clips: Vec<MasterClip>,
    pub automation: Vec<AutomationLane>,
}

/// One editable timeline with a private resource namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Unique sequence id (allocated by the service's id generator).
    pub id: String,
    pub name: String,
    pub kind: SequenceKind,
    pub settings: SequenceSettings,
    pub composition: Composition,
    /// Private to this sequence; never shared with another sequence value.
    pub resources: SequenceResources,
    /// Markers ordered by time.
    pub markers: Vec<Marker>,
    /// Edit-history slot.
    pub history: EditHistory,
    /// Unix seconds created.
    pub created: u64,
    /// Unix seconds last modified.
    pub modified: u64,
}

impl Sequence {
    /// Create a sequence with default settings, one video track, and one
    /// audio track.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SequenceKind) -> Self {
        let now = clock::unix_now();
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            settings: SequenceSettings::default(),
            composition: Composition {
                tracks: vec![Track::new_video("V1"), Track::new_audio("A1")],
                master_clips: Vec::new(),
                automation: Vec::new(),
            },
            resources: SequenceResources::default(),
            markers: Vec::new(),
            history: EditHistory::default(),
            created: now,
            modified: now,
        }
    }

    /// Longest track duration, in seconds.
    pub fn computed_duration_secs(&self) -> f64 {
        self.composition
            .tracks
            .iter()
            .map(|t| t.duration_secs())
            .fold(0.0, f64::max)
    }

    /// Pool item ids referenced by at least one clip on any track. This is
    /// the canonical reference walk the optimizer trusts, as opposed to
    /// the pool's cached usage counters.
    pub fn referenced_media_ids(&self) -> BTreeSet<String> {
        self.composition
            .tracks
            .iter()
            .flat_map(|t| t.referenced_media_ids())
            .map(str::to_string)
            .collect()
    }

    /// Resolve a master clip by id.
    pub fn master_clip(&self, master_clip_id: &str) -> Option<&MasterClip> {
        self.composition
            .master_clips
            .iter()
            .find(|mc| mc.id == master_clip_id)
    }

    /// Ids of master clips whose source sequence is absent from
    /// `known_sequences`.
    pub fn dangling_master_clip_ids(&self, known_sequences: &BTreeSet<String>) -> Vec<String> {
        self.composition
            .master_clips
            .iter()
            .filter(|mc| !known_sequences.contains(&mc.sequence_id))
            .map(|mc| mc.id.clone())
            .collect()
    }

    /// Master-clip ids referenced by nested clips that resolve to no entry
    /// in the master-clip list.
    pub fn unresolved_nested_clip_refs(&self) -> Vec<String> {
        let known: BTreeSet<&str> = self
            .composition
            .master_clips
            .iter()
            .map(|mc| mc.id.as_str())
            .collect();
        let mut dangling: Vec<String> = self
            .composition
            .tracks
            .iter()
            .flat_map(|t| t.referenced_master_clip_ids())
            .filter(|id| !known.contains(id))
            .map(str::to_string)
            .collect();
        dangling.sort();
        dangling.dedup();
        dangling
    }

    /// Insert a marker, keeping markers ordered by time.
    pub fn add_marker(&mut self, marker: Marker) {
        let index = self
            .markers
            .partition_point(|m| m.time_secs <= marker.time_secs);
        self.markers.insert(index, marker);
        self.touch();
    }

    /// Bump the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = clock::unix_now();
    }
}
