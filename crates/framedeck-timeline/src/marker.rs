//! Timeline markers.

use serde::{Deserialize, Serialize};

/// What a marker annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerKind {
    #[default]
    Standard,
    Chapter,
    Todo,
}

/// A marker on the sequence, ordered by time within the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub name: String,
    /// Position on the timeline, in seconds.
    pub time_secs: f64,
    /// Display color.
    pub color: String,
    pub kind: MarkerKind,
    /// Ranged markers carry a duration.
    pub duration_secs: Option<f64>,
    pub comment: Option<String>,
}

impl Marker {
    pub fn new(id: impl Into<String>, name: impl Into<String>, time_secs: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time_secs,
            color: "blue".to_string(),
            kind: MarkerKind::Standard,
            duration_secs: None,
            comment: None,
        }
    }
}
