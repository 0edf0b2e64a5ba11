//! Parameter automation lanes.

use serde::{Deserialize, Serialize};

/// How to interpolate from a keyframe to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Hold the value until the next keyframe.
    Hold,
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Interpolation {
    /// Map a normalized progress value through the curve.
    fn shape(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Hold => 0.0,
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// A single automation keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationKeyframe {
    /// Time within the lane's range, in seconds.
    pub time_secs: f64,
    pub value: f64,
    /// Curve used when interpolating TO the next keyframe.
    pub interpolation: Interpolation,
}

/// Automation of one parameter over a time range. Keyframes stay ordered
/// by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationLane {
    /// Id of the automated parameter (e.g. "opacity", "volume").
    pub parameter_id: String,
    /// Start of the automated range, in seconds.
    pub start_secs: f64,
    /// End of the automated range, in seconds.
    pub end_secs: f64,
    pub keyframes: Vec<AutomationKeyframe>,
}

impl AutomationLane {
    pub fn new(parameter_id: impl Into<String>, start_secs: f64, end_secs: f64) -> Self {
        Self {
            parameter_id: parameter_id.into(),
            start_secs,
            end_secs,
            keyframes: Vec::new(),
        }
    }

    /// Insert a keyframe, keeping the list ordered by time. A keyframe at
    /// an existing time replaces the old one.
    pub fn add_keyframe(&mut self, keyframe: AutomationKeyframe) {
        match self
            .keyframes
            .binary_search_by(|k| k.time_secs.total_cmp(&keyframe.time_secs))
        {
            Ok(i) => self.keyframes[i] = keyframe,
            Err(i) => self.keyframes.insert(i, keyframe),
        }
    }

    /// Evaluate the lane at a point in time. Before the first keyframe the
    /// first value holds; after the last, the last value holds. Returns
    /// `None` for an empty lane.
    pub fn evaluate(&self, time_secs: f64) -> Option<f64> {
        let first = self.keyframes.first()?;
        if time_secs <= first.time_secs {
            return Some(first.value);
        }
        let last = self.keyframes.last()?;
        if time_secs >= last.time_secs {
            return Some(last.value);
        }
        // Find the keyframe pair bracketing `time_secs`.
        let next_idx = self
            .keyframes
            .iter()
            .position(|k| k.time_secs > time_secs)?;
        let from = &self.keyframes[next_idx - 1];
        let to = &self.keyframes[next_idx];
        let span = to.time_secs - from.time_secs;
        if span <= 0.0 {
            return Some(to.value);
        }
        let t = from.interpolation.shape((time_secs - from.time_secs) / span);
        Some(from.value + (to.value - from.value) * t)
    }
}
