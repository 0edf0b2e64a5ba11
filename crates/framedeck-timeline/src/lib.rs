//! Framedeck Timeline - one editable sequence.
//!
//! A sequence owns its tracks, clips, master-clip references, automation
//! lanes, markers, an edit-history slot, and a private resource namespace.
//! Nothing in here is shared between two sequence values: cloning a
//! sequence clones its namespace, so edits to one can never leak into
//! another.

pub mod automation;
pub mod clip;
pub mod history;
pub mod marker;
pub mod resource;
pub mod sequence;
pub mod track;

pub use automation::{AutomationKeyframe, AutomationLane, Interpolation};
pub use clip::{MasterClip, MediaClip, NestedClip};
pub use history::{EditHistory, EditRecord};
pub use marker::{Marker, MarkerKind};
pub use resource::{ResourceKind, SequenceResource, SequenceResources};
pub use sequence::{AudioSettings, Composition, Sequence, SequenceKind, SequenceSettings};
pub use track::{Track, TrackItem, TrackKind};
