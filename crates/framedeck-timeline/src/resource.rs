//! The per-sequence resource namespace.
//!
//! Six keyed collections (effects, filters, transitions, color grades,
//! titles, generators), each private to its owning sequence. Resources are
//! a closed tagged enum so the optimizer and validator can handle every
//! kind exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The resource kinds a sequence can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Effect,
    Filter,
    Transition,
    ColorGrade,
    Title,
    Generator,
}

/// One resource with kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequenceResource {
    Effect {
        id: String,
        name: String,
        /// Named scalar parameters (e.g. "blur_radius" -> 4.0).
        parameters: IndexMap<String, f64>,
    },
    Filter {
        id: String,
        name: String,
        /// Mix amount, 0.0 to 1.0.
        intensity: f64,
    },
    Transition {
        id: String,
        name: String,
        duration_secs: f64,
    },
    ColorGrade {
        id: String,
        name: String,
        lift: f64,
        gamma: f64,
        gain: f64,
        saturation: f64,
    },
    Title {
        id: String,
        text: String,
        font: String,
        size: f32,
        x: f32,
        y: f32,
    },
    Generator {
        id: String,
        name: String,
        parameters: IndexMap<String, f64>,
    },
}

impl SequenceResource {
    pub fn id(&self) -> &str {
        match self {
            Self::Effect { id, .. }
            | Self::Filter { id, .. }
            | Self::Transition { id, .. }
            | Self::ColorGrade { id, .. }
            | Self::Title { id, .. }
            | Self::Generator { id, .. } => id,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Effect { .. } => ResourceKind::Effect,
            Self::Filter { .. } => ResourceKind::Filter,
            Self::Transition { .. } => ResourceKind::Transition,
            Self::ColorGrade { .. } => ResourceKind::ColorGrade,
            Self::Title { .. } => ResourceKind::Title,
            Self::Generator { .. } => ResourceKind::Generator,
        }
    }
}

/// The namespace itself. Owned by exactly one sequence; cloning a sequence
/// clones the namespace, so collections are never shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceResources {
    #[serde(with = "framedeck_core::pairs")]
    pub effects: IndexMap<String, SequenceResource>,
    #[serde(with = "framedeck_core::pairs")]
    pub filters: IndexMap<String, SequenceResource>,
    #[serde(with = "framedeck_core::pairs")]
    pub transitions: IndexMap<String, SequenceResource>,
    #[serde(with = "framedeck_core::pairs")]
    pub color_grades: IndexMap<String, SequenceResource>,
    #[serde(with = "framedeck_core::pairs")]
    pub titles: IndexMap<String, SequenceResource>,
    #[serde(with = "framedeck_core::pairs")]
    pub generators: IndexMap<String, SequenceResource>,
}

impl SequenceResources {
    /// Insert a resource into the collection matching its kind, keyed by
    /// its id. Last-write-wins on collision, like the pool.
    pub fn insert(&mut self, resource: SequenceResource) {
        let id = resource.id().to_string();
        self.collection_mut(resource.kind()).insert(id, resource);
    }

    /// Look up a resource by kind and id.
    pub fn get(&self, kind: ResourceKind, id: &str) -> Option<&SequenceResource> {
        self.collection(kind).get(id)
    }

    /// Remove a resource by kind and id.
    pub fn remove(&mut self, kind: ResourceKind, id: &str) -> Option<SequenceResource> {
        self.collection_mut(kind).shift_remove(id)
    }

    /// The collection for one kind.
    pub fn collection(&self, kind: ResourceKind) -> &IndexMap<String, SequenceResource> {
        match kind {
            ResourceKind::Effect => &self.effects,
            ResourceKind::Filter => &self.filters,
            ResourceKind::Transition => &self.transitions,
            ResourceKind::ColorGrade => &self.color_grades,
            ResourceKind::Title => &self.titles,
            ResourceKind::Generator => &self.generators,
        }
    }

    fn collection_mut(&mut self, kind: ResourceKind) -> &mut IndexMap<String, SequenceResource> {
        match kind {
            ResourceKind::Effect => &mut self.effects,
            ResourceKind::Filter => &mut self.filters,
            ResourceKind::Transition => &mut self.transitions,
            ResourceKind::ColorGrade => &mut self.color_grades,
            ResourceKind::Title => &mut self.titles,
            ResourceKind::Generator => &mut self.generators,
        }
    }

    /// Total resources across all six collections.
    pub fn len(&self) -> usize {
        self.effects.len()
            + self.filters.len()
            + self.transitions.len()
            + self.color_grades.len()
            + self.titles.len()
            + self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
