//! The edit-history slot.
//!
//! The document model only guarantees the slot: an ordered list of edit
//! records plus a position. The undo/redo algorithm itself lives with the
//! editor, outside this crate.

use serde::{Deserialize, Serialize};

/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    pub id: String,
    /// Human-readable label, e.g. "Ripple delete".
    pub label: String,
    /// Unix seconds the edit happened.
    pub timestamp: u64,
}

/// Ordered edit records with a cursor. `position` counts records applied:
/// records `..position` are in effect, records `position..` are redoable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditHistory {
    pub records: Vec<EditRecord>,
    pub position: usize,
    /// Maximum records kept; the oldest are evicted beyond this.
    pub max_depth: usize,
}

impl EditHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            records: Vec::new(),
            position: 0,
            max_depth,
        }
    }

    /// Record a new edit. Discards any redoable tail first.
    pub fn push(&mut self, record: EditRecord) {
        self.records.truncate(self.position);
        self.records.push(record);
        if self.records.len() > self.max_depth {
            self.records.remove(0);
        }
        self.position = self.records.len();
    }

    /// Step the cursor back. Returns the record that was undone.
    pub fn step_back(&mut self) -> Option<&EditRecord> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.records.get(self.position)
    }

    /// Step the cursor forward. Returns the record that was redone.
    pub fn step_forward(&mut self) -> Option<&EditRecord> {
        if self.position >= self.records.len() {
            return None;
        }
        let record = self.records.get(self.position);
        self.position += 1;
        record
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position < self.records.len()
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> EditRecord {
        EditRecord {
            id: label.to_string(),
            label: label.to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_push_discards_redo_tail() {
        let mut history = EditHistory::new(10);
        history.push(record("a"));
        history.push(record("b"));
        history.step_back();
        assert!(history.can_redo());

        history.push(record("c"));
        assert!(!history.can_redo());
        let labels: Vec<&str> = history.records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "c"]);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut history = EditHistory::new(10);
        history.push(record("a"));
        history.push(record("b"));

        assert_eq!(history.step_back().unwrap().label, "b");
        assert_eq!(history.step_back().unwrap().label, "a");
        assert!(history.step_back().is_none());
        assert_eq!(history.step_forward().unwrap().label, "a");
    }

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut history = EditHistory::new(2);
        history.push(record("a"));
        history.push(record("b"));
        history.push(record("c"));
        let labels: Vec<&str> = history.records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
        assert_eq!(history.position, 2);
    }
}
