//! Ordered-pair serialization for keyed collections.
//!
//! Every keyed collection in the project file (pool items, bins, sequences,
//! thumbnail cache, per-sequence resources) is persisted as an ordered list
//! of `[key, value]` pairs rather than a native JSON object. This keeps the
//! on-disk format independent of any runtime's map semantics and guarantees
//! a stable iteration order within one process.
//!
//! Use with `#[serde(with = "framedeck_core::pairs")]` on an
//! `IndexMap<String, V>` field.

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize an `IndexMap` as `[[key, value], ...]` in insertion order.
pub fn serialize<V, S>(map: &IndexMap<String, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(map.len()))?;
    for entry in map.iter() {
        seq.serialize_element(&entry)?;
    }
    seq.end()
}

/// Deserialize `[[key, value], ...]` back into an `IndexMap`, preserving
/// pair order. Duplicate keys are last-write-wins, matching pool insertion
/// semantics.
pub fn deserialize<'de, V, D>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let pairs = Vec::<(String, V)>::deserialize(deserializer)?;
    Ok(pairs.into_iter().collect())
}
