//! Smart collections: saved queries over the pool.
//!
//! A smart collection never stores item ids — it is recomputed from its
//! criteria on every read.

use serde::{Deserialize, Serialize};

use crate::item::{MediaKind, MediaPoolItem, MediaStatus};
use crate::pool::MediaPool;

/// One filter criterion. A closed set so that the evaluator can handle
/// every case exhaustively and the criterion round-trips through the
/// project file (an arbitrary predicate closure could not).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCriterion {
    /// Item kind equals.
    Kind(MediaKind),
    /// Item carries this tag (exact, case-insensitive).
    HasTag(String),
    /// Rating within `min..=max`; unrated items never match.
    RatingRange { min: u8, max: u8 },
    /// Imported between the two unix timestamps, inclusive.
    DateRange { from: u64, to: u64 },
    /// Usage hint says no sequence references the item.
    Unused,
    /// Status is offline or missing.
    Offline,
    /// A proxy file has been generated.
    HasProxy,
    /// Name contains the given substring, case-insensitive.
    NameContains(String),
}

impl FilterCriterion {
    /// Whether one item satisfies this criterion.
    pub fn matches(&self, item: &MediaPoolItem) -> bool {
        match self {
            Self::Kind(kind) => item.kind == *kind,
            Self::HasTag(tag) => item
                .tags
                .iter()
                .any(|t| t.eq_ignore_ascii_case(tag)),
            Self::RatingRange { min, max } => {
                item.rating.is_some_and(|r| r >= *min && r <= *max)
            }
            Self::DateRange { from, to } => {
                let imported = item.metadata.imported_date;
                imported >= *from && imported <= *to
            }
            Self::Unused => item.usage.count == 0,
            Self::Offline => {
                matches!(item.status, MediaStatus::Offline | MediaStatus::Missing)
            }
            Self::HasProxy => item.proxy_path.is_some(),
            Self::NameContains(fragment) => item
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
        }
    }
}

/// A saved filter over the media pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartCollection {
    pub id: String,
    pub name: String,
    /// All criteria must match (AND semantics).
    pub criteria: Vec<FilterCriterion>,
}

impl SmartCollection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            criteria: Vec::new(),
        }
    }

    /// Recompute the collection's members against the current pool.
    pub fn evaluate<'a>(&self, pool: &'a MediaPool) -> Vec<&'a MediaPoolItem> {
        pool.items
            .values()
            .filter(|item| self.criteria.iter().all(|c| c.matches(item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: MediaKind) -> MediaPoolItem {
        MediaPoolItem::new(id, kind, id.to_uppercase(), &format!("/m/{id}"))
    }

    #[test]
    fn test_evaluate_is_recomputed_per_read() {
        let mut rated = item("a", MediaKind::Video);
        rated.set_rating(4);

        let pool = MediaPool::new().add_item(rated).add_item(item("b", MediaKind::Video));

        let mut favorites = SmartCollection::new("sc1", "Favorites");
        favorites.criteria.push(FilterCriterion::RatingRange { min: 4, max: 5 });
        assert_eq!(favorites.evaluate(&pool).len(), 1);

        // Rating the second item changes the next read with no collection edit.
        let mut b = pool.items["b"].clone();
        b.set_rating(5);
        let pool = pool.add_item(b);
        assert_eq!(favorites.evaluate(&pool).len(), 2);
    }

    #[test]
    fn test_criteria_are_anded() {
        let mut a = item("a", MediaKind::Video);
        a.tags.insert("drone".to_string());
        let pool = MediaPool::new()
            .add_item(a)
            .add_item(item("b", MediaKind::Audio));

        let mut sc = SmartCollection::new("sc1", "Drone video");
        sc.criteria.push(FilterCriterion::Kind(MediaKind::Video));
        sc.criteria.push(FilterCriterion::HasTag("Drone".to_string()));

        let hits = sc.evaluate(&pool);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn test_unused_and_proxy_criteria() {
        let mut used = item("a", MediaKind::Video);
        used.usage.mark_used("seq1", 10);
        let mut proxied = item("b", MediaKind::Video);
        proxied.proxy_path = Some("/proxies/b.mov".to_string());

        let pool = MediaPool::new().add_item(used).add_item(proxied);

        let mut unused = SmartCollection::new("sc1", "Unused");
        unused.criteria.push(FilterCriterion::Unused);
        assert_eq!(unused.evaluate(&pool)[0].id, "b");

        let mut with_proxy = SmartCollection::new("sc2", "Proxied");
        with_proxy.criteria.push(FilterCriterion::HasProxy);
        assert_eq!(with_proxy.evaluate(&pool)[0].id, "b");
    }
}
