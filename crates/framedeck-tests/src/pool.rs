//! Integration tests for the media pool and smart collections.

use framedeck_pool::{
    FilterCriterion, MediaKind, MediaPool, MediaPoolItem, MediaStatus, SmartCollection,
    ROOT_BIN_ID,
};

// ── Helpers ────────────────────────────────────────────────────

fn item(id: &str, name: &str) -> MediaPoolItem {
    MediaPoolItem::new(id, MediaKind::Video, name, &format!("/footage/{id}.mp4"))
}

fn populated_pool() -> MediaPool {
    let (pool, interviews) = MediaPool::new().create_bin("bin-int", "Interviews", None);
    let mut a = item("m1", "CEO interview");
    a.bin_id = interviews.id.clone();
    a.tags.insert("interview".to_string());
    let mut b = item("m2", "B-roll drone pass");
    b.notes = Some("sunset over the harbor".to_string());
    let mut c = item("m3", "Archive scan");
    c.status = MediaStatus::Offline;
    pool.add_item(a).add_item(b).add_item(c)
}

// ── Pool operations ────────────────────────────────────────────

#[test]
fn added_items_are_found_in_their_bins() {
    let pool = populated_pool();
    assert_eq!(pool.items_in_bin("bin-int").len(), 1);
    assert_eq!(pool.items_in_bin(ROOT_BIN_ID).len(), 2);
}

#[test]
fn usage_updates_accumulate_per_sequence() {
    let pool = populated_pool()
        .update_item_usage("m1", "seqA", true)
        .update_item_usage("m1", "seqB", true)
        .update_item_usage("m1", "seqA", true); // idempotent

    let usage = &pool.items["m1"].usage;
    assert_eq!(usage.count, 2);
    assert_eq!(
        usage.sequences.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["seqA", "seqB"]
    );
}

#[test]
fn search_spans_name_tags_and_notes() {
    let pool = populated_pool();
    assert_eq!(pool.search("INTERVIEW").len(), 1);
    assert_eq!(pool.search("harbor").len(), 1);
    assert_eq!(pool.search("archive").len(), 1);
    assert!(pool.search("nothing matches this").is_empty());
}

#[test]
fn stats_follow_item_mutations() {
    let mut big = item("m4", "Huge master");
    big.metadata.file_size = 5_000_000_000;
    let pool = populated_pool().add_item(big);
    assert_eq!(pool.stats.total_items, 4);
    assert_eq!(pool.stats.total_size, 5_000_000_000);
    assert_eq!(pool.stats.offline, 1);

    let (pool, _) = pool.remove_item("m4");
    assert_eq!(pool.stats.total_items, 3);
    assert_eq!(pool.stats.total_size, 0);
}

// ── Smart collections ──────────────────────────────────────────

#[test]
fn smart_collection_reflects_pool_changes_without_storage() {
    let mut offline = SmartCollection::new("sc", "Offline media");
    offline.criteria.push(FilterCriterion::Offline);

    let pool = populated_pool();
    assert_eq!(offline.evaluate(&pool).len(), 1);

    let mut fixed = pool.items["m3"].clone();
    fixed.status = MediaStatus::Online;
    let pool = pool.add_item(fixed);
    assert!(offline.evaluate(&pool).is_empty());
}
