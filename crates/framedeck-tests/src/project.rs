//! Integration tests for the project service across the document model.
//!
//! Exercises cross-crate interactions between the pool, the timeline, and
//! the service layer.

use framedeck_core::CountingGenerator;
use framedeck_pool::{MediaKind, MediaStatus};
use framedeck_project::{MemoryStorage, ProjectDocument, ProjectService, ThumbnailRef};
use framedeck_timeline::{
    MasterClip, MediaClip, NestedClip, ResourceKind, SequenceKind, SequenceResource, TrackItem,
};

// ── Helpers ────────────────────────────────────────────────────

fn service() -> ProjectService {
    ProjectService::new(
        Box::new(MemoryStorage::new()),
        Box::new(CountingGenerator::default()),
    )
}

fn place_clip(doc: &mut ProjectDocument, sequence_id: &str, media_id: &str, secs: f64) {
    let seq = doc.sequences.get_mut(sequence_id).unwrap();
    seq.composition.tracks[0].append(TrackItem::Media(MediaClip::new(
        format!("clip-{media_id}"),
        media_id,
        secs,
    )));
}

// ── Project GC ─────────────────────────────────────────────────

#[test]
fn optimize_reclaims_unreferenced_media_and_thumbnails() {
    let service = service();
    let mut doc = service.create_project("GC");
    let active = doc.active_sequence_id.clone();

    let used = service.add_media(&mut doc, MediaKind::Video, "Used", "/m/used.mp4");
    let unused = service.add_media(&mut doc, MediaKind::Video, "Unused", "/m/unused.mp4");
    {
        let pool = &mut doc.media_pool;
        let mut next = pool.items[&used].clone();
        next.metadata.file_size = 100_000_000;
        *pool = pool.add_item(next);
        let mut next = pool.items[&unused].clone();
        next.metadata.file_size = 200_000_000;
        *pool = pool.add_item(next);
    }
    doc.cache.thumbnails.insert(
        unused.clone(),
        ThumbnailRef {
            path: "/cache/unused.jpg".to_string(),
            width: 160,
            height: 90,
            generated_at: 0,
        },
    );
    place_clip(&mut doc, &active, &used, 4.0);

    let report = service.optimize_project(&mut doc);
    assert_eq!(report.removed_items, 1);
    assert_eq!(report.freed_space, 200_000_000);
    assert!(doc.media_pool.items.contains_key(&used));
    assert!(!doc.media_pool.items.contains_key(&unused));
    assert!(!doc.cache.thumbnails.contains_key(&unused));
}

#[test]
fn optimize_spans_all_sequences_not_just_the_active_one() {
    let service = service();
    let mut doc = service.create_project("Multi");
    let second = service.add_sequence(&mut doc, "Second", SequenceKind::Main);

    let only_in_second = service.add_media(&mut doc, MediaKind::Video, "B", "/m/b.mp4");
    place_clip(&mut doc, &second, &only_in_second, 2.0);

    let report = service.optimize_project(&mut doc);
    assert_eq!(report.removed_items, 0);
    assert!(doc.media_pool.items.contains_key(&only_in_second));
}

// ── Validation ─────────────────────────────────────────────────

#[test]
fn validation_covers_missing_media_and_dangling_refs() {
    let service = service();
    let mut doc = service.create_project("Check");
    let active = doc.active_sequence_id.clone();

    let id = service.add_media(&mut doc, MediaKind::Video, "Gone", "/videos/missing.mp4");
    let mut broken = doc.media_pool.items[&id].clone();
    broken.status = MediaStatus::Missing;
    doc.media_pool = doc.media_pool.add_item(broken);

    // Nested clip with no master-clip entry at all.
    let seq = doc.sequences.get_mut(&active).unwrap();
    seq.composition.tracks[0].append(TrackItem::Nested(NestedClip::new("n1", "mc-ghost", 3.0)));

    let report = service.validate_project(&doc);
    assert!(!report.is_valid);
    assert_eq!(report.missing_media, vec!["/videos/missing.mp4"]);
    assert!(report.issues.iter().any(|i| i.contains("mc-ghost")));
}

// ── Nested sequences ───────────────────────────────────────────

#[test]
fn nested_clip_resolves_across_the_document() {
    let service = service();
    let mut doc = service.create_project("Nested");
    let active = doc.active_sequence_id.clone();
    let nested = service.add_sequence(&mut doc, "Compound opener", SequenceKind::Nested);

    let seq = doc.sequences.get_mut(&active).unwrap();
    seq.composition
        .master_clips
        .push(MasterClip::new("mc1", &nested, "Opener", 1.0, 9.0));
    seq.composition.tracks[0].append(TrackItem::Nested(NestedClip::new("n1", "mc1", 8.0)));

    // Two hops: clip -> master clip -> sequence.
    let seq = &doc.sequences[&active];
    let master = seq.master_clip("mc1").unwrap();
    assert_eq!(master.trimmed_duration_secs(), 8.0);
    assert!(doc.sequences.contains_key(&master.sequence_id));
    assert!(service.validate_project(&doc).is_valid);
}

// ── Resource namespace independence ────────────────────────────

#[test]
fn resources_never_leak_between_sequences() {
    let service = service();
    let mut doc = service.create_project("Isolation");
    let a = doc.active_sequence_id.clone();
    let b = service.add_sequence(&mut doc, "Other", SequenceKind::Main);

    doc.sequences
        .get_mut(&a)
        .unwrap()
        .resources
        .insert(SequenceResource::Effect {
            id: "fx1".to_string(),
            name: "Glow".to_string(),
            parameters: [("radius".to_string(), 12.0)].into_iter().collect(),
        });

    assert!(doc.sequences[&a].resources.get(ResourceKind::Effect, "fx1").is_some());
    assert!(doc.sequences[&b].resources.get(ResourceKind::Effect, "fx1").is_none());
}

// ── Backups ────────────────────────────────────────────────────

#[test]
fn backups_trim_to_retention_and_stay_ordered() {
    let service = service();
    let mut doc = service.create_project("Backups");
    doc.backup.auto_save.keep_versions = 2;

    for _ in 0..3 {
        service.create_backup(&mut doc, "/p/project.fdk").unwrap();
    }
    assert_eq!(doc.backup.versions.len(), 2);
    assert!(doc.backup.versions[0].timestamp <= doc.backup.versions[1].timestamp);
}
