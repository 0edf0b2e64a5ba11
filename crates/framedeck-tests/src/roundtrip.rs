//! Persistence round-trip tests against real files.

use framedeck_core::CountingGenerator;
use framedeck_pool::MediaKind;
use framedeck_project::{FsStorage, ProjectService};
use framedeck_timeline::{Marker, SequenceKind, SequenceResource};

fn fs_service() -> ProjectService {
    ProjectService::new(Box::new(FsStorage), Box::new(CountingGenerator::default()))
}

#[test]
fn save_open_roundtrip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.fdk");
    let path = path.to_string_lossy().to_string();

    let service = fs_service();
    let mut doc = service.create_project("Disk");
    let active = doc.active_sequence_id.clone();
    service.add_media(&mut doc, MediaKind::Video, "Clip", "/m/clip.mp4");
    service.add_sequence(&mut doc, "Titles", SequenceKind::Nested);
    let bin = service.create_bin(&mut doc, "Selects", None).unwrap();

    let seq = doc.sequences.get_mut(&active).unwrap();
    seq.resources.insert(SequenceResource::ColorGrade {
        id: "cg1".to_string(),
        name: "Film look".to_string(),
        lift: -0.02,
        gamma: 1.1,
        gain: 0.98,
        saturation: 1.05,
    });
    seq.add_marker(Marker::new("mk1", "Review note", 12.5));

    service.save_project(&doc, &path).unwrap();
    let loaded = service.open_project(&path).unwrap();

    assert_eq!(loaded, doc);
    assert!(loaded.media_pool.bins.contains_key(&bin.id));
    assert_eq!(loaded.sequences.len(), 2);
}

#[test]
fn project_file_stores_keyed_collections_as_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pairs.fdk");
    let path = path.to_string_lossy().to_string();

    let service = fs_service();
    let mut doc = service.create_project("Pairs");
    service.add_media(&mut doc, MediaKind::Image, "Slate", "/m/slate.png");
    service.save_project(&doc, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for collection in [
        &value["project"]["media_pool"]["items"],
        &value["project"]["media_pool"]["bins"],
        &value["project"]["sequences"],
        &value["project"]["cache"]["thumbnails"],
    ] {
        assert!(collection.is_array(), "keyed collections persist as pair lists");
    }
    // Each entry is a [key, value] pair.
    let first_item = &value["project"]["media_pool"]["items"][0];
    assert!(first_item[0].is_string());
    assert!(first_item[1].is_object());
}

#[test]
fn open_failure_leaves_no_document() {
    let service = fs_service();
    let err = service.open_project("/nowhere/at/all.fdk");
    assert!(err.is_err());
}
