//! Integration tests for the analysis-engine boundary.
//!
//! The engine itself is external; these tests drive the contract with a
//! stub and verify that results land on the pool item like the real
//! caller would store them.

use framedeck_core::Result;
use framedeck_media::{
    AnalysisEngine, AnalysisOperation, AnalysisReport, AnalysisRequest, DetectedScene,
    MediaMetadata, SilenceRange,
};
use framedeck_pool::{MediaKind, MediaPool, MediaPoolItem};

struct FixtureEngine;

impl AnalysisEngine for FixtureEngine {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let mut report = AnalysisReport::default();
        match request.operation {
            AnalysisOperation::Probe => {
                report.metadata = Some(MediaMetadata {
                    duration_secs: 92.4,
                    frame_rate: 25.0,
                    width: 3840,
                    height: 2160,
                    codec: "hevc".to_string(),
                    bit_rate: Some(45_000_000),
                    file_size: 520_000_000,
                    created_date: 1_700_000_000,
                    modified_date: 1_700_000_100,
                    imported_date: 1_700_000_200,
                });
            }
            AnalysisOperation::SceneDetect => {
                report.scenes = vec![
                    DetectedScene {
                        start_secs: 0.0,
                        end_secs: 41.0,
                        confidence: 0.95,
                    },
                    DetectedScene {
                        start_secs: 41.0,
                        end_secs: 92.4,
                        confidence: 0.88,
                    },
                ];
            }
            AnalysisOperation::SilenceDetect => {
                report.silences = vec![SilenceRange {
                    start_secs: 10.0,
                    end_secs: 12.5,
                    mean_level_db: -51.0,
                }];
            }
            _ => {}
        }
        Ok(report)
    }
}

#[test]
fn probe_results_are_stored_on_the_pool_item() {
    let engine = FixtureEngine;
    let item = MediaPoolItem::new("m1", MediaKind::Video, "Drone master", "/m/drone.mov");

    let report = engine
        .analyze(&AnalysisRequest::new(
            AnalysisOperation::Probe,
            item.source.path.clone(),
        ))
        .unwrap();

    // The caller attaches the probed metadata and re-adds the item.
    let mut probed = item.clone();
    probed.metadata = report.metadata.unwrap();
    let pool = MediaPool::new().add_item(probed);

    let stored = &pool.items["m1"];
    assert_eq!(stored.metadata.codec, "hevc");
    assert_eq!(stored.metadata.resolution(), "3840x2160");
    assert_eq!(pool.stats.total_size, 520_000_000);
}

#[test]
fn scene_and_silence_results_respect_requested_operation() {
    let engine = FixtureEngine;

    let scenes = engine
        .analyze(&AnalysisRequest::new(
            AnalysisOperation::SceneDetect,
            "/m/drone.mov",
        ))
        .unwrap();
    assert_eq!(scenes.scenes.len(), 2);
    assert!(scenes.silences.is_empty());

    let silences = engine
        .analyze(&AnalysisRequest::new(
            AnalysisOperation::SilenceDetect,
            "/m/drone.mov",
        ))
        .unwrap();
    assert_eq!(silences.silences.len(), 1);
    assert!(silences.scenes.is_empty());
}
