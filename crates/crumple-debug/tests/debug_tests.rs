//! Integration tests for crumple-debug.

use crumple_debug::StateSnapshot;
use crumple_engine::{EngineConfig, PaperEngine};
use crumple_math::Vec2;

fn folded_engine() -> PaperEngine {
    let mut config = EngineConfig::spring();
    config.segments = 3;
    let mut engine = PaperEngine::new(config).unwrap();
    engine.fold(Vec2::new(0.0, 1.0), Vec2::new(0.0, -1.0));
    engine.toggle_puff();
    engine.run_ticks(12).unwrap();
    engine
}

#[test]
fn capture_matches_engine() {
    let engine = folded_engine();
    let snap = StateSnapshot::capture(&engine);

    assert_eq!(snap.tick, 12);
    assert_eq!(snap.fold_count, 1);
    assert!(snap.is_puffed);
    assert_eq!(snap.segments, 3);
    assert_eq!(snap.vertex_count, 16);
    assert_eq!(snap.live.len(), 48);
    assert_eq!(&snap.live_buffer(), engine.live());
    assert_eq!(&snap.target_buffer(), engine.target());
    snap.validate().unwrap();
}

#[test]
fn snapshot_round_trip() {
    let snap = StateSnapshot::capture(&folded_engine());
    let bytes = snap.to_bytes().unwrap();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(recovered, snap);
}

#[test]
fn corrupt_bytes_rejected() {
    assert!(StateSnapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn summary_of_flat_sheet() {
    let engine = PaperEngine::new(EngineConfig::eased()).unwrap();
    let summary = StateSnapshot::capture(&engine).summary();
    assert_eq!(summary.live_z_range, (0.0, 0.0));
    assert_eq!(summary.residual, 0.0);
    assert_eq!(summary.max_speed, 0.0);
}

#[test]
fn summary_tracks_motion() {
    let summary = StateSnapshot::capture(&folded_engine()).summary();
    assert!(summary.residual > 0.0);
    assert!(summary.max_speed > 0.0);
    assert!(summary.live_z_range.1 > summary.live_z_range.0);
}

#[test]
fn validate_catches_truncation() {
    let mut snap = StateSnapshot::capture(&folded_engine());
    snap.velocities.pop();
    assert!(snap.validate().is_err());
}

#[test]
fn file_round_trip() {
    let snap = StateSnapshot::capture(&folded_engine());
    let path = std::env::temp_dir().join(format!("crumple_snapshot_{}.bin", std::process::id()));
    snap.write_to(&path).unwrap();
    let recovered = StateSnapshot::read_from(&path).unwrap();
    assert_eq!(recovered.tick, snap.tick);
    assert_eq!(recovered.live, snap.live);
    let _ = std::fs::remove_file(&path);
}
