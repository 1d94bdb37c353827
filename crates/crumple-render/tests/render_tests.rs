//! Integration tests for crumple-render.

use crumple_mesh::generators;
use crumple_render::json_exporter::AnimationData;
use crumple_render::{GeometryFrame, GeometrySink, HeadlessSink, JsonFrameExporter};

#[test]
fn headless_init() {
    let mesh = generators::build(2, 1.0).unwrap();
    let mut sink = HeadlessSink::new();
    sink.init(&mesh.topology).unwrap();
    assert_eq!(sink.name(), "headless");
    assert_eq!(sink.frame_count(), 0);
    assert_eq!(sink.last_tick(), None);
}

#[test]
fn headless_counts_frames() {
    let mesh = generators::build(2, 1.0).unwrap();
    let mut sink = HeadlessSink::new();
    sink.init(&mesh.topology).unwrap();

    sink.on_geometry_changed(&GeometryFrame::new(3, &mesh.rest, &mesh.topology))
        .unwrap();
    sink.on_geometry_changed(&GeometryFrame::new(4, &mesh.rest, &mesh.topology))
        .unwrap();
    assert_eq!(sink.frame_count(), 2);
    assert_eq!(sink.last_tick(), Some(4));
    sink.finalize().unwrap();
}

#[test]
fn json_exporter_records_frames() {
    let mesh = generators::build(3, 2.0).unwrap();
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(&mesh.topology).unwrap();

    let mut moved = mesh.rest.clone();
    moved.pos_z[0] = 0.5;
    exporter
        .on_geometry_changed(&GeometryFrame::new(0, &mesh.rest, &mesh.topology))
        .unwrap();
    exporter
        .on_geometry_changed(&GeometryFrame::new(1, &moved, &mesh.topology))
        .unwrap();
    assert_eq!(exporter.frame_count(), 2);

    let data = exporter.animation();
    assert_eq!(data.vertex_count, 16);
    assert_eq!(data.triangle_count, 18);
    assert_eq!(data.indices.len(), 54);
    assert_eq!(data.lines, mesh.topology.line_indices);
    assert_eq!(data.frames[1].tick, 1);
    assert_eq!(data.frames[1].positions.len(), 48);
    assert_eq!(data.frames[1].positions[2], 0.5);
}

#[test]
fn json_exporter_rejects_mismatched_frame() {
    let small = generators::build(1, 1.0).unwrap();
    let large = generators::build(2, 1.0).unwrap();
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(&small.topology).unwrap();

    let result = exporter.on_geometry_changed(&GeometryFrame::new(0, &large.rest, &large.topology));
    assert!(result.is_err());
    assert_eq!(exporter.frame_count(), 0);
}

#[test]
fn json_exporter_writes_file() {
    let mesh = generators::build(2, 1.0).unwrap();
    let path = std::env::temp_dir().join(format!("crumple_render_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&mesh.topology).unwrap();
    exporter
        .on_geometry_changed(&GeometryFrame::new(7, &mesh.rest, &mesh.topology))
        .unwrap();
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let data: AnimationData = serde_json::from_str(&text).unwrap();
    assert_eq!(data.vertex_count, 9);
    assert_eq!(data.frames.len(), 1);
    assert_eq!(data.frames[0].tick, 7);
    let _ = std::fs::remove_file(&path);
}
