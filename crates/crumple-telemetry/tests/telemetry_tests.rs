//! Integration tests for crumple-telemetry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crumple_telemetry::bus::EventBus;
use crumple_telemetry::events::{EventKind, PaperEvent};
use crumple_telemetry::sinks::{CallbackSink, EventSink, TracingSink, VecSink};

fn fold_event(tick: u64, fold_count: u32) -> PaperEvent {
    PaperEvent::new(
        tick,
        EventKind::FoldApplied {
            fold_count,
            moved_vertices: 12,
        },
    )
}

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(fold_event(3, 1));
    bus.emit(PaperEvent::new(4, EventKind::PuffToggled { is_puffed: true }));
    assert!(sink.is_empty(), "events are queued until flush");

    assert_eq!(bus.flush(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], fold_event(3, 1));
    assert_eq!(events[1].kind, EventKind::PuffToggled { is_puffed: true });
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(PaperEvent::new(0, EventKind::Reset));
    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(PaperEvent::new(1, EventKind::Reset));
    bus.flush();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}

#[test]
fn callback_sink_observes() {
    let folds = Arc::new(AtomicUsize::new(0));
    let counter = folds.clone();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CallbackSink::new("haptics", move |event: &PaperEvent| {
        if let EventKind::FoldApplied { .. } = event.kind {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    })));

    bus.emit(fold_event(0, 1));
    bus.emit(PaperEvent::new(0, EventKind::PuffToggled { is_puffed: true }));
    bus.emit(fold_event(5, 2));
    bus.flush();
    assert_eq!(folds.load(Ordering::SeqCst), 2);
}

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::default().name(), "tracing_sink");
    assert_eq!(CallbackSink::new("ui", |_: &PaperEvent| {}).name(), "ui");
}

#[test]
fn tracing_sink_handles_without_subscriber() {
    let mut sink = TracingSink::new(tracing::Level::DEBUG);
    sink.handle(&PaperEvent::new(7, EventKind::MotionSettled { ticks: 30 }));
    sink.finalize();
}

#[test]
fn feedback_classification() {
    assert!(fold_event(0, 1).is_feedback());
    assert!(PaperEvent::new(0, EventKind::PuffToggled { is_puffed: false }).is_feedback());
    assert!(!PaperEvent::new(0, EventKind::Reset).is_feedback());
    assert!(!PaperEvent::new(0, EventKind::MotionSettled { ticks: 1 }).is_feedback());
}

#[test]
fn event_serialization() {
    let event = fold_event(5, 3);
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"fold_applied\""));
    let recovered: PaperEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn unknown_event_type_is_rejected() {
    let json = r#"{"tick":1,"kind":{"type":"custom","label":"x","payload":"{}"}}"#;
    assert!(serde_json::from_str::<PaperEvent>(json).is_err());
}
