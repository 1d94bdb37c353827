//! Integration tests for crumple-bench.

use crumple_bench::{BenchmarkMetrics, BenchmarkRunner, Scenario, ScenarioKind, SimulationScript};
use crumple_engine::{EngineConfig, Gesture, PaperEngine};
use crumple_solver::IntegratorKind;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 5);
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind);
        assert_eq!(scenario.kind, kind);
        assert_eq!(scenario.script.name, kind.name());
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        scenario.script.validate().unwrap();
    }
    assert_eq!(ScenarioKind::from_name("sphere_drape"), None);
}

#[test]
fn fold_then_puff_is_eased() {
    let s = Scenario::fold_then_puff();
    assert_eq!(s.script.config.integrator.kind, IntegratorKind::Eased);
    assert_eq!(s.script.gestures.len(), 2);
    assert_eq!(s.script.gestures[1].gesture, Gesture::TogglePuff);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_flat_settle() {
    let metrics = BenchmarkRunner::run(&Scenario::flat_settle()).unwrap();
    assert_eq!(metrics.scenario, "flat_settle");
    assert_eq!(metrics.steps, 60);
    assert_eq!(metrics.ticks_run, 60);
    assert_eq!(metrics.fold_count, 0);
    assert_eq!(metrics.final_residual, 0.0);
    assert_eq!(metrics.max_displacement, 0.0);
    assert_eq!(metrics.vertex_count, 441);
    assert_eq!(metrics.triangle_count, 800);
}

#[test]
fn run_corner_fold_settles() {
    let metrics = BenchmarkRunner::run(&Scenario::corner_fold()).unwrap();
    assert_eq!(metrics.fold_count, 1);
    assert!(metrics.max_displacement > 0.1);
    assert!(metrics.final_residual < 1e-2, "residual {}", metrics.final_residual);
    assert!(metrics.total_wall_time >= 0.0);
}

#[test]
fn run_fold_then_puff_halts_between_animations() {
    let metrics = BenchmarkRunner::run(&Scenario::fold_then_puff()).unwrap();
    assert_eq!(metrics.integrator, "eased_interpolator");
    assert_eq!(metrics.steps, 120);
    // Two 30-tick animations; the clock idles in between and after.
    assert_eq!(metrics.ticks_run, 60);
    assert_eq!(metrics.final_residual, 0.0);
    assert_eq!(metrics.final_kinetic_energy, 0.0);
}

#[test]
fn run_repeated_folds() {
    let metrics = BenchmarkRunner::run(&Scenario::repeated_folds()).unwrap();
    assert!(metrics.fold_count >= 3);
}

#[test]
fn run_breathing_keeps_moving() {
    let metrics = BenchmarkRunner::run(&Scenario::breathing()).unwrap();
    assert_eq!(metrics.fold_count, 0);
    assert!(metrics.final_kinetic_energy > 0.0);
}

#[test]
fn play_counts_gestures() {
    let mut config = EngineConfig::spring();
    config.segments = 4;
    let script = SimulationScript::new("custom", 10, config.clone())
        .with_gesture(3, Gesture::Fold {
            start: [0.0, 1.0],
            end: [0.0, -1.0],
        })
        .with_gesture(3, Gesture::Fold {
            start: [9.0, 1.0],
            end: [9.0, -1.0],
        })
        .with_gesture(1, Gesture::TogglePuff);

    let mut engine = PaperEngine::new(config).unwrap();
    let report = BenchmarkRunner::play(&script, &mut engine).unwrap();
    assert_eq!(report.steps, 10);
    assert_eq!(report.ticks_run, 10);
    assert_eq!(report.gestures_applied, 3);
    assert_eq!(report.folds_applied, 1);
    assert_eq!(report.step_times.len(), 10);
    assert!(engine.is_puffed());
}

// ─── Script Tests ─────────────────────────────────────────────

#[test]
fn script_from_toml() {
    let script = SimulationScript::from_toml_str(
        r#"
        name = "demo"
        ticks = 90

        [config]
        segments = 10

        [config.integrator]
        kind = "eased"
        duration = 0.25

        [[gestures]]
        at_tick = 40
        gesture = { kind = "toggle_puff" }

        [[gestures]]
        at_tick = 5
        gesture = { kind = "fold", start = [0.0, 1.0], end = [0.0, -1.0] }
        "#,
    )
    .unwrap();
    assert_eq!(script.name, "demo");
    assert_eq!(script.ticks, 90);
    assert_eq!(script.config.segments, 10);
    assert_eq!(script.config.integrator.total_steps(), 15);
    script.validate().unwrap();

    let ordered: Vec<u64> = script.ordered_gestures().iter().map(|g| g.at_tick).collect();
    assert_eq!(ordered, vec![5, 40]);
}

#[test]
fn script_rejects_late_gesture() {
    let script = SimulationScript::new("late", 10, EngineConfig::default())
        .with_gesture(10, Gesture::Reset);
    assert!(script.validate().is_err());
}

#[test]
fn script_rejects_bad_toml() {
    assert!(SimulationScript::from_toml_str("ticks = \"many\"").is_err());
}

#[test]
fn script_toml_round_trip() {
    let script = Scenario::repeated_folds().script;
    let text = script.to_toml_string().unwrap();
    let recovered = SimulationScript::from_toml_str(&text).unwrap();
    assert_eq!(recovered.name, script.name);
    assert_eq!(recovered.gestures.len(), 4);
    assert_eq!(recovered.config.segments, script.config.segments);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics(name: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: name.into(),
        integrator: "damped_spring".into(),
        total_wall_time: 1.5,
        steps: 100,
        ticks_run: 100,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        fold_count: 2,
        final_residual: 1e-4,
        final_kinetic_energy: 1e-5,
        max_displacement: 0.5,
        vertex_count: 441,
        triangle_count: 800,
    }
}

#[test]
fn metrics_csv_output() {
    let row = sample_metrics("test").to_csv_row();
    assert!(row.starts_with("test,damped_spring,441,800,100,100,"));
    let columns = BenchmarkMetrics::to_csv_header().split(',').count();
    assert_eq!(row.split(',').count(), columns);
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics("a"), sample_metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario,"));
}

#[test]
fn metrics_json_round_trip() {
    let json = serde_json::to_string(&sample_metrics("test")).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.steps, 100);
    assert_eq!(recovered.fold_count, 2);
}
