//! CLI command implementations.

use crumple_bench::{BenchmarkMetrics, BenchmarkRunner, Scenario, ScenarioKind, SimulationScript};
use crumple_debug::StateSnapshot;
use crumple_engine::PaperEngine;
use crumple_render::JsonFrameExporter;
use crumple_telemetry::TracingSink;

/// Play a simulation script.
pub fn simulate(
    script_path: &str,
    output_path: Option<&str>,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crumple Simulation");
    println!("──────────────────");

    let script = SimulationScript::load(script_path)?;
    script.validate()?;
    println!("Script:     {} ({script_path})", script.name);
    println!("Steps:      {}", script.ticks);
    println!("Gestures:   {}", script.gestures.len());
    println!();

    let mut engine = PaperEngine::new(script.config.clone())?;
    engine.add_event_sink(Box::new(TracingSink::default()));
    if let Some(path) = output_path {
        engine.add_geometry_sink(Box::new(JsonFrameExporter::new(path)))?;
    }

    let report = BenchmarkRunner::play(&script, &mut engine)?;
    let snapshot = StateSnapshot::capture(&engine);
    engine.shutdown()?;

    let status = engine.status();
    println!("Integrator: {}", engine.integrator_name());
    println!("Ticks run:  {}", report.ticks_run);
    println!("Folds:      {} applied", report.folds_applied);
    println!("Puffed:     {}", status.is_puffed);
    println!("Residual:   {:.6}", status.residual);
    println!("Status:     {}", serde_json::to_string(&status)?);

    if let Some(path) = output_path {
        println!("Frames written to: {path}");
    }
    if let Some(path) = snapshot_path {
        snapshot.write_to(path)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crumple Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} segments, {} steps, {} gestures)",
            kind.name(),
            scenario.script.config.segments,
            scenario.script.ticks,
            scenario.script.gestures.len(),
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Ticks run:     {}", metrics.ticks_run);
        println!("  Residual:      {:.6e}", metrics.final_residual);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crumple Snapshot Inspector");
    println!("──────────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(path)?;

    println!("Tick:         {}", snapshot.tick);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Grid:         {0}×{0} ({1} vertices)", snapshot.segments, snapshot.vertex_count);
    println!("Folds:        {}", snapshot.fold_count);
    println!("Puffed:       {}", snapshot.is_puffed);

    match snapshot.validate() {
        Ok(()) => {
            let summary = snapshot.summary();
            let (min_z, max_z) = summary.live_z_range;
            println!("Z range:      [{:.4}, {:.4}]", min_z, max_z);
            println!("Residual:     {:.6}", summary.residual);
            println!("Max speed:    {:.6}", summary.max_speed);
        }
        Err(e) => println!("❌ Snapshot is inconsistent: {e}"),
    }

    Ok(())
}

/// Validate a simulation script.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Crumple Validator");
    println!("─────────────────");
    println!();

    if !path.ends_with(".toml") {
        println!("Unsupported file format. Use .toml (simulation script).");
        return Ok(());
    }

    println!("Validating script: {path}");
    let script = SimulationScript::load(path)?;
    match script.validate() {
        Ok(()) => println!(
            "✅ Script is valid ({} steps, {} gestures, {} vertices).",
            script.ticks,
            script.gestures.len(),
            script.config.vertex_count()
        ),
        Err(e) => println!("❌ Script validation failed: {e}"),
    }

    Ok(())
}
