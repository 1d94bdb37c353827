//! Benchmark runner: plays scripts against an engine and collects metrics.

use std::time::Instant;

use tracing::{debug, info};

use crumple_engine::{GestureOutcome, PaperEngine};
use crumple_types::CrumpleResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};
use crate::script::SimulationScript;

/// What happened while a script played.
#[derive(Debug, Clone, Default)]
pub struct PlaybackReport {
    /// Script steps taken.
    pub steps: u32,
    /// Clock ticks that actually ran (fewer than `steps` once an eased
    /// animation has settled).
    pub ticks_run: u32,
    pub gestures_applied: u32,
    /// Fold gestures that changed the target.
    pub folds_applied: u32,
    /// Wall-clock time of each step (seconds).
    pub step_times: Vec<f64>,
}

/// Runs scripts and benchmark scenarios.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Plays `script` on an existing engine, one engine step per script step.
    ///
    /// Gestures scheduled for step `n` fire before that step's tick.
    pub fn play(script: &SimulationScript, engine: &mut PaperEngine) -> CrumpleResult<PlaybackReport> {
        let gestures = script.ordered_gestures();
        let mut next = 0;
        let mut report = PlaybackReport {
            step_times: Vec::with_capacity(script.ticks as usize),
            ..Default::default()
        };

        for step in 0..script.ticks {
            while let Some(scheduled) = gestures.get(next).filter(|g| g.at_tick <= step as u64) {
                let outcome = engine.apply(&scheduled.gesture)?;
                debug!(step, gesture = scheduled.gesture.name(), ?outcome, "gesture applied");
                if let GestureOutcome::Fold(fold) = outcome {
                    report.folds_applied += fold.is_applied() as u32;
                }
                report.gestures_applied += 1;
                next += 1;
            }

            let start = Instant::now();
            report.ticks_run += engine.step()?;
            report.step_times.push(start.elapsed().as_secs_f64());
            report.steps += 1;
        }

        Ok(report)
    }

    /// Run a single scenario on a fresh engine.
    pub fn run(scenario: &Scenario) -> CrumpleResult<BenchmarkMetrics> {
        let script = &scenario.script;
        script.validate()?;
        let mut engine = PaperEngine::new(script.config.clone())?;

        let total_start = Instant::now();
        let report = Self::play(script, &mut engine)?;
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let metrics = BenchmarkMetrics::collect(&scenario.kind, &engine, &report, total_wall_time);
        info!(
            scenario = %metrics.scenario,
            wall_time = metrics.total_wall_time,
            residual = metrics.final_residual,
            "scenario finished"
        );
        Ok(metrics)
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> CrumpleResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
