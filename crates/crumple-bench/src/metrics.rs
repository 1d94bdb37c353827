//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

use crumple_engine::PaperEngine;

use crate::runner::PlaybackReport;
use crate::scenarios::ScenarioKind;

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Integrator name.
    pub integrator: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Script steps executed.
    pub steps: u32,
    /// Clock ticks that ran.
    pub ticks_run: u32,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Folds that changed the target.
    pub fold_count: u32,
    /// Largest live-to-target distance at the end.
    pub final_residual: f32,
    /// Final kinetic energy (zero under eased interpolation).
    pub final_kinetic_energy: f64,
    /// Largest distance of a live vertex from the flat sheet.
    pub max_displacement: f32,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl BenchmarkMetrics {
    /// Summarizes a finished run.
    pub fn collect(
        kind: &ScenarioKind,
        engine: &PaperEngine,
        report: &PlaybackReport,
        total_wall_time: f64,
    ) -> Self {
        let status = engine.status();
        let times = &report.step_times;
        let avg_step_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };
        let min_step_time = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_step_time = times.iter().copied().fold(0.0, f64::max);

        Self {
            scenario: kind.name().to_string(),
            integrator: engine.integrator_name().to_string(),
            total_wall_time,
            steps: report.steps,
            ticks_run: report.ticks_run,
            avg_step_time,
            min_step_time: if times.is_empty() { 0.0 } else { min_step_time },
            max_step_time,
            fold_count: status.fold_count,
            final_residual: status.residual,
            final_kinetic_energy: status.kinetic_energy,
            max_displacement: engine.live().max_distance(&engine.mesh().rest),
            vertex_count: engine.mesh().vertex_count(),
            triangle_count: engine.mesh().triangle_count(),
        }
    }

    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,integrator,vertex_count,triangle_count,steps,ticks_run,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,fold_count,final_residual,final_ke,max_displacement".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{:.6e},{:.6e},{:.6}",
            self.scenario,
            self.integrator,
            self.vertex_count,
            self.triangle_count,
            self.steps,
            self.ticks_run,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.fold_count,
            self.final_residual,
            self.final_kinetic_energy,
            self.max_displacement,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
