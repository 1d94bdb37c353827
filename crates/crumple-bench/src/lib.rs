//! # crumple-bench
//!
//! Scripted runs of the paper engine.
//!
//! Provides TOML simulation scripts, five canonical scenarios, a runner
//! that plays scripts against an engine, and metric collection with CSV
//! export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;
pub mod script;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, PlaybackReport};
pub use scenarios::{Scenario, ScenarioKind};
pub use script::SimulationScript;
