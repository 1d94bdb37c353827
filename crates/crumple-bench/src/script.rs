//! Simulation scripts: an engine config, a run length, and the gestures
//! to fire along the way.
//!
//! ```toml
//! name = "corner_fold"
//! ticks = 120
//!
//! [config]
//! segments = 20
//!
//! [config.integrator]
//! kind = "eased"
//!
//! [[gestures]]
//! at_tick = 0
//! gesture = { kind = "fold", start = [1.0, 2.0], end = [2.0, 1.0] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crumple_engine::{EngineConfig, Gesture, ScheduledGesture};
use crumple_types::{CrumpleError, CrumpleResult};

/// A scripted engine run.
///
/// `at_tick` counts script steps, not clock ticks: an eased engine's
/// clock stops between animations while the script keeps stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationScript {
    pub name: String,
    /// Script steps to run.
    pub ticks: u32,
    pub config: EngineConfig,
    pub gestures: Vec<ScheduledGesture>,
}

impl Default for SimulationScript {
    fn default() -> Self {
        Self {
            name: "script".into(),
            ticks: 120,
            config: EngineConfig::default(),
            gestures: Vec::new(),
        }
    }
}

impl SimulationScript {
    pub fn new(name: &str, ticks: u32, config: EngineConfig) -> Self {
        Self {
            name: name.into(),
            ticks,
            config,
            gestures: Vec::new(),
        }
    }

    /// Appends a gesture fired before step `at_tick`.
    pub fn with_gesture(mut self, at_tick: u64, gesture: Gesture) -> Self {
        self.gestures.push(ScheduledGesture { at_tick, gesture });
        self
    }

    pub fn from_toml_str(text: &str) -> CrumpleResult<Self> {
        toml::from_str(text)
            .map_err(|e| CrumpleError::Serialization(format!("Invalid simulation script: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> CrumpleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> CrumpleResult<String> {
        toml::to_string(self)
            .map_err(|e| CrumpleError::Serialization(format!("Script serialization failed: {e}")))
    }

    /// Checks the engine config and that every gesture fires within the run.
    pub fn validate(&self) -> CrumpleResult<()> {
        self.config.validate()?;
        if let Some(late) = self.gestures.iter().find(|g| g.at_tick >= self.ticks as u64) {
            return Err(CrumpleError::InvalidConfig(format!(
                "gesture '{}' at tick {} is past the end of a {}-tick script",
                late.gesture.name(),
                late.at_tick,
                self.ticks
            )));
        }
        Ok(())
    }

    /// Gestures in firing order. Gestures sharing a tick keep their
    /// listed order.
    pub fn ordered_gestures(&self) -> Vec<&ScheduledGesture> {
        let mut ordered: Vec<_> = self.gestures.iter().collect();
        ordered.sort_by_key(|g| g.at_tick);
        ordered
    }
}
