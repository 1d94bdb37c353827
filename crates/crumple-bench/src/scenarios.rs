//! Benchmark scenarios: canonical scripts for regression testing.
//!
//! 1. **Flat settle**: Untouched sheet; the spring should stay at rest
//! 2. **Corner fold**: One diagonal fold across the top-right corner
//! 3. **Fold then puff**: Eased fold, inflated once it has landed
//! 4. **Repeated folds**: Four folds in quick succession, each
//!    retargeting mid-motion
//! 5. **Breathing**: Puffed sheet under the spring's breathing term

use serde::{Deserialize, Serialize};

use crumple_engine::{EngineConfig, Gesture};

use crate::script::SimulationScript;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    FlatSettle,
    CornerFold,
    FoldThenPuff,
    RepeatedFolds,
    Breathing,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FlatSettle,
            ScenarioKind::CornerFold,
            ScenarioKind::FoldThenPuff,
            ScenarioKind::RepeatedFolds,
            ScenarioKind::Breathing,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FlatSettle => "flat_settle",
            ScenarioKind::CornerFold => "corner_fold",
            ScenarioKind::FoldThenPuff => "fold_then_puff",
            ScenarioKind::RepeatedFolds => "repeated_folds",
            ScenarioKind::Breathing => "breathing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub script: SimulationScript,
}

fn fold(start: [f32; 2], end: [f32; 2]) -> Gesture {
    Gesture::Fold { start, end }
}

impl Scenario {
    /// 20×20 spring sheet left alone for one second.
    pub fn flat_settle() -> Self {
        Self {
            kind: ScenarioKind::FlatSettle,
            script: SimulationScript::new("flat_settle", 60, EngineConfig::spring()),
        }
    }

    /// Folds the corner beyond `x + y = 3` over and lets the spring settle
    /// for three seconds.
    pub fn corner_fold() -> Self {
        let script = SimulationScript::new("corner_fold", 180, EngineConfig::spring())
            .with_gesture(0, fold([1.0, 2.0], [2.0, 1.0]));
        Self {
            kind: ScenarioKind::CornerFold,
            script,
        }
    }

    /// Eased half fold, puffed after the animation has landed.
    pub fn fold_then_puff() -> Self {
        let script = SimulationScript::new("fold_then_puff", 120, EngineConfig::eased())
            .with_gesture(0, fold([0.0, 1.0], [0.0, -1.0]))
            .with_gesture(45, Gesture::TogglePuff);
        Self {
            kind: ScenarioKind::FoldThenPuff,
            script,
        }
    }

    /// A fold every half second, each before the previous one settles.
    pub fn repeated_folds() -> Self {
        let script = SimulationScript::new("repeated_folds", 180, EngineConfig::spring())
            .with_gesture(0, fold([0.0, 1.0], [0.0, -1.0]))
            .with_gesture(30, fold([-1.0, 0.0], [1.0, 0.0]))
            .with_gesture(60, fold([-1.0, -1.0], [1.0, 1.0]))
            .with_gesture(90, fold([0.0, -1.0], [0.0, 1.0]));
        Self {
            kind: ScenarioKind::RepeatedFolds,
            script,
        }
    }

    /// Puffed flat sheet breathing for five seconds.
    pub fn breathing() -> Self {
        let script = SimulationScript::new("breathing", 300, EngineConfig::spring())
            .with_gesture(0, Gesture::TogglePuff);
        Self {
            kind: ScenarioKind::Breathing,
            script,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::FlatSettle => Self::flat_settle(),
            ScenarioKind::CornerFold => Self::corner_fold(),
            ScenarioKind::FoldThenPuff => Self::fold_then_puff(),
            ScenarioKind::RepeatedFolds => Self::repeated_folds(),
            ScenarioKind::Breathing => Self::breathing(),
        }
    }
}
