//! Illness state
//!
//! Contracted from lingering waste. While ill, a per-stage death timer
//! runs until the creature is cured or dies.

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;
use crate::creature::stage::LifeStage;

/// Seconds of untreated illness before death, by stage
fn death_countdown(stage: LifeStage) -> Seconds {
    match stage {
        LifeStage::Egg => 0.0,
        LifeStage::Baby => 600.0,
        LifeStage::Child => 1_800.0,
        LifeStage::Young => 3_600.0,
        LifeStage::Adult => 3_600.0,
        LifeStage::ReadyToAscend => 3_600.0,
        LifeStage::Dead => 0.0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Illness {
    ill: bool,
    time_since_ill: Seconds,
    /// Stage at the moment of contraction; fixes the death timer even if
    /// the creature evolves while sick
    stage: LifeStage,
}

impl Default for Illness {
    fn default() -> Self {
        Self {
            ill: false,
            time_since_ill: 0.0,
            stage: LifeStage::Baby,
        }
    }
}

impl Illness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: Seconds) {
        if self.ill {
            self.time_since_ill += dt;
        }
    }

    pub fn contract(&mut self, stage: LifeStage) {
        self.ill = true;
        self.time_since_ill = 0.0;
        self.stage = stage;
    }

    pub fn cure(&mut self) {
        self.ill = false;
        self.time_since_ill = 0.0;
    }

    pub fn is_ill(&self) -> bool {
        self.ill
    }

    pub fn is_dying(&self) -> bool {
        self.ill && self.time_since_ill >= death_countdown(self.stage)
    }

    pub fn time_until_death(&self) -> Option<Seconds> {
        if !self.ill {
            return None;
        }
        Some((death_countdown(self.stage) - self.time_since_ill).max(0.0))
    }
}
