//! Boredom gauge
//!
//! Same cadence as hunger but never lethal on its own; it only drags the
//! growth rate down while at zero stars.

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;
use crate::creature::needs::{NeedGauge, MAX_STARS};
use crate::creature::stage::LifeStage;

/// Seconds per lost star, by stage
fn seconds_per_star(stage: LifeStage) -> Seconds {
    match stage {
        LifeStage::Egg => 0.0,
        LifeStage::Baby => 900.0,
        LifeStage::Child => 3_000.0,
        LifeStage::Young => 3_600.0,
        LifeStage::Adult => 3_600.0,
        LifeStage::ReadyToAscend => 3_600.0,
        LifeStage::Dead => 0.0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boredom {
    stars: u8,
    time_to_next_level: Seconds,
}

impl Boredom {
    pub fn new(stage: LifeStage) -> Self {
        Self {
            stars: MAX_STARS,
            time_to_next_level: seconds_per_star(stage),
        }
    }

    /// Each minigame restores one star
    pub fn entertain(&mut self) {
        self.stars = (self.stars + 1).min(MAX_STARS);
    }

    /// Visual indicator threshold (1 star or less)
    pub fn is_bored(&self) -> bool {
        self.stars <= 1
    }

    /// Growth penalty threshold (0 stars)
    pub fn is_badly_cared(&self) -> bool {
        self.stars == 0
    }

    pub fn is_fully_entertained(&self) -> bool {
        self.stars == MAX_STARS
    }

    /// Seconds until the stars run out at the stage's cadence. `None`
    /// when the stage has no decay.
    pub fn time_until_empty(&self, stage: LifeStage) -> Option<Seconds> {
        if self.stars == 0 {
            return Some(0.0);
        }
        let per_star = seconds_per_star(stage);
        if per_star <= 0.0 {
            return None;
        }
        Some(self.time_to_next_level + (self.stars - 1) as Seconds * per_star)
    }
}

impl NeedGauge for Boredom {
    fn stars(&self) -> u8 {
        self.stars
    }

    fn time_until_death(&self) -> Option<Seconds> {
        None
    }

    fn update(&mut self, dt: Seconds, stage: LifeStage) {
        let per_star = seconds_per_star(stage);
        let mut remaining = dt;

        while remaining > 0.0 && self.stars > 0 {
            if per_star <= 0.0 {
                return;
            }
            if self.time_to_next_level > remaining {
                self.time_to_next_level -= remaining;
                return;
            }
            remaining -= self.time_to_next_level;
            self.stars -= 1;
            self.time_to_next_level = per_star;
        }
    }

    fn on_stage_change(&mut self, stage: LifeStage) {
        self.time_to_next_level = seconds_per_star(stage);
    }

    fn reset(&mut self) {
        self.stars = MAX_STARS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_stops_at_zero() {
        let mut boredom = Boredom::new(LifeStage::Baby);
        boredom.update(10_000.0, LifeStage::Baby);
        assert_eq!(boredom.stars(), 0);
        assert_eq!(boredom.time_until_death(), None);
    }

    #[test]
    fn test_entertain_adds_one_star() {
        let mut boredom = Boredom::new(LifeStage::Baby);
        boredom.update(2_700.0, LifeStage::Baby);
        assert_eq!(boredom.stars(), 0);

        boredom.entertain();
        assert_eq!(boredom.stars(), 1);
        boredom.entertain();
        boredom.entertain();
        boredom.entertain();
        assert_eq!(boredom.stars(), 3);
    }

    #[test]
    fn test_bulk_equals_incremental() {
        let mut bulk = Boredom::new(LifeStage::Child);
        let mut steps = Boredom::new(LifeStage::Child);

        bulk.update(7_000.0, LifeStage::Child);
        for _ in 0..7 {
            steps.update(1_000.0, LifeStage::Child);
        }

        assert_eq!(bulk.stars(), steps.stars());
    }
}
