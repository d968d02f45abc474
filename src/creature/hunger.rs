//! Hunger gauge
//!
//! Stars tick down on a per-stage cadence. At zero stars a death countdown
//! starts; feeding resets it.

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

/// Seconds of starvation (at zero stars) before death, by stage
fn death_countdown(stage: LifeStage) -> Seconds {
    match stage {
        LifeStage::Egg => 0.0,
        LifeStage::Baby => 600.0,
        LifeStage::Child => 3_600.0,
        LifeStage::Young => 7_200.0,
        LifeStage::Adult => 7_200.0,
        LifeStage::ReadyToAscend => 7_200.0,
        LifeStage::Dead => 0.0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunger {
    stars: u8,
    time_to_next_level: Seconds,
    death_timer: Seconds,
    death_threshold: Seconds,
}

impl Hunger {
    pub fn new(stage: LifeStage) -> Self {
        Self {
            stars: MAX_STARS,
            time_to_next_level: seconds_per_star(stage),
            death_timer: 0.0,
            death_threshold: 0.0,
        }
    }

    /// Restore stars (clamped to 3) and clear the death countdown
    pub fn satiate(&mut self, satiation_stars: u8) {
        self.stars = (self.stars + satiation_stars).min(MAX_STARS);
        self.death_timer = 0.0;
    }

    /// Visual indicator threshold (1 star or less)
    pub fn is_hungry(&self) -> bool {
        self.stars <= 1
    }

    /// Growth penalty threshold (0 stars)
    pub fn is_badly_cared(&self) -> bool {
        self.stars == 0
    }

    pub fn is_fully_satiated(&self) -> bool {
        self.stars == MAX_STARS
    }

    pub fn is_dying(&self) -> bool {
        self.stars == 0 && self.death_threshold > 0.0 && self.death_timer >= self.death_threshold
    }

    pub fn time_to_next_loss(&self) -> Seconds {
        self.time_to_next_level
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

impl NeedGauge for Hunger {
    fn stars(&self) -> u8 {
        self.stars
    }

    fn time_until_death(&self) -> Option<Seconds> {
        if self.stars > 0 {
            return None;
        }
        Some((self.death_threshold - self.death_timer).max(0.0))
    }

    fn update(&mut self, dt: Seconds, stage: LifeStage) {
        let per_star = seconds_per_star(stage);
        let mut remaining = dt;

        while remaining > 0.0 {
            if self.stars == 0 {
                self.death_timer += remaining;
                return;
            }
            // Stage with no decay cadence: nothing to consume
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
            if self.stars == 0 {
                self.death_threshold = death_countdown(stage);
                self.death_timer = 0.0;
            }
        }
    }

    fn on_stage_change(&mut self, stage: LifeStage) {
        self.time_to_next_level = seconds_per_star(stage);
    }

    fn reset(&mut self) {
        self.stars = MAX_STARS;
        self.death_timer = 0.0;
        self.death_threshold = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full() {
        let hunger = Hunger::new(LifeStage::Baby);
        assert_eq!(hunger.stars(), 3);
        assert!(hunger.is_fully_satiated());
        assert_eq!(hunger.time_until_death(), None);
    }

    #[test]
    fn test_star_cadence_baby() {
        let mut hunger = Hunger::new(LifeStage::Baby);
        hunger.update(899.0, LifeStage::Baby);
        assert_eq!(hunger.stars(), 3);
        hunger.update(1.0, LifeStage::Baby);
        assert_eq!(hunger.stars(), 2);
    }

    #[test]
    fn test_bulk_equals_incremental() {
        let mut bulk = Hunger::new(LifeStage::Baby);
        let mut steps = Hunger::new(LifeStage::Baby);

        bulk.update(3_600.0, LifeStage::Baby);
        for _ in 0..3_600 {
            steps.update(1.0, LifeStage::Baby);
        }

        assert_eq!(bulk.stars(), steps.stars());
        assert!((bulk.time_to_next_loss() - steps.time_to_next_loss()).abs() < 1e-6);
        // 3600s at 900s/star empties all three stars and starts the
        // death countdown for the remaining 900s
        assert_eq!(bulk.stars(), 0);
        let bulk_death = bulk.time_until_death().unwrap();
        let steps_death = steps.time_until_death().unwrap();
        assert!((bulk_death - steps_death).abs() < 1e-6);
    }

    #[test]
    fn test_death_countdown_and_satiate_reset() {
        let mut hunger = Hunger::new(LifeStage::Baby);
        hunger.update(2_700.0, LifeStage::Baby); // exactly empties the stars
        assert_eq!(hunger.stars(), 0);
        assert!(!hunger.is_dying());

        hunger.update(599.0, LifeStage::Baby);
        assert!(!hunger.is_dying());
        hunger.update(1.0, LifeStage::Baby);
        assert!(hunger.is_dying());

        hunger.satiate(1);
        assert_eq!(hunger.stars(), 1);
        assert!(!hunger.is_dying());
        assert_eq!(hunger.time_until_death(), None);
    }

    #[test]
    fn test_satiate_clamps() {
        let mut hunger = Hunger::new(LifeStage::Baby);
        hunger.satiate(3);
        assert_eq!(hunger.stars(), 3);
    }
}
