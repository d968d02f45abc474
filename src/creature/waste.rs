//! Waste scheduling
//!
//! Two mutually exclusive timers: a randomized countdown until waste
//! appears (armed by feeding), then a count-up while it lingers. Waste
//! left past a randomized lag makes the creature ill.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;
use crate::creature::stage::LifeStage;

/// Uniform [min,max] seconds from feeding to waste appearing, by stage
fn countdown_range(stage: LifeStage) -> (Seconds, Seconds) {
    match stage {
        LifeStage::Egg => (0.0, 0.0),
        LifeStage::Baby => (1_500.0, 3_000.0),
        LifeStage::Child => (4_500.0, 9_000.0),
        LifeStage::Young => (6_600.0, 13_200.0),
        LifeStage::Adult => (6_600.0, 13_200.0),
        LifeStage::ReadyToAscend => (6_600.0, 13_200.0),
        LifeStage::Dead => (0.0, 0.0),
    }
}

/// Uniform [min,max] seconds waste may linger before illness, by stage
fn illness_lag_range(stage: LifeStage) -> (Seconds, Seconds) {
    match stage {
        LifeStage::Egg => (0.0, 0.0),
        LifeStage::Baby => (900.0, 1_800.0),
        LifeStage::Child => (1_800.0, 3_600.0),
        LifeStage::Young => (2_700.0, 5_400.0),
        LifeStage::Adult => (2_700.0, 5_400.0),
        LifeStage::ReadyToAscend => (2_700.0, 5_400.0),
        LifeStage::Dead => (0.0, 0.0),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteScheduler {
    has_pooped: bool,
    /// Countdown, meaningful only while clean; 0 means nothing scheduled
    time_until_poop: Seconds,
    /// Count-up, meaningful only while dirty
    time_since_poop: Seconds,
    /// Dirty seconds until illness triggers; drawn alongside the countdown
    illness_lag: Seconds,
    /// Stage at the time the countdown was last scheduled
    stage: LifeStage,
}

impl Default for WasteScheduler {
    fn default() -> Self {
        Self {
            has_pooped: false,
            time_until_poop: 0.0,
            time_since_poop: 0.0,
            illness_lag: 0.0,
            stage: LifeStage::Egg,
        }
    }
}

impl WasteScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the appearance countdown after a meal
    pub fn schedule_after_feeding<R: Rng>(&mut self, stage: LifeStage, rng: &mut R) {
        self.stage = stage;
        let (min, max) = countdown_range(stage);
        self.time_until_poop = if max > min { rng.gen_range(min..=max) } else { min };

        let (lag_min, lag_max) = illness_lag_range(stage);
        self.illness_lag = if lag_max > lag_min {
            rng.gen_range(lag_min..=lag_max)
        } else {
            lag_min
        };

        if self.time_until_poop > 0.0 {
            tracing::debug!(
                stage = %stage,
                in_seconds = self.time_until_poop,
                "waste scheduled"
            );
        }
    }

    /// Apply `dt` seconds of simulated time
    ///
    /// A countdown crossing zero carries the leftover into the lingering
    /// counter, so bulk updates match incremental ones.
    pub fn update(&mut self, dt: Seconds) {
        if self.has_pooped {
            self.time_since_poop += dt;
            return;
        }
        if self.time_until_poop <= 0.0 {
            return;
        }
        if self.time_until_poop > dt {
            self.time_until_poop -= dt;
        } else {
            let leftover = dt - self.time_until_poop;
            self.time_until_poop = 0.0;
            self.has_pooped = true;
            self.time_since_poop = leftover;
        }
    }

    pub fn has_pooped(&self) -> bool {
        self.has_pooped
    }

    pub fn time_until_poop(&self) -> Seconds {
        self.time_until_poop
    }

    /// Waste has lingered past its illness lag
    pub fn should_trigger_illness(&self) -> bool {
        self.has_pooped && self.illness_lag > 0.0 && self.time_since_poop >= self.illness_lag
    }

    /// Remove the waste; the next countdown is armed by the next feeding
    pub fn clean(&mut self) {
        self.has_pooped = false;
        self.time_since_poop = 0.0;
        self.time_until_poop = 0.0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_countdown_within_stage_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let mut waste = WasteScheduler::new();
            waste.schedule_after_feeding(LifeStage::Baby, &mut rng);
            assert!((1_500.0..=3_000.0).contains(&waste.time_until_poop()));

            waste.schedule_after_feeding(LifeStage::Child, &mut rng);
            assert!((4_500.0..=9_000.0).contains(&waste.time_until_poop()));
        }
    }

    #[test]
    fn test_egg_never_schedules() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut waste = WasteScheduler::new();
        waste.schedule_after_feeding(LifeStage::Egg, &mut rng);
        assert_eq!(waste.time_until_poop(), 0.0);

        waste.update(100_000.0);
        assert!(!waste.has_pooped());
    }

    #[test]
    fn test_countdown_then_linger() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut waste = WasteScheduler::new();
        waste.schedule_after_feeding(LifeStage::Baby, &mut rng);

        let countdown = waste.time_until_poop();
        waste.update(countdown - 1.0);
        assert!(!waste.has_pooped());

        // Crossing carries the 9s leftover into the lingering counter
        waste.update(10.0);
        assert!(waste.has_pooped());
        assert!((waste.time_since_poop - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_illness_trigger_and_clean() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut waste = WasteScheduler::new();
        waste.schedule_after_feeding(LifeStage::Baby, &mut rng);

        waste.update(waste.time_until_poop());
        assert!(waste.has_pooped());
        assert!(!waste.should_trigger_illness());

        // Lag range tops out at 1800s for Baby
        waste.update(1_800.0);
        assert!(waste.should_trigger_illness());

        waste.clean();
        assert!(!waste.has_pooped());
        assert!(!waste.should_trigger_illness());
        // Nothing scheduled until the next feeding
        waste.update(100_000.0);
        assert!(!waste.has_pooped());
    }
}
