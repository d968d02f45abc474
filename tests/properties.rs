//! Property-based checks over the stochastic and time-scaling pieces

use mochling::creature::needs::NeedGauge;
use mochling::creature::pet::Pet;
use mochling::creature::stage::LifeStage;
use mochling::creature::waste::WasteScheduler;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    /// Waste countdowns always land inside the stage's range
    #[test]
    fn waste_countdown_within_stage_range(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut waste = WasteScheduler::new();
        waste.schedule_after_feeding(LifeStage::Baby, &mut rng);
        prop_assert!(waste.time_until_poop() >= 1_500.0);
        prop_assert!(waste.time_until_poop() <= 3_000.0);

        waste.schedule_after_feeding(LifeStage::Child, &mut rng);
        prop_assert!(waste.time_until_poop() >= 4_500.0);
        prop_assert!(waste.time_until_poop() <= 9_000.0);

        waste.schedule_after_feeding(LifeStage::Young, &mut rng);
        prop_assert!(waste.time_until_poop() >= 6_600.0);
        prop_assert!(waste.time_until_poop() <= 13_200.0);
    }

    /// Eggs and the dead are inert under any amount of simulated time
    #[test]
    fn egg_ignores_any_dt(dt in 0.0..10_000_000.0f64, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pet = Pet::new();

        let events = pet.advance(dt, 0.5, &mut rng);
        prop_assert!(events.is_empty());
        prop_assert_eq!(pet.stage, LifeStage::Egg);
        prop_assert_eq!(pet.hunger.stars(), 3);
        prop_assert_eq!(pet.growth_points(), 0.0);
    }

    /// A bulk step and the same time in two halves agree on the gauges
    #[test]
    fn split_advance_matches_bulk(
        total in 1.0..5_000.0f64,
        split in 0.01..0.99f64,
        seed in any::<u64>(),
    ) {
        let mut rng_a = ChaCha8Rng::seed_from_u64(seed);
        let mut rng_b = ChaCha8Rng::seed_from_u64(seed);

        let mut bulk = Pet::new();
        bulk.hatch();
        bulk.advance(total, 0.5, &mut rng_a);

        let mut halves = Pet::new();
        halves.hatch();
        halves.advance(total * split, 0.5, &mut rng_b);
        halves.advance(total * (1.0 - split), 0.5, &mut rng_b);

        prop_assert_eq!(bulk.hunger.stars(), halves.hunger.stars());
        prop_assert_eq!(bulk.boredom.stars(), halves.boredom.stars());
        prop_assert_eq!(bulk.stage, halves.stage);
        let drift = (bulk.growth_points() - halves.growth_points()).abs();
        prop_assert!(drift < 1e-6, "growth drift {}", drift);
    }
}
