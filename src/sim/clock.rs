//! Tick orchestration
//!
//! [`SimulationClock`] owns the pet and everything around it: wall-time
//! scaling, the sleep window, edge detection against the previous tick's
//! snapshot, the alert gate, and sampled autosaves. Ordering within a
//! tick is fixed: decay, edges, render, persistence.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alerts::{AlertCategory, NotificationGate};
use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{Seconds, WallMillis};
use crate::creature::needs::NeedGauge;
use crate::creature::pet::{Pet, PetEvent};
use crate::creature::stage::LifeStage;
use crate::creature::personality::PersonalityKind;
use crate::items::ingredient::Ingredient;
use crate::items::room::RoomStyle;
use crate::persist::{load_json, store_json, StateStore, LAST_SAVE_KEY, SAVE_KEY};
use crate::sim::settings::Settings;

/// Simulated-seconds-per-wall-second multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimSpeed {
    #[default]
    RealTime,
    Fast,
    VeryFast,
    Instant,
    Debug,
}

impl SimSpeed {
    pub fn factor(self) -> u64 {
        match self {
            SimSpeed::RealTime => 1,
            SimSpeed::Fast => 10,
            SimSpeed::VeryFast => 60,
            SimSpeed::Instant => 600,
            SimSpeed::Debug => 1000,
        }
    }
}

impl fmt::Display for SimSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

impl FromStr for SimSpeed {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "realtime" => Ok(SimSpeed::RealTime),
            "10" | "fast" => Ok(SimSpeed::Fast),
            "60" | "veryfast" => Ok(SimSpeed::VeryFast),
            "600" | "instant" => Ok(SimSpeed::Instant),
            "1000" | "debug" => Ok(SimSpeed::Debug),
            other => Err(format!(
                "unknown speed '{other}' (expected 1, 10, 60, 600 or 1000)"
            )),
        }
    }
}

/// Everything surfaced by one tick
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    Pet(PetEvent),
    AlertFired(AlertCategory),
}

/// Observed state from the end of the previous tick, for edge detection
#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    hunger_stars: u8,
    boredom_stars: u8,
    ill: bool,
    stage: LifeStage,
}

impl Snapshot {
    fn of(pet: &Pet) -> Self {
        Snapshot {
            hunger_stars: pet.hunger.stars(),
            boredom_stars: pet.boredom.stars(),
            ill: pet.illness.is_ill(),
            stage: pet.stage,
        }
    }
}

pub struct SimulationClock<S: StateStore> {
    pet: Pet,
    settings: Settings,
    gate: NotificationGate<crate::alerts::LogSink>,
    store: S,
    rng: ChaCha8Rng,
    config: SimConfig,
    speed: SimSpeed,
    last_update: Option<WallMillis>,
    snapshot: Snapshot,
    render: Option<Box<dyn FnMut(&Pet)>>,
}

impl<S: StateStore> SimulationClock<S> {
    /// Restore the pet and settings from the store; a missing or corrupt
    /// save starts fresh.
    pub fn new(store: S, seed: u64, config: SimConfig) -> Result<Self> {
        let pet: Pet = load_json(&store, SAVE_KEY)?.unwrap_or_default();
        let settings = Settings::load(&store)?;
        let snapshot = Snapshot::of(&pet);
        Ok(SimulationClock {
            gate: NotificationGate::new(config.alert_cooldown_ms),
            pet,
            settings,
            store,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            speed: SimSpeed::RealTime,
            last_update: None,
            snapshot,
            render: None,
        })
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn speed(&self) -> SimSpeed {
        self.speed
    }

    /// Takes effect on the next tick; already-elapsed time is not rescaled
    pub fn set_speed(&mut self, speed: SimSpeed) {
        self.speed = speed;
        tracing::info!(%speed, "simulation speed changed");
    }

    pub fn set_render(&mut self, render: Box<dyn FnMut(&Pet)>) {
        self.render = Some(render);
    }

    pub fn is_asleep(&self, now: WallMillis) -> bool {
        self.settings
            .sleep
            .is_asleep(now, self.settings.utc_offset_hours)
    }

    /// Apply the simulated time that passed while the process was down,
    /// as one bulk update. Call once before the first tick.
    pub fn catch_up_offline(&mut self, now: WallMillis) -> Vec<SimEvent> {
        let Some(last_save) = self.load_last_save_time() else {
            self.last_update = Some(now);
            return Vec::new();
        };
        let elapsed_ms = now.saturating_sub(last_save);
        let dt = elapsed_ms as Seconds / 1000.0 * self.speed.factor() as Seconds;
        self.last_update = Some(now);
        if dt <= 0.0 {
            return Vec::new();
        }
        tracing::info!(offline_s = dt, "applying offline catch-up");
        self.advance_and_detect(dt, now)
    }

    /// One simulation step against real wall time
    pub fn tick(&mut self, now: WallMillis) -> Vec<SimEvent> {
        let elapsed_ms = match self.last_update {
            Some(last) => now.saturating_sub(last),
            None => 0,
        };
        self.last_update = Some(now);
        let dt = elapsed_ms as Seconds / 1000.0 * self.speed.factor() as Seconds;

        // sleep runs on unscaled wall time
        self.settings.sleep.advance(now);

        let mut events = if self.is_asleep(now) {
            Vec::new()
        } else {
            self.advance_and_detect(dt, now)
        };

        if let Some(render) = self.render.as_mut() {
            render(&self.pet);
        }

        if self.rng.gen::<f64>() < self.config.autosave_chance {
            // best effort: a failed autosave never interrupts the tick
            if let Err(err) = self.save(now) {
                tracing::warn!(error = %err, "autosave failed");
            }
        }

        events.shrink_to_fit();
        events
    }

    fn advance_and_detect(&mut self, dt: Seconds, now: WallMillis) -> Vec<SimEvent> {
        let pet_events = self
            .pet
            .advance(dt, self.config.neglect_growth_penalty, &mut self.rng);

        let mut events: Vec<SimEvent> = pet_events.iter().cloned().map(SimEvent::Pet).collect();
        self.detect_edges(&pet_events, now, &mut events);
        self.snapshot = Snapshot::of(&self.pet);
        events
    }

    fn notify(&mut self, category: AlertCategory, now: WallMillis, out: &mut Vec<SimEvent>) {
        if self.gate.notify(category, &self.settings.alerts, now) {
            out.push(SimEvent::AlertFired(category));
        }
    }

    fn detect_edges(&mut self, pet_events: &[PetEvent], now: WallMillis, out: &mut Vec<SimEvent>) {
        let prev = self.snapshot;
        let hunger_stars = self.pet.hunger.stars();
        let boredom_stars = self.pet.boredom.stars();

        // star-crossing edges, once per crossing
        if prev.hunger_stars > 1 && hunger_stars == 1 {
            self.notify(AlertCategory::AttentionLow, now, out);
        }
        if prev.hunger_stars > 0 && hunger_stars == 0 {
            self.notify(AlertCategory::AttentionCritical, now, out);
        }
        if prev.boredom_stars > 1 && boredom_stars == 1 {
            self.notify(AlertCategory::AttentionLow, now, out);
        }
        if prev.boredom_stars > 0 && boredom_stars == 0 {
            self.notify(AlertCategory::AttentionCritical, now, out);
        }
        if !prev.ill && self.pet.illness.is_ill() {
            self.notify(AlertCategory::Illness, now, out);
        }

        // level rules; the cooldown spaces out repeats
        let near_death = [
            self.pet.hunger.time_until_death(),
            self.pet.illness.time_until_death(),
        ]
        .into_iter()
        .flatten()
        .any(|t| t <= self.config.near_death_window_s);
        if self.pet.stage.is_alive() && near_death {
            self.notify(AlertCategory::NearDeath, now, out);
        }

        let evolved = pet_events
            .iter()
            .any(|e| matches!(e, PetEvent::Evolved { .. }));
        let ascension_ready =
            self.pet.stage == LifeStage::ReadyToAscend && self.pet.growth_progress() >= 1.0;
        if evolved || ascension_ready {
            self.notify(AlertCategory::Evolution, now, out);
        }

        if prev.stage != LifeStage::Dead && self.pet.stage == LifeStage::Dead {
            self.notify(AlertCategory::Death, now, out);
        }
    }

    /// Persist the pet and the save timestamp
    pub fn save(&mut self, now: WallMillis) -> Result<()> {
        store_json(&mut self.store, SAVE_KEY, &self.pet)?;
        self.store
            .write(LAST_SAVE_KEY, now.to_string().as_bytes())?;
        self.settings.save(&mut self.store)?;
        Ok(())
    }

    fn load_last_save_time(&self) -> Option<WallMillis> {
        let bytes = match self.store.read(LAST_SAVE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "could not read last save time");
                return None;
            }
        };
        match std::str::from_utf8(&bytes).ok().and_then(|s| s.trim().parse().ok()) {
            Some(ms) => Some(ms),
            None => {
                tracing::warn!("discarding unreadable last save time");
                None
            }
        }
    }

    // -- user interactions ---------------------------------------------
    // Each one counts as attention: it refreshes the temporary wake-up
    // window when the pet is in its automatic sleep period.

    fn interact(&mut self, now: WallMillis) {
        self.settings
            .sleep
            .temporary_wake(now, self.config.temporary_wake_ms);
    }

    pub fn feed(
        &mut self,
        ingredient: &Ingredient,
        now: WallMillis,
    ) -> std::result::Result<(), crate::creature::pet::FeedRefusal> {
        self.interact(now);
        self.pet.feed_with_ingredient(ingredient, now, &mut self.rng)
    }

    pub fn play(
        &mut self,
        personality: PersonalityKind,
        score_pct: u8,
        now: WallMillis,
    ) -> Vec<Ingredient> {
        self.interact(now);
        self.pet.play(personality, score_pct, now)
    }

    pub fn clean_waste(&mut self, now: WallMillis) {
        self.interact(now);
        self.pet.clean_waste();
    }

    pub fn cure(&mut self, now: WallMillis) {
        self.interact(now);
        self.pet.cure();
    }

    pub fn hatch(&mut self, now: WallMillis) -> bool {
        self.interact(now);
        self.pet.hatch()
    }

    pub fn revive(&mut self, now: WallMillis) -> bool {
        self.interact(now);
        self.pet.revive()
    }

    pub fn redecorate(&mut self, style: &RoomStyle, now: WallMillis) {
        self.interact(now);
        self.pet.redecorate(style, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemStore;

    fn clock() -> SimulationClock<MemStore> {
        let mut config = SimConfig::default();
        config.autosave_chance = 0.0;
        SimulationClock::new(MemStore::new(), 7, config).unwrap()
    }

    /// Noon UTC, well outside the default sleep window
    const NOON: WallMillis = 12 * 3_600_000;

    #[test]
    fn test_first_tick_applies_no_time() {
        let mut clock = clock();
        clock.hatch(NOON);
        let stars_before = clock.pet().hunger.stars();
        clock.tick(NOON);
        assert_eq!(clock.pet().hunger.stars(), stars_before);
    }

    #[test]
    fn test_speed_scales_elapsed_time() {
        let mut clock = clock();
        clock.hatch(NOON);
        clock.set_speed(SimSpeed::Debug);
        clock.tick(NOON);
        // 1 wall second at 1000x = 1000 simulated seconds, past the
        // Baby 900 s-per-star hunger step
        clock.tick(NOON + 1_000);
        assert_eq!(clock.pet().hunger.stars(), 2);
    }

    #[test]
    fn test_asleep_tick_freezes_simulation() {
        let mut clock = clock();
        clock.hatch(NOON);
        clock.set_speed(SimSpeed::Debug);
        let night = 23 * 3_600_000;
        clock.tick(night);
        clock.tick(night + 60_000);
        assert_eq!(clock.pet().hunger.stars(), 3);
    }

    #[test]
    fn test_star_crossing_fires_single_alert() {
        let mut clock = clock();
        clock.hatch(NOON);
        clock.tick(NOON);
        clock.set_speed(SimSpeed::Debug);
        // 1800 simulated seconds: hunger 3 -> 1 in one step
        let events = clock.tick(NOON + 1_800);
        let low_alerts = events
            .iter()
            .filter(|e| matches!(e, SimEvent::AlertFired(AlertCategory::AttentionLow)))
            .count();
        assert_eq!(clock.pet().hunger.stars(), 1);
        assert_eq!(low_alerts, 1);
    }

    #[test]
    fn test_offline_catch_up_with_no_save_is_noop() {
        let mut clock = clock();
        clock.hatch(NOON);
        assert!(clock.catch_up_offline(NOON + 86_400_000).is_empty());
        assert_eq!(clock.pet().hunger.stars(), 3);
    }

    #[test]
    fn test_save_and_restore_round_trip() {
        let mut store = MemStore::new();
        {
            let mut config = SimConfig::default();
            config.autosave_chance = 0.0;
            let mut clock = SimulationClock::new(
                std::mem::take(&mut store),
                7,
                config.clone(),
            )
            .unwrap();
            clock.hatch(NOON);
            clock.save(NOON).unwrap();
            store = clock.store;
        }
        let mut config = SimConfig::default();
        config.autosave_chance = 0.0;
        let restored = SimulationClock::new(store, 8, config).unwrap();
        assert_eq!(restored.pet().stage, LifeStage::Baby);
    }

    #[test]
    fn test_speed_parsing() {
        assert_eq!("10".parse::<SimSpeed>().unwrap(), SimSpeed::Fast);
        assert_eq!("debug".parse::<SimSpeed>().unwrap(), SimSpeed::Debug);
        assert!("7".parse::<SimSpeed>().is_err());
    }
}
