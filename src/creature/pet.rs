//! Creature aggregate
//!
//! Owns the life stage, growth points, needs, waste scheduler, memory
//! ledger and inventory, and applies simulated time to all of them. The
//! whole aggregate serializes as the opaque save blob.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Seconds, WallMillis};
use crate::creature::boredom::Boredom;
use crate::creature::hunger::Hunger;
use crate::creature::illness::Illness;
use crate::creature::memory::{MemoryKind, MemoryLedger};
use crate::creature::needs::NeedGauge;
use crate::creature::personality::{mix_personality, Personality, PersonalityKind};
use crate::creature::stage::LifeStage;
use crate::creature::waste::WasteScheduler;
use crate::items::ingredient::Ingredient;
use crate::items::inventory::Inventory;
use crate::items::room::RoomStyle;

/// Events surfaced by one update, for logging and UI
#[derive(Debug, Clone, PartialEq)]
pub enum PetEvent {
    Evolved {
        to: LifeStage,
        personality: Option<Personality>,
    },
    FellIll,
    Died {
        cause: DeathCause,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Starvation,
    Illness,
}

/// Why a feeding attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRefusal {
    IsEgg,
    AlreadyFull,
    OutOfStock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub stage: LifeStage,
    growth_points: Seconds,
    pub hunger: Hunger,
    pub boredom: Boredom,
    pub waste: WasteScheduler,
    pub illness: Illness,
    pub personality: Option<Personality>,
    pub ledger: MemoryLedger,
    pub inventory: Inventory,
    /// Set when either need hits zero stars; consumed at the next evolution
    was_neglected: bool,
    pub current_room: String,
}

impl Default for Pet {
    fn default() -> Self {
        Self::new()
    }
}

impl Pet {
    pub fn new() -> Self {
        Self {
            stage: LifeStage::Egg,
            growth_points: 0.0,
            hunger: Hunger::new(LifeStage::Egg),
            boredom: Boredom::new(LifeStage::Egg),
            waste: WasteScheduler::new(),
            illness: Illness::new(),
            personality: None,
            ledger: MemoryLedger::new(),
            inventory: Inventory::new(),
            was_neglected: false,
            current_room: RoomStyle::default_style().identifier,
        }
    }

    pub fn growth_points(&self) -> Seconds {
        self.growth_points
    }

    /// Growth progress toward the next stage, 0..=1
    pub fn growth_progress(&self) -> f64 {
        if self.stage >= LifeStage::ReadyToAscend {
            return 1.0;
        }
        let threshold = self.stage.growth_threshold();
        if threshold <= 0.0 {
            return 0.0;
        }
        (self.growth_points / threshold).min(1.0)
    }

    fn should_evolve(&self) -> bool {
        // Egg hatches by tap, never by time
        if self.stage == LifeStage::Egg || self.stage >= LifeStage::ReadyToAscend {
            return false;
        }
        self.growth_points >= self.stage.growth_threshold()
    }

    /// Apply `dt` seconds of simulated time
    ///
    /// `penalty` is the per-need growth multiplier while badly cared for
    /// (SimConfig::neglect_growth_penalty). No-op for eggs and the dead.
    /// One bulk call must equal the same total applied in small steps, so
    /// offline catch-up shares this path.
    pub fn advance<R: Rng>(&mut self, dt: Seconds, penalty: f64, rng: &mut R) -> Vec<PetEvent> {
        let mut events = Vec::new();
        if self.stage == LifeStage::Egg || self.stage == LifeStage::Dead || dt <= 0.0 {
            return events;
        }

        // Gauge-empty times before the update define where the growth
        // rate drops, so one bulk step accrues the same growth as many
        // small steps crossing the same boundaries
        let hunger_empty_in = self.hunger.time_until_empty(self.stage);
        let boredom_empty_in = self.boredom.time_until_empty(self.stage);

        self.hunger.update(dt, self.stage);
        self.boredom.update(dt, self.stage);
        self.waste.update(dt);
        self.illness.update(dt);

        if self.hunger.stars() == 0 || self.boredom.stars() == 0 {
            self.was_neglected = true;
        }

        self.growth_points +=
            integrate_growth(dt, penalty, hunger_empty_in, boredom_empty_in);

        if self.should_evolve() {
            let personality = self.evolve(rng);
            events.push(PetEvent::Evolved {
                to: self.stage,
                personality,
            });
        }

        if self.waste.should_trigger_illness() && !self.illness.is_ill() {
            self.illness.contract(self.stage);
            tracing::info!("creature fell ill from lingering waste");
            events.push(PetEvent::FellIll);
        }

        if self.hunger.is_dying() {
            self.die();
            events.push(PetEvent::Died {
                cause: DeathCause::Starvation,
            });
        } else if self.illness.is_dying() {
            self.die();
            events.push(PetEvent::Died {
                cause: DeathCause::Illness,
            });
        }

        events
    }

    /// Advance the stage and resolve the evolved personality
    fn evolve<R: Rng>(&mut self, rng: &mut R) -> Option<Personality> {
        let from_stage = self.stage;
        let Some(next) = self.stage.next() else {
            return None;
        };

        self.stage = next;
        self.growth_points = 0.0;

        let winner = self.ledger.select_dominant(rng);

        let new_personality = if from_stage == LifeStage::Baby && self.was_neglected {
            // Poor care during infancy locks in the neglected line
            Some(Personality::neglected())
        } else if self
            .personality
            .as_ref()
            .is_some_and(|p| p.is_neglected_line())
        {
            // Once neglected, stay in the line; the lottery only flavors it
            match winner {
                Some(w) => Some(Personality::neglected().compounded(w)),
                None => Some(Personality::neglected()),
            }
        } else {
            match winner {
                Some(w) => Some(mix_personality(self.personality.as_ref(), w, from_stage)),
                // Empty ledger: keep whatever personality exists
                None => self.personality.clone(),
            }
        };
        self.personality = new_personality.clone();

        self.ledger.forget_all();
        self.was_neglected = false;
        self.hunger.on_stage_change(self.stage);
        self.boredom.on_stage_change(self.stage);

        tracing::info!(
            stage = %self.stage,
            personality = ?self.personality.as_ref().map(|p| p.label.clone()),
            "creature evolved"
        );
        new_personality
    }

    /// Feed an ingredient; flavored ones are debited from the inventory
    pub fn feed_with_ingredient<R: Rng>(
        &mut self,
        ingredient: &Ingredient,
        now: WallMillis,
        rng: &mut R,
    ) -> Result<(), FeedRefusal> {
        if self.stage == LifeStage::Egg {
            return Err(FeedRefusal::IsEgg);
        }
        if self.hunger.is_fully_satiated() {
            return Err(FeedRefusal::AlreadyFull);
        }
        if ingredient.personality != PersonalityKind::Neutral
            && !self.inventory.consume(&ingredient.identifier)
        {
            return Err(FeedRefusal::OutOfStock);
        }

        self.hunger.satiate(ingredient.satiation_stars());

        if ingredient.personality != PersonalityKind::Neutral {
            self.ledger
                .add_memory(MemoryKind::Food, ingredient.personality, now);
        }

        self.waste.schedule_after_feeding(self.stage, rng);
        tracing::info!(ingredient = %ingredient.identifier, "creature fed");
        Ok(())
    }

    /// Finish a minigame: entertains and pays out tiered ingredients
    ///
    /// Always yields tier 1; score >= 30% adds tier 2, score >= 70% adds
    /// tier 3 instead.
    pub fn play(
        &mut self,
        personality: PersonalityKind,
        score_pct: u8,
        now: WallMillis,
    ) -> Vec<Ingredient> {
        if self.stage == LifeStage::Egg {
            return Vec::new();
        }

        let was_entertained = self.boredom.is_fully_entertained();
        self.boredom.entertain();

        if !was_entertained && personality != PersonalityKind::Neutral {
            self.ledger
                .add_memory(MemoryKind::Minigame, personality, now);
        }

        let mut rewards = Vec::new();
        if let Some(tier1) = Ingredient::flavored(personality, 1) {
            rewards.push(tier1);
        }
        if (30..70).contains(&score_pct) {
            if let Some(tier2) = Ingredient::flavored(personality, 2) {
                rewards.push(tier2);
            }
        }
        if score_pct >= 70 {
            if let Some(tier3) = Ingredient::flavored(personality, 3) {
                rewards.push(tier3);
            }
        }
        for reward in &rewards {
            self.inventory.add(reward, 1);
        }
        rewards
    }

    /// Switch the room decor, leaving a decoration memory for flavored styles
    pub fn redecorate(&mut self, style: &RoomStyle, now: WallMillis) {
        self.current_room = style.identifier.clone();
        if style.personality != PersonalityKind::Neutral {
            self.ledger
                .add_memory(MemoryKind::Decoration, style.personality, now);
        }
    }

    /// Remove waste before it causes illness
    pub fn clean_waste(&mut self) {
        self.waste.clean();
    }

    pub fn cure(&mut self) {
        self.illness.cure();
    }

    /// Tap the egg to hatch; the only manual stage transition
    pub fn hatch(&mut self) -> bool {
        if self.stage != LifeStage::Egg {
            return false;
        }
        self.stage = LifeStage::Baby;
        self.growth_points = 0.0;
        self.hunger.on_stage_change(self.stage);
        self.boredom.on_stage_change(self.stage);
        tracing::info!("egg hatched");
        true
    }

    fn die(&mut self) {
        self.stage = LifeStage::Dead;
        self.growth_points = 0.0;
        tracing::info!("creature died");
    }

    /// Force death; debug action
    pub fn kill(&mut self) {
        if self.stage.is_alive() {
            self.die();
        }
    }

    /// Reset back to Baby; the only path out of Dead
    ///
    /// A reset rather than a transition: it violates the monotonic stage
    /// ordering on purpose.
    pub fn revive(&mut self) -> bool {
        if self.stage != LifeStage::Dead {
            return false;
        }
        self.stage = LifeStage::Baby;
        self.growth_points = 0.0;
        self.illness.cure();
        self.hunger.reset();
        self.boredom.reset();
        self.waste.reset();
        self.hunger.on_stage_change(self.stage);
        self.boredom.on_stage_change(self.stage);
        tracing::info!("creature revived");
        true
    }
}

/// Growth accrued over `dt`, slowing at each moment a need gauge runs
/// empty: full rate, then `penalty`, then `penalty` squared with both
/// gauges empty
fn integrate_growth(
    dt: Seconds,
    penalty: f64,
    hunger_empty_in: Option<Seconds>,
    boredom_empty_in: Option<Seconds>,
) -> Seconds {
    let mut boundaries: Vec<Seconds> = [hunger_empty_in, boredom_empty_in]
        .into_iter()
        .flatten()
        .filter(|&t| t < dt)
        .collect();
    boundaries.sort_by(|a, b| a.total_cmp(b));

    let mut accrued = 0.0;
    let mut from = 0.0;
    let mut rate = 1.0;
    for boundary in boundaries {
        accrued += (boundary - from) * rate;
        rate *= penalty;
        from = boundary;
    }
    accrued + (dt - from) * rate
}
