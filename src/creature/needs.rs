//! Capability interface for decaying needs
//!
//! The simulation clock consumes hunger and boredom only through this
//! trait: star level, remaining time before death, delta update, stage
//! change hook, and reset.

use crate::core::types::Seconds;
use crate::creature::stage::LifeStage;

/// Maximum star level for any need (3 = fully cared for)
pub const MAX_STARS: u8 = 3;

/// A need that decays over simulated time
pub trait NeedGauge {
    /// Current level, 0..=3 (0 = critical)
    fn stars(&self) -> u8;

    /// Seconds of simulated time before this need kills the creature,
    /// or None while the need is not lethal
    fn time_until_death(&self) -> Option<Seconds>;

    /// Apply `dt` seconds of simulated time
    ///
    /// Must consume arbitrarily large deltas: one bulk update has to leave
    /// the gauge in the same state as the equivalent run of small updates,
    /// so offline catch-up never behaves differently from live ticks.
    fn update(&mut self, dt: Seconds, stage: LifeStage);

    /// Re-parameterize timers for a new life stage
    fn on_stage_change(&mut self, stage: LifeStage);

    /// Restore the fully-cared-for state
    fn reset(&mut self);
}
