//! Simulation configuration with documented constants
//!
//! Scalar tuning knobs are collected here with explanations of their
//! purpose. Per-stage tables (star intervals, death timers, growth
//! thresholds, waste ranges) live next to the types they parameterize as
//! exhaustive matches over `LifeStage`.

use serde::Deserialize;

use crate::core::error::{PetError, Result};

/// Tunable constants for the simulation loop
///
/// These values match the original game's pacing. Changing them affects
/// how demanding the creature is, not the structure of the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Minimum wall-clock milliseconds between two alerts of the same
    /// category. Deliberately unscaled by the simulation speed.
    pub alert_cooldown_ms: u64,

    /// Per-tick probability of a background save.
    ///
    /// At a typical 60 Hz render rate, 1/600 approximates one save every
    /// ten seconds. Best-effort only; callers still save on app close and
    /// on explicit player actions.
    pub autosave_chance: f64,

    /// Seconds of remaining life below which the near-death alert is
    /// raised. Level-triggered: re-evaluated every tick while true.
    pub near_death_window_s: f64,

    /// Growth multiplier applied once per badly-cared need.
    ///
    /// With both hunger and boredom at zero stars the effective growth
    /// rate is `penalty * penalty` (0.25 at the default 0.5).
    pub neglect_growth_penalty: f64,

    /// Wall-clock milliseconds a temporary wake-up lasts when the player
    /// disturbs the creature during its automatic sleep window.
    pub temporary_wake_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            alert_cooldown_ms: 60_000,
            autosave_chance: 1.0 / 600.0,
            near_death_window_s: 600.0,
            neglect_growth_penalty: 0.5,
            temporary_wake_ms: 5 * 60 * 1000,
        }
    }
}

impl SimConfig {
    /// Load overrides from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse overrides from a TOML string; absent keys keep their defaults
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: TomlConfig =
            toml::from_str(content).map_err(|e| PetError::ConfigError(e.to_string()))?;
        let defaults = Self::default();

        let config = Self {
            alert_cooldown_ms: raw.alert_cooldown_ms.unwrap_or(defaults.alert_cooldown_ms),
            autosave_chance: raw.autosave_chance.unwrap_or(defaults.autosave_chance),
            near_death_window_s: raw
                .near_death_window_s
                .unwrap_or(defaults.near_death_window_s),
            neglect_growth_penalty: raw
                .neglect_growth_penalty
                .unwrap_or(defaults.neglect_growth_penalty),
            temporary_wake_ms: raw.temporary_wake_ms.unwrap_or(defaults.temporary_wake_ms),
        };

        if !(0.0..=1.0).contains(&config.autosave_chance) {
            return Err(PetError::ConfigError(format!(
                "autosave_chance must be in 0..=1, got {}",
                config.autosave_chance
            )));
        }
        if !(0.0..=1.0).contains(&config.neglect_growth_penalty) {
            return Err(PetError::ConfigError(format!(
                "neglect_growth_penalty must be in 0..=1, got {}",
                config.neglect_growth_penalty
            )));
        }

        Ok(config)
    }
}

/// TOML representation of the config file
#[derive(Debug, Deserialize)]
struct TomlConfig {
    alert_cooldown_ms: Option<u64>,
    autosave_chance: Option<f64>,
    near_death_window_s: Option<f64>,
    neglect_growth_penalty: Option<f64>,
    temporary_wake_ms: Option<u64>,
}
