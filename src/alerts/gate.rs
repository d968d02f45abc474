//! Cooldown-gated alert delivery
//!
//! Every alert passes through the gate: per-category toggles decide
//! whether it may fire at all, and a shared cooldown stops repeats from
//! flooding the user during a crisis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alerts::catalog::{spec, AlertCategory, AlertSpec};
use crate::core::types::WallMillis;

/// Per-category on/off switches plus a master switch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertToggles {
    pub master: bool,
    pub attention_low: bool,
    pub attention_critical: bool,
    pub illness: bool,
    pub near_death: bool,
    pub death: bool,
    pub evolution: bool,
}

impl Default for AlertToggles {
    fn default() -> Self {
        AlertToggles {
            master: true,
            attention_low: true,
            attention_critical: true,
            illness: true,
            near_death: true,
            death: true,
            evolution: true,
        }
    }
}

impl AlertToggles {
    /// A category is enabled only when both it and the master switch are on
    pub fn enabled(&self, category: AlertCategory) -> bool {
        if !self.master {
            return false;
        }
        match category {
            AlertCategory::AttentionLow => self.attention_low,
            AlertCategory::AttentionCritical => self.attention_critical,
            AlertCategory::Illness => self.illness,
            AlertCategory::NearDeath => self.near_death,
            AlertCategory::Death => self.death,
            AlertCategory::Evolution => self.evolution,
        }
    }
}

/// Where fired alerts end up (log line, desktop notification, test buffer)
pub trait AlertSink {
    fn deliver(&mut self, category: AlertCategory, spec: &AlertSpec);
}

/// Default sink: structured log lines
#[derive(Debug, Default)]
pub struct LogSink;

impl AlertSink for LogSink {
    fn deliver(&mut self, category: AlertCategory, spec: &AlertSpec) {
        tracing::info!(
            alert = ?category,
            title = spec.title,
            body = spec.body,
            "alert fired"
        );
    }
}

/// Tracks when each category last fired and suppresses repeats inside
/// the cooldown window
#[derive(Debug)]
pub struct NotificationGate<S: AlertSink> {
    last_fired: HashMap<AlertCategory, WallMillis>,
    cooldown_ms: u64,
    sink: S,
}

impl NotificationGate<LogSink> {
    pub fn new(cooldown_ms: u64) -> Self {
        NotificationGate::with_sink(cooldown_ms, LogSink)
    }
}

impl<S: AlertSink> NotificationGate<S> {
    pub fn with_sink(cooldown_ms: u64, sink: S) -> Self {
        NotificationGate {
            last_fired: HashMap::new(),
            cooldown_ms,
            sink,
        }
    }

    /// Fire an alert unless it is disabled or still cooling down.
    /// Returns whether it was delivered.
    pub fn notify(
        &mut self,
        category: AlertCategory,
        toggles: &AlertToggles,
        now: WallMillis,
    ) -> bool {
        if !toggles.enabled(category) {
            return false;
        }
        if let Some(&fired_at) = self.last_fired.get(&category) {
            if now.saturating_sub(fired_at) < self.cooldown_ms {
                return false;
            }
        }
        self.last_fired.insert(category, now);
        self.sink.deliver(category, spec(category));
        true
    }

    /// Fire regardless of cooldown. Toggles still apply.
    pub fn force_notify(
        &mut self,
        category: AlertCategory,
        toggles: &AlertToggles,
        now: WallMillis,
    ) -> bool {
        self.last_fired.remove(&category);
        self.notify(category, toggles, now)
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
