//! User settings persisted alongside the save

use serde::{Deserialize, Serialize};

use crate::alerts::AlertToggles;
use crate::core::error::Result;
use crate::persist::{load_json, store_json, StateStore, SETTINGS_KEY};
use crate::sim::sleep::SleepSchedule;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub sleep: SleepSchedule,
    pub alerts: AlertToggles,
    /// Shift applied when deriving the local hour of day from epoch ms
    pub utc_offset_hours: i8,
}

impl Settings {
    /// Load stored settings, falling back to defaults when absent or
    /// corrupt.
    pub fn load(store: &dyn StateStore) -> Result<Settings> {
        Ok(load_json(store, SETTINGS_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, store: &mut dyn StateStore) -> Result<()> {
        store_json(store, SETTINGS_KEY, self)
    }

    /// Flip the master alert switch, cascading to every category
    pub fn set_all_alerts(&mut self, enabled: bool) {
        self.alerts = AlertToggles {
            master: enabled,
            attention_low: enabled,
            attention_critical: enabled,
            illness: enabled,
            near_death: enabled,
            death: enabled,
            evolution: enabled,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertCategory;
    use crate::persist::MemStore;

    #[test]
    fn test_load_defaults_when_absent() {
        let store = MemStore::new();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings.utc_offset_hours, 0);
        assert!(settings.alerts.master);
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemStore::new();
        let mut settings = Settings::default();
        settings.utc_offset_hours = -5;
        settings.sleep.set_schedule(21, 6).unwrap();
        settings.save(&mut store).unwrap();

        let loaded = Settings::load(&store).unwrap();
        assert_eq!(loaded.utc_offset_hours, -5);
        assert_eq!(loaded.sleep.sleep_hour, 21);
        assert_eq!(loaded.sleep.wake_hour, 6);
    }

    #[test]
    fn test_master_cascade() {
        let mut settings = Settings::default();
        settings.set_all_alerts(false);
        for category in AlertCategory::all() {
            assert!(!settings.alerts.enabled(category));
        }
        settings.set_all_alerts(true);
        assert!(settings.alerts.enabled(AlertCategory::Illness));
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let mut store = MemStore::new();
        store.write(SETTINGS_KEY, b"{ broken").unwrap();
        let settings = Settings::load(&store).unwrap();
        assert!(settings.alerts.master);
    }
}
