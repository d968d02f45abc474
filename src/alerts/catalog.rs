//! Alert categories and their static descriptors
//!
//! Pure data: what each alert says and sounds like. Whether and when one
//! fires is the gate's business.

use serde::{Deserialize, Serialize};

/// The six user-facing alert categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    AttentionLow,
    AttentionCritical,
    Illness,
    NearDeath,
    Death,
    Evolution,
}

impl AlertCategory {
    pub fn all() -> [AlertCategory; 6] {
        [
            AlertCategory::AttentionLow,
            AlertCategory::AttentionCritical,
            AlertCategory::Illness,
            AlertCategory::NearDeath,
            AlertCategory::Death,
            AlertCategory::Evolution,
        ]
    }
}

/// Static descriptor for one alert category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertSpec {
    pub title: &'static str,
    pub body: &'static str,
    /// Audio cue pitch in Hz
    pub tone_hz: u32,
    /// Audio cue length in ms
    pub tone_ms: u32,
    /// Platform hint: keep the notification on screen until dismissed
    pub require_interaction: bool,
}

/// Descriptor lookup; exhaustive so a new category cannot ship without one
pub fn spec(category: AlertCategory) -> &'static AlertSpec {
    match category {
        AlertCategory::AttentionLow => &AlertSpec {
            title: "Your pet needs attention",
            body: "It is low on energy or bored",
            tone_hz: 440,
            tone_ms: 200,
            require_interaction: false,
        },
        AlertCategory::AttentionCritical => &AlertSpec {
            title: "Urgent attention needed!",
            body: "Your pet needs care right now!",
            tone_hz: 880,
            tone_ms: 400,
            require_interaction: true,
        },
        AlertCategory::Illness => &AlertSpec {
            title: "Your pet is sick",
            body: "It needs medicine urgently",
            tone_hz: 523,
            tone_ms: 300,
            require_interaction: false,
        },
        AlertCategory::NearDeath => &AlertSpec {
            title: "Critical danger!",
            body: "Your pet is at risk of dying",
            tone_hz: 659,
            tone_ms: 500,
            require_interaction: true,
        },
        AlertCategory::Death => &AlertSpec {
            title: "Your pet has died",
            body: "Take better care of it next time",
            tone_hz: 330,
            tone_ms: 600,
            require_interaction: true,
        },
        AlertCategory::Evolution => &AlertSpec {
            title: "Your pet is about to evolve!",
            body: "It is ready for the next stage",
            tone_hz: 587,
            tone_ms: 300,
            require_interaction: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_spec() {
        for category in AlertCategory::all() {
            let spec = spec(category);
            assert!(!spec.title.is_empty());
            assert!(spec.tone_hz > 0);
        }
    }

    #[test]
    fn test_critical_alerts_require_interaction() {
        assert!(spec(AlertCategory::AttentionCritical).require_interaction);
        assert!(spec(AlertCategory::NearDeath).require_interaction);
        assert!(spec(AlertCategory::Death).require_interaction);
        assert!(!spec(AlertCategory::AttentionLow).require_interaction);
    }
}
