//! Personality kinds and evolved personality labels

use serde::{Deserialize, Serialize};

use crate::creature::stage::LifeStage;

/// Base personality flavors carried by ingredients, minigames and decor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityKind {
    Neutral,
    Anxious,
    Edgy,
    Geek,
    Sassy,
    Intelectual,
}

impl PersonalityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityKind::Neutral => "neutral",
            PersonalityKind::Anxious => "anxious",
            PersonalityKind::Edgy => "edgy",
            PersonalityKind::Geek => "geek",
            PersonalityKind::Sassy => "sassy",
            PersonalityKind::Intelectual => "intelectual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "neutral" => Some(PersonalityKind::Neutral),
            "anxious" => Some(PersonalityKind::Anxious),
            "edgy" => Some(PersonalityKind::Edgy),
            "geek" => Some(PersonalityKind::Geek),
            "sassy" => Some(PersonalityKind::Sassy),
            "intelectual" => Some(PersonalityKind::Intelectual),
            _ => None,
        }
    }

    /// All flavors that can back an ingredient or memory
    pub fn all_flavored() -> [PersonalityKind; 5] {
        [
            PersonalityKind::Anxious,
            PersonalityKind::Edgy,
            PersonalityKind::Geek,
            PersonalityKind::Sassy,
            PersonalityKind::Intelectual,
        ]
    }
}

impl std::fmt::Display for PersonalityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label of the neglect evolution line
pub const NEGLECTED_LINE: &str = "neglected";

/// The creature's evolved personality
///
/// Labels compound across evolutions (e.g. "geek+sassy"), so this is a
/// string rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub label: String,
}

impl Personality {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn from_kind(kind: PersonalityKind) -> Self {
        Self::new(kind.as_str())
    }

    pub fn neglected() -> Self {
        Self::new(NEGLECTED_LINE)
    }

    pub fn is_neglected_line(&self) -> bool {
        self.label.contains(NEGLECTED_LINE)
    }

    /// Append a lottery winner to this label ("geek" -> "geek+sassy")
    pub fn compounded(&self, winner: PersonalityKind) -> Self {
        Self::new(format!("{}+{}", self.label, winner))
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Resolve the personality after an evolution out of `from_stage`
///
/// Baby keeps only the winning memory; later stages blend the existing
/// personality with it. No winner (empty ledger) keeps what was there.
pub fn mix_personality(
    current: Option<&Personality>,
    winner: PersonalityKind,
    from_stage: LifeStage,
) -> Personality {
    match from_stage {
        LifeStage::Baby => Personality::from_kind(winner),
        LifeStage::Child | LifeStage::Young => match current {
            Some(p) => p.compounded(winner),
            None => Personality::from_kind(winner),
        },
        _ => current
            .cloned()
            .unwrap_or_else(|| Personality::from_kind(PersonalityKind::Neutral)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for kind in PersonalityKind::all_flavored() {
            assert_eq!(PersonalityKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PersonalityKind::parse("nope"), None);
    }

    #[test]
    fn test_baby_takes_winner_alone() {
        let current = Personality::from_kind(PersonalityKind::Edgy);
        let mixed = mix_personality(Some(&current), PersonalityKind::Geek, LifeStage::Baby);
        assert_eq!(mixed.label, "geek");
    }

    #[test]
    fn test_child_compounds() {
        let current = Personality::from_kind(PersonalityKind::Geek);
        let mixed = mix_personality(Some(&current), PersonalityKind::Sassy, LifeStage::Child);
        assert_eq!(mixed.label, "geek+sassy");
    }

    #[test]
    fn test_neglected_line_detection() {
        let p = Personality::neglected().compounded(PersonalityKind::Edgy);
        assert!(p.is_neglected_line());
        assert_eq!(p.label, "neglected+edgy");
    }
}
