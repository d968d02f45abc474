//! Ingredient catalog
//!
//! Tier linearly determines satiation stars. Identifiers follow
//! `<personality>_t<tier>`, except the ever-available `neutral_basic`.

use serde::{Deserialize, Serialize};

use crate::creature::personality::PersonalityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub identifier: String,
    pub name: String,
    pub personality: PersonalityKind,
    pub tier: u8,
}

impl Ingredient {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        personality: PersonalityKind,
        tier: u8,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            personality,
            tier,
        }
    }

    /// Tier maps 1:1 onto satiation stars
    pub fn satiation_stars(&self) -> u8 {
        self.tier.clamp(1, 3)
    }

    /// The basic meal, always available and never stored in inventory
    pub fn neutral() -> Self {
        Self::new("neutral_basic", "Plain Mochi", PersonalityKind::Neutral, 1)
    }

    pub fn flavored(personality: PersonalityKind, tier: u8) -> Option<Self> {
        if personality == PersonalityKind::Neutral {
            return None;
        }
        let tier = tier.clamp(1, 3);
        let identifier = format!("{}_t{}", personality, tier);
        let name = match personality {
            PersonalityKind::Anxious => "Anxious Ingredient",
            PersonalityKind::Edgy => "Edgy Ingredient",
            PersonalityKind::Geek => "Geek Ingredient",
            PersonalityKind::Sassy => "Sassy Ingredient",
            PersonalityKind::Intelectual => "Intelectual Ingredient",
            PersonalityKind::Neutral => unreachable!(),
        };
        Some(Self::new(identifier, name, personality, tier))
    }

    /// Rebuild an ingredient from its identifier; None for malformed input
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        if identifier == "neutral_basic" {
            return Some(Self::neutral());
        }
        let (personality_str, tier_str) = identifier.split_once('_')?;
        let personality = PersonalityKind::parse(personality_str)?;
        let tier: u8 = tier_str.strip_prefix('t')?.parse().ok()?;
        if !(1..=3).contains(&tier) {
            return None;
        }
        Ingredient::flavored(personality, tier)
    }
}
