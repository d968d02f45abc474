//! Room decor styles
//!
//! Each style carries a personality flavor; redecorating with a flavored
//! style leaves a decoration memory.

use serde::{Deserialize, Serialize};

use crate::creature::personality::PersonalityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStyle {
    pub identifier: String,
    pub name: String,
    pub personality: PersonalityKind,
}

impl RoomStyle {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        personality: PersonalityKind,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            personality,
        }
    }

    pub fn default_style() -> Self {
        Self::new("style1", "Basic Style", PersonalityKind::Neutral)
    }

    pub fn all_styles() -> Vec<RoomStyle> {
        let mut styles = vec![Self::default_style()];
        for personality in PersonalityKind::all_flavored() {
            let name = format!(
                "{}{} Style",
                personality.as_str()[..1].to_uppercase(),
                &personality.as_str()[1..]
            );
            styles.push(Self::new(personality.as_str(), name, personality));
        }
        styles
    }

    pub fn by_identifier(identifier: &str) -> Option<RoomStyle> {
        Self::all_styles().into_iter().find(|s| s.identifier == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let styles = RoomStyle::all_styles();
        assert_eq!(styles.len(), 6);
        assert_eq!(styles[0].personality, PersonalityKind::Neutral);
    }

    #[test]
    fn test_lookup() {
        let style = RoomStyle::by_identifier("geek").unwrap();
        assert_eq!(style.personality, PersonalityKind::Geek);
        assert!(RoomStyle::by_identifier("missing").is_none());
    }
}
