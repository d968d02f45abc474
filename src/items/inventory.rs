//! Ingredient inventory
//!
//! Multiset keyed by ingredient identifier. The neutral basic meal is
//! always available and never stored here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::creature::personality::PersonalityKind;
use crate::items::ingredient::Ingredient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    counts: HashMap<String, u32>,
}

impl Default for Inventory {
    /// Starting stock: one tier-1 ingredient of each flavored personality
    fn default() -> Self {
        let mut inventory = Self {
            counts: HashMap::new(),
        };
        for personality in PersonalityKind::all_flavored() {
            if let Some(ing) = Ingredient::flavored(personality, 1) {
                inventory.add(&ing, 1);
            }
        }
        inventory
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub fn add(&mut self, ingredient: &Ingredient, quantity: u32) {
        let count = self.counts.entry(ingredient.identifier.clone()).or_default();
        *count += quantity;
        tracing::debug!(ingredient = %ingredient.identifier, total = *count, "inventory add");
    }

    pub fn has(&self, identifier: &str) -> bool {
        self.quantity(identifier) > 0
    }

    pub fn quantity(&self, identifier: &str) -> u32 {
        self.counts.get(identifier).copied().unwrap_or(0)
    }

    /// Take one unit; false when out of stock
    pub fn consume(&mut self, identifier: &str) -> bool {
        match self.counts.get_mut(identifier) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Stocked ingredients with quantities, sorted by identifier
    ///
    /// Malformed identifiers are skipped per-entry rather than failing the
    /// whole listing.
    pub fn list(&self) -> Vec<(Ingredient, u32)> {
        let mut items: Vec<(Ingredient, u32)> = self
            .counts
            .iter()
            .filter(|(_, &quantity)| quantity > 0)
            .filter_map(|(identifier, &quantity)| {
                match Ingredient::from_identifier(identifier) {
                    Some(ingredient) => Some((ingredient, quantity)),
                    None => {
                        tracing::warn!(identifier = %identifier, "skipping malformed inventory entry");
                        None
                    }
                }
            })
            .collect();
        items.sort_by(|a, b| a.0.identifier.cmp(&b.0.identifier));
        items
    }
}
