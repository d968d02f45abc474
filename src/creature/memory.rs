//! Memory ledger and weighted personality lottery
//!
//! The ledger is append-only between evolutions. Order never affects the
//! lottery; only frequency does.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::WallMillis;
use crate::creature::personality::PersonalityKind;

/// What caused a memory to form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    Food,
    Minigame,
    Decoration,
}

/// Immutable record of a flavored care event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    pub kind: MemoryKind,
    pub personality: PersonalityKind,
    pub created_at: WallMillis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    memories: Vec<Memory>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_memory(&mut self, kind: MemoryKind, personality: PersonalityKind, now: WallMillis) {
        self.memories.push(Memory {
            kind,
            personality,
            created_at: now,
        });
        tracing::debug!(
            kind = ?kind,
            personality = %personality,
            total = self.memories.len(),
            "memory added"
        );
    }

    pub fn count(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    /// Frequency table in first-seen order
    fn frequencies(&self) -> Vec<(PersonalityKind, usize)> {
        let mut freq: Vec<(PersonalityKind, usize)> = Vec::new();
        for memory in &self.memories {
            match freq.iter_mut().find(|(p, _)| *p == memory.personality) {
                Some((_, count)) => *count += 1,
                None => freq.push((memory.personality, 1)),
            }
        }
        freq
    }

    /// Share of the ledger held by each personality, as percentages
    pub fn distribution(&self) -> Vec<(PersonalityKind, f64)> {
        let total = self.memories.len();
        if total == 0 {
            return Vec::new();
        }
        self.frequencies()
            .into_iter()
            .map(|(p, count)| (p, count as f64 / total as f64 * 100.0))
            .collect()
    }

    /// Roulette-wheel selection weighted by frequency
    ///
    /// Returns None on an empty ledger; callers supply the fallback. The
    /// walk is normalized: the final candidate absorbs any residual
    /// floating-point mass, so selection always terminates on a real entry.
    pub fn select_dominant<R: Rng>(&self, rng: &mut R) -> Option<PersonalityKind> {
        let freq = self.frequencies();
        let (&(last, _), rest) = freq.split_last()?;

        let total = self.memories.len() as f64;
        let roll: f64 = rng.gen();
        let mut accumulated = 0.0;

        for &(personality, count) in rest {
            accumulated += count as f64 / total;
            if roll < accumulated {
                return Some(personality);
            }
        }
        Some(last)
    }

    /// Discard everything; called exactly once per evolution
    pub fn forget_all(&mut self) {
        tracing::debug!(count = self.memories.len(), "forgetting memories");
        self.memories.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ledger_of(entries: &[(PersonalityKind, usize)]) -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        for &(personality, count) in entries {
            for _ in 0..count {
                ledger.add_memory(MemoryKind::Food, personality, 0);
            }
        }
        ledger
    }

    #[test]
    fn test_empty_ledger_selects_none() {
        let ledger = MemoryLedger::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(ledger.select_dominant(&mut rng), None);
    }

    #[test]
    fn test_single_entry_always_wins() {
        let ledger = ledger_of(&[(PersonalityKind::Geek, 1)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(ledger.select_dominant(&mut rng), Some(PersonalityKind::Geek));
        }
    }

    #[test]
    fn test_weighted_frequencies() {
        // geek x3, edgy x1 -> geek should win ~75% of draws
        let ledger = ledger_of(&[(PersonalityKind::Geek, 3), (PersonalityKind::Edgy, 1)]);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        let mut geek = 0u32;
        let trials = 10_000;
        for _ in 0..trials {
            if ledger.select_dominant(&mut rng) == Some(PersonalityKind::Geek) {
                geek += 1;
            }
        }

        let share = geek as f64 / trials as f64;
        assert!((share - 0.75).abs() < 0.02, "geek share was {}", share);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = ledger_of(&[(PersonalityKind::Geek, 2), (PersonalityKind::Sassy, 2)]);
        let mut b = MemoryLedger::new();
        b.add_memory(MemoryKind::Food, PersonalityKind::Sassy, 0);
        b.add_memory(MemoryKind::Minigame, PersonalityKind::Geek, 0);
        b.add_memory(MemoryKind::Food, PersonalityKind::Geek, 0);
        b.add_memory(MemoryKind::Minigame, PersonalityKind::Sassy, 0);

        let trials = 20_000;
        let mut wins_a = 0u32;
        let mut wins_b = 0u32;
        let mut rng_a = ChaCha8Rng::seed_from_u64(9);
        let mut rng_b = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..trials {
            if a.select_dominant(&mut rng_a) == Some(PersonalityKind::Geek) {
                wins_a += 1;
            }
            if b.select_dominant(&mut rng_b) == Some(PersonalityKind::Geek) {
                wins_b += 1;
            }
        }
        let share_a = wins_a as f64 / trials as f64;
        let share_b = wins_b as f64 / trials as f64;
        assert!((share_a - 0.5).abs() < 0.02);
        assert!((share_b - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_forget_all() {
        let mut ledger = ledger_of(&[(PersonalityKind::Anxious, 5)]);
        assert_eq!(ledger.count(), 5);
        ledger.forget_all();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_distribution_percentages() {
        let ledger = ledger_of(&[(PersonalityKind::Geek, 3), (PersonalityKind::Edgy, 1)]);
        let dist = ledger.distribution();
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0], (PersonalityKind::Geek, 75.0));
        assert_eq!(dist[1], (PersonalityKind::Edgy, 25.0));
    }
}
