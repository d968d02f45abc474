//! Life stage state machine
//!
//! Stages are totally ordered Egg..Dead. The stage only ever advances,
//! with one exception: revival is an explicit reset back to Baby, not a
//! transition.

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;

/// Discrete life-cycle phase of the creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Egg,
    Baby,
    Child,
    Young,
    Adult,
    ReadyToAscend,
    Dead,
}

impl LifeStage {
    /// Position in the 0..6 ordering
    pub fn index(self) -> u8 {
        match self {
            LifeStage::Egg => 0,
            LifeStage::Baby => 1,
            LifeStage::Child => 2,
            LifeStage::Young => 3,
            LifeStage::Adult => 4,
            LifeStage::ReadyToAscend => 5,
            LifeStage::Dead => 6,
        }
    }

    /// The stage after this one, if growth can reach it
    ///
    /// Egg has no growth successor (hatching is a manual action) and the
    /// two terminal-ish stages never advance.
    pub fn next(self) -> Option<LifeStage> {
        match self {
            LifeStage::Egg => None,
            LifeStage::Baby => Some(LifeStage::Child),
            LifeStage::Child => Some(LifeStage::Young),
            LifeStage::Young => Some(LifeStage::Adult),
            LifeStage::Adult => Some(LifeStage::ReadyToAscend),
            LifeStage::ReadyToAscend => None,
            LifeStage::Dead => None,
        }
    }

    pub fn is_alive(self) -> bool {
        self != LifeStage::Dead
    }

    /// Seconds of accumulated care time required to leave this stage
    ///
    /// Egg is 0 because hatching is tap-triggered, not time-based.
    pub fn growth_threshold(self) -> Seconds {
        match self {
            LifeStage::Egg => 0.0,
            LifeStage::Baby => 3_600.0,
            LifeStage::Child => 18_000.0,
            LifeStage::Young => 32_400.0,
            LifeStage::Adult => 32_400.0,
            LifeStage::ReadyToAscend => 0.0,
            LifeStage::Dead => 0.0,
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifeStage::Egg => "Egg",
            LifeStage::Baby => "Baby",
            LifeStage::Child => "Child",
            LifeStage::Young => "Young",
            LifeStage::Adult => "Adult",
            LifeStage::ReadyToAscend => "ReadyToAscend",
            LifeStage::Dead => "Dead",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ordering() {
        assert!(LifeStage::Egg < LifeStage::Baby);
        assert!(LifeStage::Baby < LifeStage::Child);
        assert!(LifeStage::ReadyToAscend < LifeStage::Dead);
        assert_eq!(LifeStage::Dead.index(), 6);
    }

    #[test]
    fn test_next_chain() {
        assert_eq!(LifeStage::Baby.next(), Some(LifeStage::Child));
        assert_eq!(LifeStage::Adult.next(), Some(LifeStage::ReadyToAscend));
        assert_eq!(LifeStage::Egg.next(), None);
        assert_eq!(LifeStage::ReadyToAscend.next(), None);
        assert_eq!(LifeStage::Dead.next(), None);
    }

    #[test]
    fn test_growth_thresholds() {
        assert_eq!(LifeStage::Egg.growth_threshold(), 0.0);
        assert_eq!(LifeStage::Baby.growth_threshold(), 3_600.0);
        assert_eq!(LifeStage::Child.growth_threshold(), 18_000.0);
        assert_eq!(LifeStage::Young.growth_threshold(), 32_400.0);
    }
}
