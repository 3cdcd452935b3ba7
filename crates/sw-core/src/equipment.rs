//! Armor tiers and creature sizes.

use serde::{Deserialize, Serialize};

/// Worn armor weight class.
///
/// The pool penalty for medium and heavy armor on load-sensitive skills
/// lives in the rules engine; this type only records what is worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArmorTier {
    /// No armor worn.
    #[default]
    None,
    /// Light armor, no pool penalty.
    Light,
    /// Medium armor.
    Medium,
    /// Heavy armor.
    Heavy,
}

impl std::fmt::Display for ArmorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        };
        write!(f, "{name}")
    }
}

/// Creature size category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum CreatureSize {
    /// Cat-sized or smaller.
    Tiny,
    /// Halfling-sized.
    Small,
    /// Human-sized.
    #[default]
    Medium,
    /// Ogre-sized.
    Large,
    /// Giant-sized and up.
    Huge,
}

impl CreatureSize {
    /// All sizes, smallest to largest.
    pub const ALL: [CreatureSize; 5] = [
        CreatureSize::Tiny,
        CreatureSize::Small,
        CreatureSize::Medium,
        CreatureSize::Large,
        CreatureSize::Huge,
    ];
}

impl std::fmt::Display for CreatureSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(ArmorTier::default(), ArmorTier::None);
        assert_eq!(CreatureSize::default(), CreatureSize::Medium);
    }

    #[test]
    fn sizes_are_ordered() {
        assert!(CreatureSize::Tiny < CreatureSize::Small);
        assert!(CreatureSize::Medium < CreatureSize::Large);
        assert!(CreatureSize::Large < CreatureSize::Huge);
    }
}
