//! Skill proficiency tiers.
//!
//! A character's tier in a skill sets which die their pool is built from,
//! and doubles as the multiplier in the legacy d20 system.

use crate::dice::Die;
use serde::{Deserialize, Serialize};

/// Training tier in a skill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum ProficiencyTier {
    /// No training at all.
    #[default]
    Untrained,
    /// Basic training.
    Adept,
    /// Solid professional competence.
    Versed,
    /// Complete command of the skill.
    Master,
}

impl ProficiencyTier {
    /// All tiers, lowest to highest.
    pub const ALL: [ProficiencyTier; 4] = [
        ProficiencyTier::Untrained,
        ProficiencyTier::Adept,
        ProficiencyTier::Versed,
        ProficiencyTier::Master,
    ];

    /// The die a pool at this tier is built from.
    pub fn die(self) -> Die {
        match self {
            Self::Untrained => Die::D6,
            Self::Adept => Die::D8,
            Self::Versed => Die::D10,
            Self::Master => Die::D12,
        }
    }

    /// Attribute multiplier in the legacy d20 system.
    pub fn legacy_multiplier(self) -> i32 {
        match self {
            Self::Untrained => 0,
            Self::Adept => 1,
            Self::Versed => 2,
            Self::Master => 3,
        }
    }
}

impl std::fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Untrained => "Untrained",
            Self::Adept => "Adept",
            Self::Versed => "Versed",
            Self::Master => "Master",
        };
        write!(f, "{name}")
    }
}
