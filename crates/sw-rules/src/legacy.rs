//! Legacy d20 checks.
//!
//! The older rulebook edition resolved checks with a single d20 plus a
//! flat bonus instead of a dice pool. The two systems encode genuinely
//! different rules and are kept apart on purpose; all they share is the
//! die-rolling seam in [`crate::roll`].
//!
//! The flat bonus weights the attribute by the proficiency tier's
//! multiplier and then consumes the modifiers the pool system ignores —
//! the ones with `affects_dice` unset.

use crate::damage::HitQuality;
use crate::roll::roll_die;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sw_core::{Die, Modifier, ProficiencyTier};

/// How many d20s to roll and which face to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollAdvantage {
    /// One die.
    #[default]
    Normal,
    /// Two dice, keep the higher.
    Advantage,
    /// Two dice, keep the lower.
    Disadvantage,
}

/// Flat check bonus in the legacy system: attribute weighted by the tier
/// multiplier, plus every non-dice modifier.
pub fn legacy_modifier(attribute_value: i32, tier: ProficiencyTier, modifiers: &[Modifier]) -> i32 {
    let flat: i32 = modifiers
        .iter()
        .filter(|modifier| !modifier.affects_dice)
        .map(Modifier::signed_value)
        .sum();
    attribute_value * tier.legacy_multiplier() + flat
}

/// The outcome of one legacy check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRoll {
    /// How the dice were kept.
    pub advantage: RollAdvantage,
    /// Every face rolled, in order.
    pub faces: Vec<u32>,
    /// The face that counts.
    pub kept: u32,
    /// Flat bonus added to the kept face.
    pub modifier: i32,
    /// `kept + modifier`.
    pub total: i32,
}

impl LegacyRoll {
    /// Natural 20 on the kept face.
    pub fn is_critical(&self) -> bool {
        self.kept == 20
    }

    /// Natural 1 on the kept face.
    pub fn is_disaster(&self) -> bool {
        self.kept == 1
    }

    /// Damage quality this check earns: a natural 20 is a critical, and
    /// a double 20 under advantage is a true critical. Grazes are called
    /// by the table, never by the dice.
    pub fn hit_quality(&self) -> HitQuality {
        if self.advantage == RollAdvantage::Advantage && self.faces.iter().all(|face| *face == 20)
        {
            HitQuality::TrueCritical
        } else if self.is_critical() {
            HitQuality::Critical
        } else {
            HitQuality::Normal
        }
    }
}

impl std::fmt::Display for LegacyRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "d20 {:?} kept {} {:+} = {}",
            self.faces, self.kept, self.modifier, self.total
        )
    }
}

/// Rolls a legacy check: one d20, or two under advantage/disadvantage.
pub fn roll_legacy(advantage: RollAdvantage, modifier: i32, rng: &mut impl Rng) -> LegacyRoll {
    let faces = match advantage {
        RollAdvantage::Normal => vec![roll_die(Die::D20, rng)],
        RollAdvantage::Advantage | RollAdvantage::Disadvantage => {
            vec![roll_die(Die::D20, rng), roll_die(Die::D20, rng)]
        }
    };
    let kept = match advantage {
        RollAdvantage::Normal => faces[0],
        RollAdvantage::Advantage => faces[0].max(faces[1]),
        RollAdvantage::Disadvantage => faces[0].min(faces[1]),
    };
    LegacyRoll {
        advantage,
        faces,
        kept,
        modifier,
        total: kept as i32 + modifier,
    }
}
