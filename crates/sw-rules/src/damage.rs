//! Damage roll resolution.
//!
//! Turns a damage specification and a hit quality into a number. Only
//! normal hits and the bonus dice of a true critical touch the RNG:
//! criticals maximize instead of rolling, and grazes are derived from
//! the maximum possible damage, so both are deterministic.

use crate::roll::roll_dice;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sw_core::Die;

/// Divisor applied to flat-only damage on a graze.
const GRAZE_FLAT_DIVISOR: i32 = 3;

/// A damage expression such as `2d6+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageSpec {
    /// Number of dice.
    pub count: u32,
    /// Die type.
    pub die: Die,
    /// Flat modifier added after the dice, may be negative.
    pub flat: i32,
}

impl DamageSpec {
    /// Creates a spec.
    pub fn new(count: u32, die: Die, flat: i32) -> Self {
        Self { count, die, flat }
    }

    /// The highest total this spec can roll: every die maximized, plus
    /// the flat modifier.
    pub fn max_possible(&self) -> i32 {
        self.count as i32 * self.die.sides() as i32 + self.flat
    }
}

impl std::fmt::Display for DamageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "{}", self.flat)
        } else if self.flat == 0 {
            write!(f, "{}{}", self.count, self.die)
        } else {
            write!(f, "{}{}{:+}", self.count, self.die, self.flat)
        }
    }
}

/// How well the attack landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitQuality {
    /// A plain hit: roll the dice.
    #[default]
    Normal,
    /// A glancing hit: reduced, deterministic damage.
    Graze,
    /// A critical hit: every base die maximized, no roll.
    Critical,
    /// A critical hit with bonus dice on top.
    TrueCritical,
}

/// The resolved damage of one hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Quality the damage was resolved under.
    pub quality: HitQuality,
    /// Faces rolled for the base dice. Empty when the base was maximized
    /// or derived rather than rolled.
    pub base_faces: Vec<u32>,
    /// Faces rolled for a true critical's bonus dice.
    pub bonus_faces: Vec<u32>,
    /// Final damage, never negative.
    pub total: i32,
}

/// Resolves a damage roll.
///
/// `bonus` is the independently-configured dice added on a true critical;
/// it is ignored for every other quality, and a true critical without one
/// resolves exactly like a critical.
///
/// Graze damage diverges by shape on purpose: with dice present it is
/// half the maximum possible damage, floored, minimum 1; a flat-only
/// spec instead grazes for a third of the flat value, floored, minimum 1.
pub fn resolve_damage(
    spec: &DamageSpec,
    quality: HitQuality,
    bonus: Option<&DamageSpec>,
    rng: &mut impl Rng,
) -> DamageOutcome {
    match quality {
        HitQuality::Normal => {
            let base_faces = roll_dice(spec.die, spec.count, rng);
            let rolled: i32 = base_faces.iter().map(|face| *face as i32).sum();
            DamageOutcome {
                quality,
                base_faces,
                bonus_faces: Vec::new(),
                total: (rolled + spec.flat).max(0),
            }
        }
        HitQuality::Graze => {
            let total = if spec.count > 0 {
                spec.max_possible().div_euclid(2).max(1)
            } else {
                spec.flat.div_euclid(GRAZE_FLAT_DIVISOR).max(1)
            };
            DamageOutcome {
                quality,
                base_faces: Vec::new(),
                bonus_faces: Vec::new(),
                total,
            }
        }
        HitQuality::Critical => DamageOutcome {
            quality,
            base_faces: Vec::new(),
            bonus_faces: Vec::new(),
            total: spec.max_possible().max(0),
        },
        HitQuality::TrueCritical => {
            let (bonus_faces, bonus_total) = match bonus {
                Some(bonus) => {
                    let faces = roll_dice(bonus.die, bonus.count, rng);
                    let rolled: i32 = faces.iter().map(|face| *face as i32).sum();
                    (faces, rolled + bonus.flat)
                }
                None => (Vec::new(), 0),
            };
            DamageOutcome {
                quality,
                base_faces: Vec::new(),
                bonus_faces,
                total: (spec.max_possible() + bonus_total).max(0),
            }
        }
    }
}
