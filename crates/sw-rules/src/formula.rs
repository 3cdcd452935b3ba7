//! Dice-pool formula calculation.
//!
//! Resolving a skill check starts here: all the character's numbers are
//! folded into a count of dice, with an itemized breakdown of where each
//! die came from. The roll itself happens in [`crate::pool`]; this module
//! is pure arithmetic and fully deterministic.

use crate::tables::SkillDef;
use serde::{Deserialize, Serialize};
use sw_core::{ArmorTier, Attribute, Die, Modifier, ProficiencyTier};

/// Hard ceiling on pool size. Totals above this are capped, not errors.
pub const MAX_POOL_DICE: u32 = 8;

/// Pool dice removed while overloaded.
const OVERLOAD_PENALTY: i32 = -2;
/// Pool dice removed when attempting a proficiency-gated skill untrained.
const UNTRAINED_PENALTY: i32 = -2;
/// Pool dice removed when the skill's instrument is missing.
const MISSING_INSTRUMENT_PENALTY: i32 = -2;

/// Situational state that can cost pool dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PenaltyContext {
    /// Carrying more than capacity allows.
    pub overloaded: bool,
    /// Worn armor.
    pub armor: ArmorTier,
    /// Whether the skill's required instrument is at hand. Ignored for
    /// skills that need no instrument.
    pub has_instrument: bool,
}

/// Where one term of the pool formula came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermSource {
    /// The governing attribute.
    Attribute(Attribute),
    /// Signature-skill dice from level.
    Signature,
    /// A named modifier.
    Modifier(String),
    /// Aggregated condition penalties.
    Conditions,
    /// Carrying too much.
    Overload,
    /// Armor weight on a load-sensitive skill.
    Armor(ArmorTier),
    /// Attempting a proficiency-gated skill untrained.
    Untrained,
    /// The skill's instrument is missing.
    MissingInstrument,
}

impl std::fmt::Display for TermSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute(attribute) => write!(f, "{attribute}"),
            Self::Signature => write!(f, "signature"),
            Self::Modifier(name) => write!(f, "{name}"),
            Self::Conditions => write!(f, "conditions"),
            Self::Overload => write!(f, "overloaded"),
            Self::Armor(tier) => write!(f, "{tier} armor"),
            Self::Untrained => write!(f, "untrained"),
            Self::MissingInstrument => write!(f, "missing instrument"),
        }
    }
}

/// One line of the pool breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTerm {
    /// Where the dice came from.
    pub source: TermSource,
    /// Dice added (positive) or removed (negative).
    pub dice: i32,
}

impl std::fmt::Display for PoolTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+}", self.source, self.dice)
    }
}

/// The rollable result of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePoolFormula {
    /// How many dice to roll.
    pub dice_count: u32,
    /// Which die, from the proficiency tier.
    pub die: Die,
    /// `true` when the pool collapsed to zero or below: roll two dice and
    /// keep only the lower as the single counted face.
    pub penalty_roll: bool,
}

impl std::fmt::Display for DicePoolFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.penalty_roll {
            write!(f, "{}{} (penalty)", self.dice_count, self.die)
        } else {
            write!(f, "{}{}", self.dice_count, self.die)
        }
    }
}

/// The full formula result: itemized terms plus the pool to roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaBreakdown {
    /// Every contribution, in application order.
    pub terms: Vec<PoolTerm>,
    /// Sum of all terms before the cap and penalty-roll floor.
    pub total_before_cap: i32,
    /// What to actually roll.
    pub formula: DicePoolFormula,
}

impl std::fmt::Display for FormulaBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, " = {} -> {}", self.total_before_cap, self.formula)
    }
}

/// Character-side inputs to the formula.
#[derive(Debug, Clone, Copy)]
pub struct PoolInput<'a> {
    /// The skill's governing attribute.
    pub attribute: Attribute,
    /// The character's value in that attribute.
    pub attribute_value: i32,
    /// Training tier in the skill.
    pub tier: ProficiencyTier,
    /// Whether this is the character's signature skill.
    pub signature: bool,
    /// Character level, for signature dice.
    pub level: u32,
    /// Active modifiers. Only those with `affects_dice` count here.
    pub modifiers: &'a [Modifier],
    /// Aggregated dice adjustment from conditions, usually zero or
    /// negative. See [`crate::conditions::aggregate_penalties`].
    pub condition_penalty: i32,
    /// Situational penalty state.
    pub context: PenaltyContext,
}

/// Signature-skill bonus dice for a level: one per five levels, begun at
/// level 1, capped at three.
pub fn signature_bonus(level: u32) -> i32 {
    let level = level.max(1) as i32;
    ((level + 4) / 5).min(3)
}

/// Computes the dice pool for one skill check.
///
/// The breakdown always opens with the attribute term, even at zero.
/// Penalties that do not apply produce no term at all. If the summed
/// total lands at zero or below, the result is a penalty roll: two dice
/// of the tier's type, keep the lower. Otherwise the total is capped at
/// [`MAX_POOL_DICE`].
pub fn pool_formula(skill: &SkillDef, input: &PoolInput<'_>) -> FormulaBreakdown {
    let mut terms = vec![PoolTerm {
        source: TermSource::Attribute(input.attribute),
        dice: input.attribute_value,
    }];

    if input.signature {
        terms.push(PoolTerm {
            source: TermSource::Signature,
            dice: signature_bonus(input.level),
        });
    }

    for modifier in input.modifiers {
        if modifier.affects_dice && modifier.value != 0 {
            terms.push(PoolTerm {
                source: TermSource::Modifier(modifier.name.clone()),
                dice: modifier.signed_value(),
            });
        }
    }

    if input.condition_penalty != 0 {
        terms.push(PoolTerm {
            source: TermSource::Conditions,
            dice: input.condition_penalty,
        });
    }

    if skill.load_sensitive {
        if input.context.overloaded {
            terms.push(PoolTerm {
                source: TermSource::Overload,
                dice: OVERLOAD_PENALTY,
            });
        }
        let armor_dice = match input.context.armor {
            ArmorTier::None | ArmorTier::Light => 0,
            ArmorTier::Medium => -1,
            ArmorTier::Heavy => -2,
        };
        if armor_dice != 0 {
            terms.push(PoolTerm {
                source: TermSource::Armor(input.context.armor),
                dice: armor_dice,
            });
        }
    }

    if skill.requires_proficiency && input.tier == ProficiencyTier::Untrained {
        terms.push(PoolTerm {
            source: TermSource::Untrained,
            dice: UNTRAINED_PENALTY,
        });
    }

    if skill.instrument.is_some() && !input.context.has_instrument {
        terms.push(PoolTerm {
            source: TermSource::MissingInstrument,
            dice: MISSING_INSTRUMENT_PENALTY,
        });
    }

    let total: i32 = terms.iter().map(|term| term.dice).sum();
    let formula = if total <= 0 {
        DicePoolFormula {
            dice_count: 2,
            die: input.tier.die(),
            penalty_roll: true,
        }
    } else {
        DicePoolFormula {
            dice_count: (total as u32).min(MAX_POOL_DICE),
            die: input.tier.die(),
            penalty_roll: false,
        }
    };

    FormulaBreakdown {
        terms,
        total_before_cap: total,
        formula,
    }
}
