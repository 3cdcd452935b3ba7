//! Static rulebook tables.
//!
//! Skill metadata, condition effects, creature-size rows, and archetype
//! progressions are data, not behavior: the engine receives them as an
//! immutable [`Rulebook`] and resolves every id through explicit lookups
//! that fail fast on unknown input. [`Rulebook::standard`] is the builtin
//! table set; [`Rulebook::from_json`] swaps in another without touching
//! any calculator.

mod standard;

use crate::conditions::PenaltyTarget;
use crate::error::{RulesError, RulesResult};
use crate::validate::{ValidationIssue, validate_rulebook};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use sw_core::{Attribute, AttributeSet, CombatResources, CreatureSize};

/// Carry capacity granted per point of Might.
pub const CARRY_PER_MIGHT: i32 = 10;

/// Static metadata of one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDef {
    /// Display name.
    pub name: String,
    /// Governing attribute.
    pub attribute: Attribute,
    /// Hampered by armor weight and overload.
    #[serde(default)]
    pub load_sensitive: bool,
    /// Untrained attempts take a penalty.
    #[serde(default)]
    pub requires_proficiency: bool,
    /// Instrument needed to work without a penalty, if any.
    #[serde(default)]
    pub instrument: Option<String>,
    /// Usable as an attack skill.
    #[serde(default)]
    pub combat: bool,
}

/// Broad condition grouping, for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionCategory {
    /// Bodily harm and hindrance.
    Physical,
    /// Fear, confusion, and the like.
    Mental,
    /// Curses and other supernatural effects.
    Magical,
}

/// Dice effect of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePenalty {
    /// What the delta applies to.
    pub targets: BTreeSet<PenaltyTarget>,
    /// Dice delta per application, negative for penalties.
    pub dice: i32,
    /// Multiply by the stack count instead of applying once.
    #[serde(default)]
    pub scales_with_stacks: bool,
}

impl DicePenalty {
    /// A penalty on every check.
    pub fn all(dice: i32) -> Self {
        Self {
            targets: BTreeSet::from([PenaltyTarget::All]),
            dice,
            scales_with_stacks: false,
        }
    }

    /// A penalty on checks governed by the given attributes.
    pub fn attributes(attributes: impl IntoIterator<Item = Attribute>, dice: i32) -> Self {
        Self {
            targets: attributes
                .into_iter()
                .map(PenaltyTarget::Attribute)
                .collect(),
            dice,
            scales_with_stacks: false,
        }
    }
}

fn default_max_stacks() -> u32 {
    1
}

/// Static metadata of one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionInfo {
    /// Display name.
    pub name: String,
    /// Grouping.
    pub category: ConditionCategory,
    /// Whether multiple stacks may be held at once.
    #[serde(default)]
    pub stackable: bool,
    /// Stack ceiling for stackable conditions.
    #[serde(default = "default_max_stacks")]
    pub max_stacks: u32,
    /// Conditions that come along with this one.
    #[serde(default)]
    pub implies: Vec<String>,
    /// Dice effect, if the condition has one.
    #[serde(default)]
    pub dice_penalty: Option<DicePenalty>,
}

/// Modifier row of one creature size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeRow {
    /// Added to the Guard ceiling.
    pub guard_bonus: i32,
    /// Added to carry capacity.
    pub carry_bonus: i32,
}

/// Resource progression of one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeDef {
    /// Display name.
    pub name: String,
    /// Guard ceiling at level 1, before Endurance and size.
    pub base_guard: i32,
    /// Guard gained per level past the first.
    pub guard_per_level: i32,
    /// Power ceiling at level 1, before Will.
    pub base_power: i32,
    /// Power gained per level past the first.
    pub power_per_level: i32,
}

/// The full injected table set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rulebook {
    pub(crate) skills: BTreeMap<String, SkillDef>,
    pub(crate) conditions: BTreeMap<String, ConditionInfo>,
    pub(crate) sizes: BTreeMap<CreatureSize, SizeRow>,
    pub(crate) archetypes: BTreeMap<String, ArchetypeDef>,
}

impl Rulebook {
    /// The builtin table set.
    pub fn standard() -> Self {
        standard::build()
    }

    /// Loads a table set from JSON, validating it before handing it out.
    /// Parse failures and rows that fail validation both come back as
    /// errors; warnings do not block loading.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let book: Self = serde_json::from_str(json)
            .map_err(|error| RulesError::MalformedRulebook(error.to_string()))?;
        if let Some(issue) = book.validate().iter().find(|issue| issue.is_error) {
            return Err(RulesError::InvalidRulebook(issue.to_string()));
        }
        Ok(book)
    }

    /// Checks every table row for inconsistencies. See
    /// [`validate_rulebook`].
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_rulebook(self)
    }

    /// Looks up a skill.
    pub fn skill(&self, id: &str) -> RulesResult<&SkillDef> {
        self.skills
            .get(id)
            .ok_or_else(|| RulesError::UnknownSkill(id.to_owned()))
    }

    /// Looks up a condition.
    pub fn condition(&self, id: &str) -> RulesResult<&ConditionInfo> {
        self.conditions
            .get(id)
            .ok_or_else(|| RulesError::UnknownCondition(id.to_owned()))
    }

    /// Looks up an archetype.
    pub fn archetype(&self, id: &str) -> RulesResult<&ArchetypeDef> {
        self.archetypes
            .get(id)
            .ok_or_else(|| RulesError::UnknownArchetype(id.to_owned()))
    }

    /// Modifier row for a size. Sizes without a row modify nothing, so
    /// this lookup cannot fail.
    pub fn size(&self, size: CreatureSize) -> SizeRow {
        self.sizes.get(&size).copied().unwrap_or_default()
    }

    /// All skills, in id order.
    pub fn skills(&self) -> impl Iterator<Item = (&str, &SkillDef)> {
        self.skills.iter().map(|(id, def)| (id.as_str(), def))
    }

    /// All conditions, in id order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &ConditionInfo)> {
        self.conditions.iter().map(|(id, info)| (id.as_str(), info))
    }

    /// All archetypes, in id order.
    pub fn archetypes(&self) -> impl Iterator<Item = (&str, &ArchetypeDef)> {
        self.archetypes.iter().map(|(id, def)| (id.as_str(), def))
    }

    /// Carry capacity from Might and size, clamped at zero for creatures
    /// whose size penalty outweighs their strength.
    pub fn carry_capacity(&self, attributes: &AttributeSet, size: CreatureSize) -> i32 {
        (attributes.might * CARRY_PER_MIGHT + self.size(size).carry_bonus).max(0)
    }

    /// Builds the full resource block for a character at creation or
    /// level-up: Guard from the archetype progression plus Endurance and
    /// size, Power from the progression plus Will, Vitality derived from
    /// the Guard ceiling.
    pub fn derive_resources(
        &self,
        archetype_id: &str,
        level: u32,
        attributes: &AttributeSet,
        size: CreatureSize,
    ) -> RulesResult<CombatResources> {
        let archetype = self.archetype(archetype_id)?;
        let levels_gained = level.max(1) as i32 - 1;
        let guard_max = archetype.base_guard
            + archetype.guard_per_level * levels_gained
            + attributes.endurance
            + self.size(size).guard_bonus;
        let power_max =
            archetype.base_power + archetype.power_per_level * levels_gained + attributes.will;
        Ok(CombatResources::new(guard_max, power_max))
    }
}
