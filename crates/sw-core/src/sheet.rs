//! The engine-facing character bundle.
//!
//! A [`CharacterSheet`] gathers everything the rules engine needs to
//! resolve checks and damage for one character. The external character
//! store owns persistence and identity; it builds one of these per
//! character and keeps it in sync.

use crate::attribute::AttributeSet;
use crate::condition::ActiveCondition;
use crate::equipment::{ArmorTier, CreatureSize};
use crate::modifier::Modifier;
use crate::proficiency::ProficiencyTier;
use crate::resources::CombatResources;
use crate::vulnerability::VulnerabilityDie;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Full character state as seen by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Display name.
    pub name: String,
    /// Character level, 1 and up.
    pub level: u32,
    /// Rulebook id of the character's archetype.
    pub archetype: String,
    /// Size category.
    pub size: CreatureSize,
    /// The six attribute values.
    pub attributes: AttributeSet,
    /// Trained skills by rulebook id. Skills absent here are untrained.
    pub proficiencies: BTreeMap<String, ProficiencyTier>,
    /// The one skill granted bonus dice from level, if chosen.
    pub signature_skill: Option<String>,
    /// Worn armor.
    pub armor: ArmorTier,
    /// Tool kits and instruments carried, by name.
    pub instruments: BTreeSet<String>,
    /// Total carried weight.
    pub carried_load: i32,
    /// Active named modifiers.
    pub modifiers: Vec<Modifier>,
    /// Active conditions.
    pub conditions: Vec<ActiveCondition>,
    /// Guard, Vitality, and Power pools.
    pub resources: CombatResources,
    /// Position on the vulnerability ladder.
    pub vulnerability: VulnerabilityDie,
}

impl CharacterSheet {
    /// Creates a minimal level-1 sheet with the given resource ceilings.
    /// Everything else starts empty or at its default.
    pub fn new(
        name: impl Into<String>,
        archetype: impl Into<String>,
        guard_max: i32,
        power_max: i32,
    ) -> Self {
        Self {
            name: name.into(),
            level: 1,
            archetype: archetype.into(),
            size: CreatureSize::default(),
            attributes: AttributeSet::default(),
            proficiencies: BTreeMap::new(),
            signature_skill: None,
            armor: ArmorTier::default(),
            instruments: BTreeSet::new(),
            carried_load: 0,
            modifiers: Vec::new(),
            conditions: Vec::new(),
            resources: CombatResources::new(guard_max, power_max),
            vulnerability: VulnerabilityDie::new(),
        }
    }

    /// Training tier in a skill. Skills never trained come back as
    /// [`ProficiencyTier::Untrained`] rather than an error.
    pub fn proficiency(&self, skill_id: &str) -> ProficiencyTier {
        self.proficiencies.get(skill_id).copied().unwrap_or_default()
    }

    /// Whether the given skill is this character's signature skill.
    pub fn is_signature(&self, skill_id: &str) -> bool {
        self.signature_skill.as_deref() == Some(skill_id)
    }

    /// Whether the character carries the named instrument.
    pub fn has_instrument(&self, instrument: &str) -> bool {
        self.instruments.contains(instrument)
    }
}
