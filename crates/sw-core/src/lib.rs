//! Core data model for the Schildwacht character manager.
//!
//! This crate defines the character-side types the rules engine operates
//! on: attributes, proficiency tiers, dice, modifiers, active conditions,
//! equipment state, and the Guard/Vitality/Power combat resources. It is
//! independent of the engine — the external character store assembles a
//! [`CharacterSheet`] (or the individual pieces) and hands it to `sw-rules`.
//!
//! All types here are plain data with clamping constructors; the rules for
//! mutating them during play live in `sw-rules`.

/// The six character attributes and their value set.
pub mod attribute;
/// Active status conditions as stored on a character.
pub mod condition;
/// Polyhedral die types.
pub mod dice;
/// Armor tiers and creature sizes.
pub mod equipment;
/// Named bonus/penalty modifiers.
pub mod modifier;
/// Skill proficiency tiers.
pub mod proficiency;
/// Guard, Vitality, and Power point pools.
pub mod resources;
/// The engine-facing character bundle.
pub mod sheet;
/// The escalating vulnerability die.
pub mod vulnerability;

/// Re-export attribute types.
pub use attribute::{Attribute, AttributeSet};
/// Re-export condition state.
pub use condition::ActiveCondition;
/// Re-export die types.
pub use dice::Die;
/// Re-export equipment state.
pub use equipment::{ArmorTier, CreatureSize};
/// Re-export modifier types.
pub use modifier::{Modifier, ModifierKind};
/// Re-export proficiency tiers.
pub use proficiency::ProficiencyTier;
/// Re-export resource pools.
pub use resources::{CombatResources, GuardPoints, PowerPoints, VitalityPoints};
/// Re-export the character bundle.
pub use sheet::CharacterSheet;
/// Re-export the vulnerability die.
pub use vulnerability::VulnerabilityDie;
