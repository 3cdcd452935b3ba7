//! Rules engine for the Schildwacht character manager.
//!
//! This crate turns character state from `sw-core` into resolved game
//! mechanics: dice-pool formulas and rolls, the legacy d20 check system,
//! damage resolution, the Guard/Vitality damage and healing pipeline,
//! condition penalty aggregation, and the static rulebook tables that
//! drive all of it.
//!
//! Everything that involves chance takes `&mut impl Rng`, so callers
//! decide where randomness comes from — a seeded [`rand::rngs::StdRng`]
//! for replayable sessions, thread-local entropy for live play.

/// High-level skill check orchestration.
pub mod check;
/// Guard/Vitality damage application and healing.
pub mod combat;
/// Condition penalty aggregation.
pub mod conditions;
/// Damage roll resolution.
pub mod damage;
/// Engine error type.
pub mod error;
/// Dice-pool formula calculation.
pub mod formula;
/// Legacy d20 checks.
pub mod legacy;
/// Roll journal.
pub mod log;
/// Dice-pool rolling and success counting.
pub mod pool;
/// Die rolling primitives.
pub mod roll;
/// Static rulebook tables.
pub mod tables;
/// Rulebook validation.
pub mod validate;

/// Re-export check orchestration.
pub use check::{CheckOptions, SkillCheckResult, skill_check};
/// Re-export combat state machinery.
pub use combat::{CombatState, DamageApplication, apply_damage, heal_guard, heal_vitality};
/// Re-export penalty aggregation.
pub use conditions::{PenaltyMap, PenaltyTarget, aggregate_penalties};
/// Re-export damage resolution.
pub use damage::{DamageOutcome, DamageSpec, HitQuality, resolve_damage};
/// Re-export the error type.
pub use error::{RulesError, RulesResult};
/// Re-export formula types.
pub use formula::{DicePoolFormula, FormulaBreakdown, PenaltyContext, PoolInput, pool_formula};
/// Re-export legacy checks.
pub use legacy::{LegacyRoll, RollAdvantage, legacy_modifier, roll_legacy};
/// Re-export the journal.
pub use log::{LogEntry, RollLog, RollRecord};
/// Re-export pool rolling.
pub use pool::{PoolRoll, roll_pool};
/// Re-export the rulebook.
pub use tables::{ArchetypeDef, ConditionInfo, Rulebook, SkillDef};
/// Re-export validation.
pub use validate::{ValidationIssue, validate_rulebook};
