//! Rulebook validation.
//!
//! Table data arrives from outside the engine, so every row is checked
//! for internal consistency before play. Errors mark rows the engine
//! cannot resolve safely (dangling ids, contradictory flags); warnings
//! mark rows that are legal but almost certainly mistakes.

use crate::tables::Rulebook;
use serde::{Deserialize, Serialize};
use sw_core::CreatureSize;

/// One finding from a rulebook check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The table row the finding is about.
    pub entity: String,
    /// What is wrong with it.
    pub message: String,
    /// Whether the row is unusable, as opposed to merely suspicious.
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = if self.is_error { "error" } else { "warning" };
        write!(f, "{severity} at {}: {}", self.entity, self.message)
    }
}

/// Checks every table row of a rulebook and reports all findings, not
/// just the first.
pub fn validate_rulebook(book: &Rulebook) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (id, skill) in book.skills() {
        let entity = format!("skill {id}");
        if skill.name.trim().is_empty() {
            issues.push(ValidationIssue::error(&entity, "display name is empty"));
        }
        if skill
            .instrument
            .as_deref()
            .is_some_and(|instrument| instrument.trim().is_empty())
        {
            issues.push(ValidationIssue::error(&entity, "instrument name is empty"));
        }
    }

    for (id, info) in book.conditions() {
        let entity = format!("condition {id}");
        if info.name.trim().is_empty() {
            issues.push(ValidationIssue::error(&entity, "display name is empty"));
        }
        if info.stackable && info.max_stacks == 0 {
            issues.push(ValidationIssue::error(
                &entity,
                "stackable but max_stacks is 0",
            ));
        }
        for implied in &info.implies {
            if implied == id {
                issues.push(ValidationIssue::error(&entity, "implies itself"));
            } else if book.condition(implied).is_err() {
                issues.push(ValidationIssue::error(
                    &entity,
                    format!("implies unknown condition {implied}"),
                ));
            }
        }
        if let Some(penalty) = &info.dice_penalty {
            if penalty.targets.is_empty() {
                issues.push(ValidationIssue::error(&entity, "dice penalty has no targets"));
            }
            if penalty.scales_with_stacks && !info.stackable {
                issues.push(ValidationIssue::error(
                    &entity,
                    "penalty scales with stacks but the condition cannot stack",
                ));
            }
            if penalty.dice == 0 {
                issues.push(ValidationIssue::warning(&entity, "dice penalty of 0 does nothing"));
            }
        }
    }

    for size in CreatureSize::ALL {
        if !book.sizes.contains_key(&size) {
            issues.push(ValidationIssue::warning(
                format!("size {size}"),
                "no modifier row, treated as zero",
            ));
        }
    }

    for (id, archetype) in book.archetypes() {
        let entity = format!("archetype {id}");
        if archetype.name.trim().is_empty() {
            issues.push(ValidationIssue::error(&entity, "display name is empty"));
        }
        if archetype.base_guard < 0 {
            issues.push(ValidationIssue::error(&entity, "negative base guard"));
        }
        if archetype.base_power < 0 {
            issues.push(ValidationIssue::error(&entity, "negative base power"));
        }
        if archetype.guard_per_level < 0 || archetype.power_per_level < 0 {
            issues.push(ValidationIssue::warning(
                &entity,
                "per-level progression is negative",
            ));
        }
    }

    issues
}
