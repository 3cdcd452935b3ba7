//! Engine error type.

use thiserror::Error;

/// Errors the rules engine can produce.
///
/// Lookups against the rulebook fail loudly; the engine never silently
/// substitutes a default skill, condition, or archetype.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A skill id with no entry in the rulebook.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A condition id with no entry in the rulebook.
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    /// An archetype id with no entry in the rulebook.
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Rulebook JSON that failed to parse.
    #[error("malformed rulebook: {0}")]
    MalformedRulebook(String),

    /// Rulebook data that parsed but failed validation.
    #[error("invalid rulebook: {0}")]
    InvalidRulebook(String),
}

/// Convenience alias for engine results.
pub type RulesResult<T> = Result<T, RulesError>;
