//! Active status conditions as stored on a character.
//!
//! An [`ActiveCondition`] is just the instance data: which condition, how
//! many stacks, and who inflicted it. What a condition *does* is defined
//! by the rulebook tables in `sw-rules`.

use serde::{Deserialize, Serialize};

/// One condition currently affecting a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCondition {
    /// Rulebook id of the condition, e.g. `"bleeding"`.
    pub id: String,
    /// Stack count, at least 1.
    pub stacks: u32,
    /// Free-form note on where the condition came from.
    pub source: String,
}

impl ActiveCondition {
    /// Creates a single-stack condition.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stacks: 1,
            source: source.into(),
        }
    }

    /// Creates a condition with a stack count. Zero is clamped to 1.
    pub fn with_stacks(id: impl Into<String>, stacks: u32, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stacks: stacks.max(1),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_one_stack() {
        let condition = ActiveCondition::new("bleeding", "dire wolf");
        assert_eq!(condition.stacks, 1);
        assert_eq!(condition.id, "bleeding");
    }

    #[test]
    fn zero_stacks_clamp_to_one() {
        let condition = ActiveCondition::with_stacks("poisoned", 0, "trap");
        assert_eq!(condition.stacks, 1);
    }

    #[test]
    fn with_stacks_keeps_count() {
        let condition = ActiveCondition::with_stacks("exhausted", 3, "forced march");
        assert_eq!(condition.stacks, 3);
    }
}
