//! Named bonus/penalty modifiers.
//!
//! Modifiers come from gear, spells, circumstance, and GM fiat. Each one
//! carries a non-negative magnitude plus a kind; whether it adjusts the
//! dice pool or the legacy flat total is decided by `affects_dice`.

use serde::{Deserialize, Serialize};

/// Whether a modifier helps or hinders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Adds to the pool or total.
    Bonus,
    /// Subtracts from the pool or total.
    Penalty,
}

/// A named modifier attached to a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Where the modifier comes from, e.g. `"blessed blade"`.
    pub name: String,
    /// Magnitude, always non-negative. The sign comes from `kind`.
    pub value: i32,
    /// Bonus or penalty.
    pub kind: ModifierKind,
    /// `true` when this modifier adds/removes pool dice; `false` when it
    /// adjusts the legacy flat total instead.
    pub affects_dice: bool,
}

impl Modifier {
    /// Creates a dice bonus. Negative magnitudes are clamped to zero.
    pub fn bonus(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value: value.max(0),
            kind: ModifierKind::Bonus,
            affects_dice: true,
        }
    }

    /// Creates a dice penalty. Negative magnitudes are clamped to zero.
    pub fn penalty(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value: value.max(0),
            kind: ModifierKind::Penalty,
            affects_dice: true,
        }
    }

    /// Creates a flat modifier for the legacy system. The sign of `value`
    /// picks the kind; the stored magnitude is its absolute value.
    pub fn flat(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value: value.abs(),
            kind: if value < 0 {
                ModifierKind::Penalty
            } else {
                ModifierKind::Bonus
            },
            affects_dice: false,
        }
    }

    /// Magnitude with the kind's sign applied.
    pub fn signed_value(&self) -> i32 {
        match self.kind {
            ModifierKind::Bonus => self.value,
            ModifierKind::Penalty => -self.value,
        }
    }
}
