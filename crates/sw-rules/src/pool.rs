//! Dice-pool rolling and success counting.
//!
//! A face of [`SUCCESS_THRESHOLD`] or higher is one success regardless of
//! die size — bigger dice mean better odds, never more successes per die.
//! Each rolled 1 cancels one success. On a penalty roll only the lower of
//! the two faces is counted.

use crate::formula::DicePoolFormula;
use crate::roll::roll_dice;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum face that counts as a success.
pub const SUCCESS_THRESHOLD: u32 = 6;

/// Face that cancels one success.
pub const CANCEL_FACE: u32 = 1;

/// The outcome of rolling a dice pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// The formula that was rolled.
    pub formula: DicePoolFormula,
    /// Every face rolled, in order.
    pub faces: Vec<u32>,
    /// On a penalty roll, the single face that was counted (the lower).
    pub kept_face: Option<u32>,
    /// Successes before cancellation.
    pub raw_successes: u32,
    /// Rolled 1s among the counted faces.
    pub cancellations: u32,
    /// `raw_successes` minus `cancellations`, floored at zero.
    pub net_successes: u32,
}

impl PoolRoll {
    /// Builds the outcome from already-rolled faces. Rolling and counting
    /// are separated so counting can be tested without a generator.
    pub fn from_faces(formula: DicePoolFormula, faces: Vec<u32>) -> Self {
        let kept_face = if formula.penalty_roll {
            faces.iter().min().copied()
        } else {
            None
        };
        let counted: &[u32] = match &kept_face {
            Some(face) => std::slice::from_ref(face),
            None => &faces,
        };
        let raw_successes = counted
            .iter()
            .filter(|face| **face >= SUCCESS_THRESHOLD)
            .count() as u32;
        let cancellations = counted.iter().filter(|face| **face == CANCEL_FACE).count() as u32;
        Self {
            formula,
            faces,
            kept_face,
            raw_successes,
            cancellations,
            net_successes: raw_successes.saturating_sub(cancellations),
        }
    }

    /// At least one net success.
    pub fn is_success(&self) -> bool {
        self.net_successes >= 1
    }
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.formula, self.faces)?;
        if let Some(kept) = self.kept_face {
            write!(f, " kept {kept}")?;
        }
        write!(f, " = {} net", self.net_successes)
    }
}

/// Rolls a pool formula.
pub fn roll_pool(formula: DicePoolFormula, rng: &mut impl Rng) -> PoolRoll {
    let faces = roll_dice(formula.die, formula.dice_count, rng);
    PoolRoll::from_faces(formula, faces)
}
