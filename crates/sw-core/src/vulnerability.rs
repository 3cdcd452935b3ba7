//! The escalating vulnerability die.
//!
//! When a character starts taking real harm, enemies roll a vulnerability
//! die against them. It starts inactive at a d20 and steps down a ladder
//! each time it triggers — the smaller the die, the more dangerous the
//! character's situation. The ladder bottoms out at a d4.

use crate::dice::Die;
use serde::{Deserialize, Serialize};

/// Ladder the die walks down, largest to smallest.
const LADDER: [Die; 6] = [Die::D20, Die::D12, Die::D10, Die::D8, Die::D6, Die::D4];

/// A character's position on the vulnerability ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityDie {
    current: Die,
    active: bool,
}

impl VulnerabilityDie {
    /// A fresh, inactive die at the top of the ladder.
    pub fn new() -> Self {
        Self {
            current: Die::D20,
            active: false,
        }
    }

    /// The die enemies currently roll.
    pub fn die(&self) -> Die {
        self.current
    }

    /// Whether the die has been activated by harm.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Steps one rung down the ladder and activates the die. Saturates at
    /// the d4; stepping an already-bottomed die changes nothing but keeps
    /// it active.
    pub fn step_down(&mut self) {
        self.active = true;
        let next = LADDER
            .iter()
            .position(|die| *die == self.current)
            .and_then(|position| LADDER.get(position + 1));
        if let Some(next) = next {
            self.current = *next;
        }
    }

    /// Clears the die back to an inactive d20, as after a full rest.
    pub fn reset(&mut self) {
        self.current = Die::D20;
        self.active = false;
    }
}

impl Default for VulnerabilityDie {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VulnerabilityDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.active {
            write!(f, "{}", self.current)
        } else {
            write!(f, "inactive")
        }
    }
}
