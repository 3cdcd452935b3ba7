//! Guard, Vitality, and Power point pools.
//!
//! Guard is the outer defensive layer: it soaks hits first and recovers
//! easily. Vitality sits beneath it, is derived from Guard, and only takes
//! damage once Guard is gone. Power fuels special abilities. All the rules
//! for moving these values around live in `sw-rules`; this module is the
//! state plus a few clamping constructors.

use serde::{Deserialize, Serialize};

/// The outer defensive pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPoints {
    /// Current value, `0..=max`.
    pub current: i32,
    /// Normal ceiling.
    pub max: i32,
    /// Temporary points that soak damage before `current` does. Never
    /// restored by healing, lost first, no ceiling of their own.
    pub temporary: i32,
}

impl GuardPoints {
    /// Creates a full pool with the given ceiling. Negative ceilings are
    /// clamped to zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: max,
            max,
            temporary: 0,
        }
    }

    /// Creates a pool at a specific current value, clamped into `0..=max`.
    pub fn with_current(max: i32, current: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
            temporary: 0,
        }
    }

    /// Everything the pool can soak right now.
    pub fn total_available(&self) -> i32 {
        self.current + self.temporary
    }
}

/// The inner health pool, derived from Guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalityPoints {
    /// Current value, `0..=max`.
    pub current: i32,
    /// Ceiling, one third of the Guard ceiling.
    pub max: i32,
}

impl VitalityPoints {
    /// Vitality ceiling for a given Guard ceiling: one third, floored.
    pub fn max_for_guard(guard_max: i32) -> i32 {
        guard_max.max(0).div_euclid(3)
    }

    /// Creates a full Vitality pool for the given Guard ceiling.
    pub fn from_guard_max(guard_max: i32) -> Self {
        let max = Self::max_for_guard(guard_max);
        Self { current: max, max }
    }

    /// Creates a pool at a specific current value, clamped into `0..=max`.
    pub fn with_current(max: i32, current: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }
}

/// Points spent to fuel special abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerPoints {
    /// Current value, `0..=max`.
    pub current: i32,
    /// Ceiling from archetype and level.
    pub max: i32,
}

impl PowerPoints {
    /// Creates a full pool with the given ceiling. Negative ceilings are
    /// clamped to zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }
}

/// The full resource block of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResources {
    /// Outer defensive pool.
    pub guard: GuardPoints,
    /// Inner health pool.
    pub vitality: VitalityPoints,
    /// Ability fuel.
    pub power: PowerPoints,
}

impl CombatResources {
    /// Creates a fresh, fully-rested resource block. Vitality is derived
    /// from the Guard ceiling.
    pub fn new(guard_max: i32, power_max: i32) -> Self {
        Self {
            guard: GuardPoints::new(guard_max),
            vitality: VitalityPoints::from_guard_max(guard_max),
            power: PowerPoints::new(power_max),
        }
    }
}
