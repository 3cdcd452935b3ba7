//! Guard/Vitality damage application and healing.
//!
//! The two-tier health model: Guard soaks damage first (temporary points,
//! then current), anything left over spills into Vitality. Vitality
//! hitting zero is a critical wound and clamps Guard to half its ceiling;
//! recovering out of zero raises Guard back up to that line. All
//! functions clamp instead of erroring, mutate the caller's state in
//! place, and report what happened.
//!
//! Division always floors toward negative infinity, following rulebook
//! convention.

use serde::{Deserialize, Serialize};
use sw_core::CombatResources;

/// Recovery points needed per point of Vitality healed.
pub const RECOVERY_EXCHANGE_RATE: i32 = 5;

/// Condition id raised while Guard is below half.
pub const AUTO_BATTERED: &str = "battered";
/// Condition id raised while Power is empty.
pub const AUTO_DRAINED: &str = "drained";
/// Condition id raised while critically wounded.
pub const AUTO_MAIMED: &str = "maimed";

/// Wound severity, derived from Vitality and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    /// Vitality is full.
    Normal,
    /// Vitality has been breached but holds above zero.
    DirectWound,
    /// Vitality is empty.
    CriticalWound,
}

impl std::fmt::Display for CombatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::DirectWound => "direct wound",
            Self::CriticalWound => "critical wound",
        };
        write!(f, "{name}")
    }
}

/// Derives the wound state from current Vitality.
pub fn combat_state(resources: &CombatResources) -> CombatState {
    if resources.vitality.current <= 0 {
        CombatState::CriticalWound
    } else if resources.vitality.current < resources.vitality.max {
        CombatState::DirectWound
    } else {
        CombatState::Normal
    }
}

/// Report of one damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageApplication {
    /// Incoming damage, floored at zero.
    pub damage: i32,
    /// Points soaked by temporary Guard.
    pub absorbed_temporary: i32,
    /// Points soaked by current Guard.
    pub absorbed_guard: i32,
    /// Points that spilled into Vitality.
    pub vitality_loss: i32,
    /// Wound state before the hit.
    pub state_before: CombatState,
    /// Wound state after the hit.
    pub state_after: CombatState,
}

impl DamageApplication {
    /// Everything the hit actually removed.
    pub fn total_lost(&self) -> i32 {
        self.absorbed_temporary + self.absorbed_guard + self.vitality_loss
    }
}

/// Applies damage: temporary Guard, then current Guard, then Vitality,
/// each floored at zero. Non-positive damage is a no-op. If the hit
/// empties Vitality, the crossing clamp on Guard runs as part of the same
/// application.
pub fn apply_damage(resources: &mut CombatResources, damage: i32) -> DamageApplication {
    let state_before = combat_state(resources);
    if damage <= 0 {
        return DamageApplication {
            damage: 0,
            absorbed_temporary: 0,
            absorbed_guard: 0,
            vitality_loss: 0,
            state_before,
            state_after: state_before,
        };
    }

    let mut remaining = damage;
    let absorbed_temporary = remaining.min(resources.guard.temporary);
    resources.guard.temporary -= absorbed_temporary;
    remaining -= absorbed_temporary;

    let absorbed_guard = remaining.min(resources.guard.current);
    resources.guard.current -= absorbed_guard;
    remaining -= absorbed_guard;

    let was_zero = resources.vitality.current <= 0;
    let vitality_loss = remaining.min(resources.vitality.current);
    resources.vitality.current -= vitality_loss;
    let is_zero = resources.vitality.current <= 0;
    resources.guard.current = adjust_guard_on_vitality_crossing(
        resources.guard.current,
        resources.guard.max,
        was_zero,
        is_zero,
    );

    DamageApplication {
        damage,
        absorbed_temporary,
        absorbed_guard,
        vitality_loss,
        state_before,
        state_after: combat_state(resources),
    }
}

/// Heals current Guard up to its ceiling. Returns the points actually
/// restored; non-positive amounts restore nothing.
pub fn heal_guard(resources: &mut CombatResources, amount: i32) -> i32 {
    if amount <= 0 {
        return 0;
    }
    let headroom = (resources.guard.max - resources.guard.current).max(0);
    let healed = amount.min(headroom);
    resources.guard.current += healed;
    healed
}

/// Result of converting recovery points into Vitality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalityHealing {
    /// Vitality points restored.
    pub healed: i32,
    /// Recovery points left unspent.
    pub remainder: i32,
}

/// Converts recovery points into Vitality at [`RECOVERY_EXCHANGE_RATE`]
/// to one. Nothing happens unless Vitality is below max and at least one
/// full exchange is affordable; whatever cannot be converted comes back
/// as the remainder. Healing out of zero Vitality runs the crossing raise
/// on Guard.
pub fn heal_vitality(resources: &mut CombatResources, recovery_points: i32) -> VitalityHealing {
    if recovery_points < RECOVERY_EXCHANGE_RATE
        || resources.vitality.current >= resources.vitality.max
    {
        return VitalityHealing {
            healed: 0,
            remainder: recovery_points.max(0),
        };
    }

    let was_zero = resources.vitality.current <= 0;
    let affordable = recovery_points.div_euclid(RECOVERY_EXCHANGE_RATE);
    let headroom = resources.vitality.max - resources.vitality.current;
    let healed = affordable.min(headroom);
    resources.vitality.current += healed;
    let is_zero = resources.vitality.current <= 0;
    resources.guard.current = adjust_guard_on_vitality_crossing(
        resources.guard.current,
        resources.guard.max,
        was_zero,
        is_zero,
    );

    VitalityHealing {
        healed,
        remainder: recovery_points - healed * RECOVERY_EXCHANGE_RATE,
    }
}

/// Guard ceiling as the rules currently see it: halved, floored, while
/// Vitality is empty.
pub fn effective_guard_max(resources: &CombatResources) -> i32 {
    if resources.vitality.current <= 0 {
        resources.guard.max.div_euclid(2)
    } else {
        resources.guard.max
    }
}

/// The crossing rule on its own: when Vitality flips from positive to
/// zero, Guard is clamped down to at most half its ceiling; on the flip
/// back out of zero it is raised to at least that line. Without a flip
/// the value passes through untouched.
pub fn adjust_guard_on_vitality_crossing(
    current: i32,
    max: i32,
    was_zero: bool,
    is_zero: bool,
) -> i32 {
    let half = max.div_euclid(2);
    if !was_zero && is_zero {
        current.min(half)
    } else if was_zero && !is_zero {
        current.max(half)
    } else {
        current
    }
}

/// Spends Power if the full cost is available. No partial spends: on a
/// shortfall nothing changes and `false` comes back. Non-positive costs
/// succeed without touching the pool.
pub fn spend_power(resources: &mut CombatResources, cost: i32) -> bool {
    if cost <= 0 {
        return true;
    }
    if resources.power.current < cost {
        return false;
    }
    resources.power.current -= cost;
    true
}

/// Restores Power up to its ceiling. Returns the points actually
/// restored; non-positive amounts restore nothing.
pub fn restore_power(resources: &mut CombatResources, amount: i32) -> i32 {
    if amount <= 0 {
        return 0;
    }
    let headroom = (resources.power.max - resources.power.current).max(0);
    let restored = amount.min(headroom);
    resources.power.current += restored;
    restored
}

/// Condition ids triggered purely by resource thresholds, for feeding
/// into [`crate::conditions::aggregate_penalties`] alongside the manual
/// list. Characters without a Power pool never read as drained.
pub fn auto_condition_ids(resources: &CombatResources) -> Vec<&'static str> {
    let mut ids = Vec::new();
    if resources.guard.current * 2 < resources.guard.max {
        ids.push(AUTO_BATTERED);
    }
    if resources.power.max > 0 && resources.power.current <= 0 {
        ids.push(AUTO_DRAINED);
    }
    if resources.vitality.current <= 0 {
        ids.push(AUTO_MAIMED);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sw_core::{GuardPoints, PowerPoints, VitalityPoints};

    fn resources(guard: i32, guard_max: i32, vitality: i32, vitality_max: i32) -> CombatResources {
        CombatResources {
            guard: GuardPoints::with_current(guard_max, guard),
            vitality: VitalityPoints::with_current(vitality_max, vitality),
            power: PowerPoints::new(0),
        }
    }

    #[test]
    fn damage_overflows_guard_into_vitality() {
        let mut state = resources(5, 15, 5, 5);
        let report = apply_damage(&mut state, 8);
        assert_eq!(state.guard.current, 0);
        assert_eq!(state.vitality.current, 2);
        assert_eq!(report.absorbed_guard, 5);
        assert_eq!(report.vitality_loss, 3);
        assert_eq!(report.state_before, CombatState::Normal);
        assert_eq!(report.state_after, CombatState::DirectWound);
    }

    #[test]
    fn temporary_guard_soaks_first() {
        let mut state = resources(10, 15, 5, 5);
        state.guard.temporary = 4;
        let report = apply_damage(&mut state, 6);
        assert_eq!(report.absorbed_temporary, 4);
        assert_eq!(report.absorbed_guard, 2);
        assert_eq!(state.guard.temporary, 0);
        assert_eq!(state.guard.current, 8);
        assert_eq!(state.vitality.current, 5);
    }

    #[test]
    fn overkill_floors_everything_at_zero() {
        let mut state = resources(5, 15, 5, 5);
        state.guard.temporary = 2;
        let report = apply_damage(&mut state, 100);
        assert_eq!(state.guard.current, 0);
        assert_eq!(state.guard.temporary, 0);
        assert_eq!(state.vitality.current, 0);
        assert_eq!(report.total_lost(), 12);
        assert_eq!(report.state_after, CombatState::CriticalWound);
    }

    #[test]
    fn non_positive_damage_is_a_no_op() {
        let mut state = resources(5, 15, 5, 5);
        for damage in [0, -4] {
            let report = apply_damage(&mut state, damage);
            assert_eq!(report.total_lost(), 0);
            assert_eq!(state.guard.current, 5);
            assert_eq!(state.vitality.current, 5);
        }
    }

    #[test]
    fn crossing_clamps_down_on_the_zero_flip() {
        assert_eq!(adjust_guard_on_vitality_crossing(15, 20, false, true), 10);
        assert_eq!(adjust_guard_on_vitality_crossing(7, 20, false, true), 7);
        assert_eq!(adjust_guard_on_vitality_crossing(8, 15, false, true), 7);
    }

    #[test]
    fn crossing_raises_up_on_the_recovery_flip() {
        assert_eq!(adjust_guard_on_vitality_crossing(3, 20, true, false), 10);
        assert_eq!(adjust_guard_on_vitality_crossing(12, 20, true, false), 12);
    }

    #[test]
    fn no_flip_means_no_change() {
        assert_eq!(adjust_guard_on_vitality_crossing(15, 20, false, false), 15);
        assert_eq!(adjust_guard_on_vitality_crossing(3, 20, true, true), 3);
    }

    #[test]
    fn heal_guard_caps_at_max() {
        let mut state = resources(10, 15, 5, 5);
        assert_eq!(heal_guard(&mut state, 20), 5);
        assert_eq!(state.guard.current, 15);
        assert_eq!(heal_guard(&mut state, 3), 0);
        assert_eq!(heal_guard(&mut state, -2), 0);
    }

    #[test]
    fn vitality_heals_at_five_to_one() {
        let mut state = resources(10, 15, 2, 5);
        let healing = heal_vitality(&mut state, 13);
        assert_eq!(healing.healed, 2);
        assert_eq!(healing.remainder, 3);
        assert_eq!(state.vitality.current, 4);
    }

    #[test]
    fn small_recovery_comes_back_whole() {
        let mut state = resources(10, 15, 2, 5);
        let healing = heal_vitality(&mut state, 4);
        assert_eq!(healing.healed, 0);
        assert_eq!(healing.remainder, 4);
        assert_eq!(state.vitality.current, 2);
    }

    #[test]
    fn full_vitality_spends_nothing() {
        let mut state = resources(10, 15, 5, 5);
        let healing = heal_vitality(&mut state, 25);
        assert_eq!(healing.healed, 0);
        assert_eq!(healing.remainder, 25);
    }

    #[test]
    fn vitality_headroom_limits_the_exchange() {
        let mut state = resources(10, 15, 4, 5);
        let healing = heal_vitality(&mut state, 25);
        assert_eq!(healing.healed, 1);
        assert_eq!(healing.remainder, 20);
        assert_eq!(state.vitality.current, 5);
    }

    #[test]
    fn healing_out_of_zero_raises_guard() {
        let mut state = resources(0, 20, 0, 6);
        let healing = heal_vitality(&mut state, 5);
        assert_eq!(healing.healed, 1);
        assert_eq!(state.vitality.current, 1);
        assert_eq!(state.guard.current, 10);
    }

    #[test]
    fn effective_guard_max_halves_while_critical() {
        let mut state = resources(5, 15, 3, 5);
        assert_eq!(effective_guard_max(&state), 15);
        state.vitality.current = 0;
        assert_eq!(effective_guard_max(&state), 7);
    }

    #[test]
    fn combat_state_follows_vitality() {
        assert_eq!(combat_state(&resources(5, 15, 5, 5)), CombatState::Normal);
        assert_eq!(
            combat_state(&resources(5, 15, 3, 5)),
            CombatState::DirectWound
        );
        assert_eq!(
            combat_state(&resources(5, 15, 0, 5)),
            CombatState::CriticalWound
        );
    }

    #[test]
    fn power_spends_whole_or_not_at_all() {
        let mut state = resources(5, 15, 5, 5);
        state.power = PowerPoints::new(4);
        assert!(!spend_power(&mut state, 6));
        assert_eq!(state.power.current, 4);
        assert!(spend_power(&mut state, 3));
        assert_eq!(state.power.current, 1);
        assert!(spend_power(&mut state, 0));
        assert_eq!(state.power.current, 1);
    }

    #[test]
    fn power_restores_up_to_max() {
        let mut state = resources(5, 15, 5, 5);
        state.power = PowerPoints::new(6);
        state.power.current = 1;
        assert_eq!(restore_power(&mut state, 10), 5);
        assert_eq!(state.power.current, 6);
        assert_eq!(restore_power(&mut state, -1), 0);
    }

    #[test]
    fn fresh_characters_trigger_nothing() {
        let mut state = resources(15, 15, 5, 5);
        state.power = PowerPoints::new(4);
        assert!(auto_condition_ids(&state).is_empty());
    }

    #[test]
    fn thresholds_raise_their_conditions() {
        let mut state = resources(7, 15, 5, 5);
        assert_eq!(auto_condition_ids(&state), vec![AUTO_BATTERED]);

        state.power = PowerPoints::new(4);
        state.power.current = 0;
        assert_eq!(auto_condition_ids(&state), vec![AUTO_BATTERED, AUTO_DRAINED]);

        state.vitality.current = 0;
        assert_eq!(
            auto_condition_ids(&state),
            vec![AUTO_BATTERED, AUTO_DRAINED, AUTO_MAIMED]
        );
    }

    #[test]
    fn powerless_characters_are_never_drained() {
        let state = resources(15, 15, 5, 5);
        assert_eq!(state.power.max, 0);
        assert!(!auto_condition_ids(&state).contains(&AUTO_DRAINED));
    }

    proptest! {
        #[test]
        fn damage_is_conserved_up_to_clamping(
            guard in 0i32..30,
            temporary in 0i32..10,
            vitality in 0i32..10,
            damage in 0i32..60,
        ) {
            let mut state = resources(guard, 30, vitality, 10);
            state.guard.temporary = temporary;
            let available = state.guard.total_available() + state.vitality.current;
            let report = apply_damage(&mut state, damage);
            prop_assert_eq!(report.total_lost(), damage.min(available));
            prop_assert!(state.guard.current >= 0);
            prop_assert!(state.vitality.current >= 0);
        }

        #[test]
        fn healing_never_exceeds_ceilings(
            guard in 0i32..16,
            vitality in 0i32..6,
            heal in 0i32..40,
        ) {
            let mut state = resources(guard, 15, vitality, 5);
            heal_guard(&mut state, heal);
            prop_assert!(state.guard.current <= state.guard.max);
            let healing = heal_vitality(&mut state, heal);
            prop_assert!(state.vitality.current <= state.vitality.max);
            prop_assert!(healing.remainder >= 0);
        }
    }
}
