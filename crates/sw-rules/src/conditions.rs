//! Condition penalty aggregation.
//!
//! Folds every active condition — the character's own list plus the
//! automatically-triggered ids from resource thresholds — into one map
//! from target to dice delta. The formula calculator then reads a single
//! effective number per attribute out of the map.

use crate::error::RulesResult;
use crate::tables::{ConditionInfo, Rulebook};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use sw_core::{ActiveCondition, Attribute};

/// What a dice penalty applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PenaltyTarget {
    /// Every check, regardless of attribute.
    All,
    /// Checks governed by one attribute.
    Attribute(Attribute),
}

impl std::fmt::Display for PenaltyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Attribute(Attribute::Might) => "might",
            Self::Attribute(Attribute::Finesse) => "finesse",
            Self::Attribute(Attribute::Endurance) => "endurance",
            Self::Attribute(Attribute::Wits) => "wits",
            Self::Attribute(Attribute::Will) => "will",
            Self::Attribute(Attribute::Presence) => "presence",
        };
        write!(f, "{name}")
    }
}

impl From<PenaltyTarget> for String {
    fn from(target: PenaltyTarget) -> Self {
        target.to_string()
    }
}

impl TryFrom<String> for PenaltyTarget {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "all" => Ok(Self::All),
            "might" => Ok(Self::Attribute(Attribute::Might)),
            "finesse" => Ok(Self::Attribute(Attribute::Finesse)),
            "endurance" => Ok(Self::Attribute(Attribute::Endurance)),
            "wits" => Ok(Self::Attribute(Attribute::Wits)),
            "will" => Ok(Self::Attribute(Attribute::Will)),
            "presence" => Ok(Self::Attribute(Attribute::Presence)),
            other => Err(format!("unknown penalty target: {other}")),
        }
    }
}

/// Aggregated dice deltas by target. Missing targets read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PenaltyMap(BTreeMap<PenaltyTarget, i32>);

impl PenaltyMap {
    /// Delta recorded for one target.
    pub fn get(&self, target: PenaltyTarget) -> i32 {
        self.0.get(&target).copied().unwrap_or(0)
    }

    /// Effective delta for checks on one attribute: the all-checks entry
    /// plus the attribute's own.
    pub fn effective(&self, attribute: Attribute) -> i32 {
        self.get(PenaltyTarget::All) + self.get(PenaltyTarget::Attribute(attribute))
    }

    /// No nonzero entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All nonzero entries, in target order.
    pub fn iter(&self) -> impl Iterator<Item = (PenaltyTarget, i32)> + '_ {
        self.0.iter().map(|(target, dice)| (*target, *dice))
    }

    fn add(&mut self, target: PenaltyTarget, dice: i32) {
        let entry = self.0.entry(target).or_insert(0);
        *entry += dice;
        if *entry == 0 {
            self.0.remove(&target);
        }
    }
}

fn apply_condition(map: &mut PenaltyMap, info: &ConditionInfo, stacks: u32) {
    let Some(penalty) = &info.dice_penalty else {
        return;
    };
    let stacks = if info.stackable {
        stacks.clamp(1, info.max_stacks.max(1))
    } else {
        1
    };
    let factor = if penalty.scales_with_stacks {
        stacks as i32
    } else {
        1
    };
    for target in &penalty.targets {
        map.add(*target, penalty.dice * factor);
    }
}

/// Folds the manual condition list and the auto-triggered ids into one
/// penalty map.
///
/// Stackable conditions whose penalty scales multiply it by the stack
/// count, clamped to the table's maximum; everything else applies once.
/// An id present in both lists counts once, with the manual entry (and
/// its stack count) winning. Unknown ids fail fast.
pub fn aggregate_penalties(
    rulebook: &Rulebook,
    manual: &[ActiveCondition],
    auto: &[&str],
) -> RulesResult<PenaltyMap> {
    let mut map = PenaltyMap::default();
    let mut seen = BTreeSet::new();
    for condition in manual {
        let info = rulebook.condition(&condition.id)?;
        seen.insert(condition.id.as_str());
        apply_condition(&mut map, info, condition.stacks);
    }
    for id in auto {
        if !seen.insert(*id) {
            continue;
        }
        let info = rulebook.condition(id)?;
        apply_condition(&mut map, info, 1);
    }
    Ok(map)
}

/// Resolves the closure of a condition set under the table's implied
/// links, for activation flows that want "grappled also applies slowed".
/// Aggregation itself never expands — it scores exactly the list it is
/// given.
pub fn expand_implied(rulebook: &Rulebook, ids: &[&str]) -> RulesResult<BTreeSet<String>> {
    let mut expanded = BTreeSet::new();
    let mut queue: Vec<String> = ids.iter().map(|id| (*id).to_owned()).collect();
    while let Some(id) = queue.pop() {
        let info = rulebook.condition(&id)?;
        if expanded.insert(id) {
            for implied in &info.implies {
                if !expanded.contains(implied) {
                    queue.push(implied.clone());
                }
            }
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;
    use crate::tables::{ConditionCategory, DicePenalty};

    fn book_with(conditions: Vec<(&str, ConditionInfo)>) -> Rulebook {
        let mut book = Rulebook::standard();
        for (id, info) in conditions {
            book.conditions.insert(id.to_owned(), info);
        }
        book
    }

    fn stacking_condition(scales: bool) -> ConditionInfo {
        ConditionInfo {
            name: "Straining".to_owned(),
            category: ConditionCategory::Physical,
            stackable: true,
            max_stacks: 5,
            implies: Vec::new(),
            dice_penalty: Some(DicePenalty {
                targets: BTreeSet::from([PenaltyTarget::All]),
                dice: -1,
                scales_with_stacks: scales,
            }),
        }
    }

    #[test]
    fn scaling_penalty_multiplies_by_stacks() {
        let book = Rulebook::standard();
        let manual = [ActiveCondition::with_stacks("bleeding", 3, "wolf")];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.get(PenaltyTarget::All), -3);
    }

    #[test]
    fn stacks_clamp_to_the_table_maximum() {
        let book = Rulebook::standard();
        let manual = [ActiveCondition::with_stacks("bleeding", 9, "wolf")];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.get(PenaltyTarget::All), -3);
    }

    #[test]
    fn non_scaling_penalty_applies_once() {
        let book = book_with(vec![("straining", stacking_condition(false))]);
        let manual = [ActiveCondition::with_stacks("straining", 4, "pack")];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.get(PenaltyTarget::All), -1);
    }

    #[test]
    fn stacks_on_non_stackable_conditions_are_ignored() {
        let book = Rulebook::standard();
        let manual = [ActiveCondition::with_stacks("prone", 3, "shove")];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.get(PenaltyTarget::Attribute(Attribute::Might)), -1);
        assert_eq!(map.get(PenaltyTarget::Attribute(Attribute::Finesse)), -1);
    }

    #[test]
    fn contributions_sum_per_target() {
        let book = Rulebook::standard();
        let manual = [
            ActiveCondition::new("poisoned", "dart"),
            ActiveCondition::new("prone", "shove"),
        ];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.get(PenaltyTarget::Attribute(Attribute::Might)), -2);
        assert_eq!(map.get(PenaltyTarget::Attribute(Attribute::Endurance)), -1);
        assert_eq!(map.get(PenaltyTarget::Attribute(Attribute::Finesse)), -1);
    }

    #[test]
    fn effective_combines_all_with_the_attribute() {
        let book = Rulebook::standard();
        let manual = [
            ActiveCondition::new("cursed", "witch"),
            ActiveCondition::new("poisoned", "dart"),
        ];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert_eq!(map.effective(Attribute::Might), -2);
        assert_eq!(map.effective(Attribute::Wits), -1);
    }

    #[test]
    fn conditions_without_penalties_contribute_nothing() {
        let book = Rulebook::standard();
        let manual = [ActiveCondition::new("slowed", "spell")];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn manual_entry_wins_over_the_auto_id() {
        let book = book_with(vec![("straining", stacking_condition(true))]);
        let manual = [ActiveCondition::with_stacks("straining", 3, "pack")];
        let map = aggregate_penalties(&book, &manual, &["straining"]).unwrap();
        assert_eq!(map.get(PenaltyTarget::All), -3);
    }

    #[test]
    fn auto_ids_apply_at_one_stack() {
        let book = Rulebook::standard();
        let map = aggregate_penalties(&book, &[], &["battered"]).unwrap();
        assert_eq!(map.get(PenaltyTarget::All), -1);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let book = Rulebook::standard();
        let forward = [
            ActiveCondition::new("cursed", "witch"),
            ActiveCondition::with_stacks("bleeding", 2, "wolf"),
            ActiveCondition::new("dazed", "club"),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            aggregate_penalties(&book, &forward, &[]).unwrap(),
            aggregate_penalties(&book, &backward, &[]).unwrap()
        );
    }

    #[test]
    fn unknown_ids_fail_fast() {
        let book = Rulebook::standard();
        let manual = [ActiveCondition::new("moonstruck", "folklore")];
        assert!(matches!(
            aggregate_penalties(&book, &manual, &[]),
            Err(RulesError::UnknownCondition(id)) if id == "moonstruck"
        ));
        assert!(matches!(
            aggregate_penalties(&book, &[], &["moonstruck"]),
            Err(RulesError::UnknownCondition(_))
        ));
    }

    #[test]
    fn implied_conditions_expand_transitively() {
        let book = Rulebook::standard();
        let expanded = expand_implied(&book, &["grappled"]).unwrap();
        assert!(expanded.contains("grappled"));
        assert!(expanded.contains("slowed"));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn expansion_rejects_unknown_ids() {
        let book = Rulebook::standard();
        assert!(expand_implied(&book, &["moonstruck"]).is_err());
    }

    #[test]
    fn penalty_map_serializes_with_string_keys() {
        let book = Rulebook::standard();
        let manual = [
            ActiveCondition::new("cursed", "witch"),
            ActiveCondition::new("poisoned", "dart"),
        ];
        let map = aggregate_penalties(&book, &manual, &[]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"all":-1,"might":-1,"endurance":-1}"#);
        let back: PenaltyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
