//! High-level skill check orchestration.
//!
//! The one-call seam UI actions use: given a rulebook, a character
//! sheet, and a skill id, derive everything the formula needs (penalty
//! context from equipment and load, condition penalties from the manual
//! list plus resource thresholds), compute the pool, and roll it.

use crate::combat::auto_condition_ids;
use crate::conditions::aggregate_penalties;
use crate::error::RulesResult;
use crate::formula::{FormulaBreakdown, PenaltyContext, PoolInput, pool_formula};
use crate::pool::{PoolRoll, roll_pool};
use crate::tables::{Rulebook, SkillDef};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sw_core::{CharacterSheet, Modifier};

/// Per-roll options on top of the sheet's standing state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Situational modifiers granted for this roll only.
    pub extra_modifiers: Vec<Modifier>,
}

/// Result of one orchestrated skill check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckResult {
    /// Rulebook id of the skill that was rolled.
    pub skill: String,
    /// The formula and its itemized terms.
    pub breakdown: FormulaBreakdown,
    /// The rolled pool.
    pub roll: PoolRoll,
}

/// Derives the situational penalty state for one skill from the sheet:
/// overload from carried load against carry capacity, the worn armor
/// tier, and possession of the skill's instrument.
pub fn penalty_context(
    rulebook: &Rulebook,
    sheet: &CharacterSheet,
    skill: &SkillDef,
) -> PenaltyContext {
    let capacity = rulebook.carry_capacity(&sheet.attributes, sheet.size);
    PenaltyContext {
        overloaded: sheet.carried_load > capacity,
        armor: sheet.armor,
        has_instrument: skill
            .instrument
            .as_deref()
            .is_none_or(|instrument| sheet.has_instrument(instrument)),
    }
}

/// Runs one full skill check against the sheet's current state.
///
/// Condition penalties combine the sheet's own condition list with the
/// ids auto-triggered by resource thresholds; an id on both sides counts
/// once. Fails fast if the skill id or any active condition id is not in
/// the rulebook.
pub fn skill_check(
    rulebook: &Rulebook,
    sheet: &CharacterSheet,
    skill_id: &str,
    options: &CheckOptions,
    rng: &mut impl Rng,
) -> RulesResult<SkillCheckResult> {
    let skill = rulebook.skill(skill_id)?;
    let auto = auto_condition_ids(&sheet.resources);
    let penalties = aggregate_penalties(rulebook, &sheet.conditions, &auto)?;

    let mut modifiers = sheet.modifiers.clone();
    modifiers.extend(options.extra_modifiers.iter().cloned());

    let input = PoolInput {
        attribute: skill.attribute,
        attribute_value: sheet.attributes.get(skill.attribute),
        tier: sheet.proficiency(skill_id),
        signature: sheet.is_signature(skill_id),
        level: sheet.level,
        modifiers: &modifiers,
        condition_penalty: penalties.effective(skill.attribute),
        context: penalty_context(rulebook, sheet, skill),
    };
    let breakdown = pool_formula(skill, &input);
    let roll = roll_pool(breakdown.formula, rng);

    Ok(SkillCheckResult {
        skill: skill_id.to_owned(),
        breakdown,
        roll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;
    use crate::formula::TermSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sw_core::{ActiveCondition, AttributeSet, CreatureSize, Die, ProficiencyTier};

    fn fixture() -> (Rulebook, CharacterSheet) {
        let book = Rulebook::standard();
        let mut sheet = CharacterSheet::new("Mira", "warden", 0, 0);
        sheet.level = 6;
        sheet.attributes = AttributeSet::new(3, 2, 2, 1, 1, 2);
        sheet.resources = book
            .derive_resources("warden", 6, &sheet.attributes, CreatureSize::Medium)
            .unwrap();
        sheet
            .proficiencies
            .insert("blades".to_owned(), ProficiencyTier::Versed);
        (book, sheet)
    }

    #[test]
    fn happy_path_rolls_the_expected_pool() {
        let (book, sheet) = fixture();
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(result.skill, "blades");
        assert_eq!(result.breakdown.formula.dice_count, 3);
        assert_eq!(result.breakdown.formula.die, Die::D10);
        assert_eq!(result.roll.faces.len(), 3);
    }

    #[test]
    fn equal_seeds_give_equal_results() {
        let (book, sheet) = fixture();
        let mut first = StdRng::seed_from_u64(33);
        let mut second = StdRng::seed_from_u64(33);
        let options = CheckOptions::default();
        assert_eq!(
            skill_check(&book, &sheet, "blades", &options, &mut first).unwrap(),
            skill_check(&book, &sheet, "blades", &options, &mut second).unwrap()
        );
    }

    #[test]
    fn untrained_skills_fall_back_to_d6() {
        let (book, sheet) = fixture();
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "survival", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(result.breakdown.formula.die, Die::D6);
    }

    #[test]
    fn signature_skill_adds_its_dice() {
        let (book, mut sheet) = fixture();
        sheet.signature_skill = Some("blades".to_owned());
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap();
        // level 6: two signature dice on top of Might 3
        assert_eq!(result.breakdown.formula.dice_count, 5);
    }

    #[test]
    fn manual_conditions_penalize_the_pool() {
        let (book, mut sheet) = fixture();
        sheet
            .conditions
            .push(ActiveCondition::with_stacks("bleeding", 2, "ambush"));
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(result.breakdown.formula.dice_count, 1);
        assert!(
            result
                .breakdown
                .terms
                .iter()
                .any(|term| term.source == TermSource::Conditions && term.dice == -2)
        );
    }

    #[test]
    fn low_guard_triggers_the_battered_penalty() {
        let (book, mut sheet) = fixture();
        sheet.resources.guard.current = 10;
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert!(
            result
                .breakdown
                .terms
                .iter()
                .any(|term| term.source == TermSource::Conditions && term.dice == -1)
        );
    }

    #[test]
    fn extra_modifiers_join_the_breakdown() {
        let (book, sheet) = fixture();
        let options = CheckOptions {
            extra_modifiers: vec![Modifier::bonus("high ground", 1)],
        };
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "blades", &options, &mut rng).unwrap();
        assert_eq!(result.breakdown.formula.dice_count, 4);
        assert!(
            result
                .breakdown
                .terms
                .iter()
                .any(|term| term.source == TermSource::Modifier("high ground".to_owned()))
        );
    }

    #[test]
    fn overload_hits_load_sensitive_checks() {
        let (book, mut sheet) = fixture();
        sheet.carried_load = 40;
        let mut rng = StdRng::seed_from_u64(21);
        let result = skill_check(&book, &sheet, "athletics", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert!(
            result
                .breakdown
                .terms
                .iter()
                .any(|term| term.source == TermSource::Overload)
        );
        let result = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap();
        assert!(
            !result
                .breakdown
                .terms
                .iter()
                .any(|term| term.source == TermSource::Overload)
        );
    }

    #[test]
    fn instrument_possession_comes_from_the_sheet() {
        let (book, mut sheet) = fixture();
        let lockpicking = book.skill("lockpicking").unwrap();
        assert!(!penalty_context(&book, &sheet, lockpicking).has_instrument);
        sheet.instruments.insert("lockpicks".to_owned());
        assert!(penalty_context(&book, &sheet, lockpicking).has_instrument);

        let blades = book.skill("blades").unwrap();
        assert!(penalty_context(&book, &sheet, blades).has_instrument);
    }

    #[test]
    fn unknown_skills_fail_fast() {
        let (book, sheet) = fixture();
        let mut rng = StdRng::seed_from_u64(21);
        let error = skill_check(
            &book,
            &sheet,
            "basket-weaving",
            &CheckOptions::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(error, RulesError::UnknownSkill(id) if id == "basket-weaving"));
    }

    #[test]
    fn unknown_active_conditions_fail_fast() {
        let (book, mut sheet) = fixture();
        sheet
            .conditions
            .push(ActiveCondition::new("moonstruck", "folklore"));
        let mut rng = StdRng::seed_from_u64(21);
        let error = skill_check(&book, &sheet, "blades", &CheckOptions::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(error, RulesError::UnknownCondition(_)));
    }
}
