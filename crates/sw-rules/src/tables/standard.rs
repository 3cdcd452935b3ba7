//! The builtin table set.

use super::{
    ArchetypeDef, ConditionCategory, ConditionInfo, DicePenalty, Rulebook, SizeRow, SkillDef,
};
use std::collections::BTreeMap;
use sw_core::{Attribute, CreatureSize};

fn skill(name: &str, attribute: Attribute) -> SkillDef {
    SkillDef {
        name: name.to_owned(),
        attribute,
        load_sensitive: false,
        requires_proficiency: false,
        instrument: None,
        combat: false,
    }
}

fn condition(name: &str, category: ConditionCategory) -> ConditionInfo {
    ConditionInfo {
        name: name.to_owned(),
        category,
        stackable: false,
        max_stacks: 1,
        implies: Vec::new(),
        dice_penalty: None,
    }
}

fn scaling(penalty: DicePenalty) -> DicePenalty {
    DicePenalty {
        scales_with_stacks: true,
        ..penalty
    }
}

pub(super) fn build() -> Rulebook {
    use Attribute::{Endurance, Finesse, Might, Presence, Will, Wits};
    use ConditionCategory::{Magical, Mental, Physical};

    let mut skills = BTreeMap::new();
    skills.insert(
        "blades".to_owned(),
        SkillDef {
            combat: true,
            ..skill("Blades", Might)
        },
    );
    skills.insert(
        "brawling".to_owned(),
        SkillDef {
            combat: true,
            ..skill("Brawling", Might)
        },
    );
    skills.insert(
        "archery".to_owned(),
        SkillDef {
            combat: true,
            load_sensitive: true,
            ..skill("Archery", Finesse)
        },
    );
    skills.insert(
        "arcana".to_owned(),
        SkillDef {
            combat: true,
            requires_proficiency: true,
            ..skill("Arcana", Will)
        },
    );
    skills.insert(
        "athletics".to_owned(),
        SkillDef {
            load_sensitive: true,
            ..skill("Athletics", Might)
        },
    );
    skills.insert(
        "acrobatics".to_owned(),
        SkillDef {
            load_sensitive: true,
            ..skill("Acrobatics", Finesse)
        },
    );
    skills.insert(
        "stealth".to_owned(),
        SkillDef {
            load_sensitive: true,
            ..skill("Stealth", Finesse)
        },
    );
    skills.insert(
        "fortitude".to_owned(),
        SkillDef {
            load_sensitive: true,
            ..skill("Fortitude", Endurance)
        },
    );
    skills.insert("ride".to_owned(), skill("Ride", Finesse));
    skills.insert(
        "lockpicking".to_owned(),
        SkillDef {
            requires_proficiency: true,
            instrument: Some("lockpicks".to_owned()),
            ..skill("Lockpicking", Finesse)
        },
    );
    skills.insert(
        "crafting".to_owned(),
        SkillDef {
            requires_proficiency: true,
            instrument: Some("artisan tools".to_owned()),
            ..skill("Crafting", Finesse)
        },
    );
    skills.insert("survival".to_owned(), skill("Survival", Wits));
    skills.insert("perception".to_owned(), skill("Perception", Wits));
    skills.insert(
        "lore".to_owned(),
        SkillDef {
            requires_proficiency: true,
            ..skill("Lore", Wits)
        },
    );
    skills.insert(
        "medicine".to_owned(),
        SkillDef {
            requires_proficiency: true,
            instrument: Some("healer's kit".to_owned()),
            ..skill("Medicine", Wits)
        },
    );
    skills.insert(
        "alchemy".to_owned(),
        SkillDef {
            requires_proficiency: true,
            instrument: Some("alchemist's kit".to_owned()),
            ..skill("Alchemy", Wits)
        },
    );
    skills.insert("persuasion".to_owned(), skill("Persuasion", Presence));
    skills.insert("intimidation".to_owned(), skill("Intimidation", Presence));
    skills.insert("performance".to_owned(), skill("Performance", Presence));

    let mut conditions = BTreeMap::new();
    conditions.insert(
        "bleeding".to_owned(),
        ConditionInfo {
            stackable: true,
            max_stacks: 3,
            dice_penalty: Some(scaling(DicePenalty::all(-1))),
            ..condition("Bleeding", Physical)
        },
    );
    conditions.insert(
        "burning".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::all(-1)),
            ..condition("Burning", Physical)
        },
    );
    conditions.insert(
        "poisoned".to_owned(),
        ConditionInfo {
            stackable: true,
            max_stacks: 3,
            dice_penalty: Some(scaling(DicePenalty::attributes([Might, Endurance], -1))),
            ..condition("Poisoned", Physical)
        },
    );
    conditions.insert(
        "dazed".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::attributes([Wits, Will], -1)),
            ..condition("Dazed", Mental)
        },
    );
    conditions.insert(
        "blinded".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::all(-2)),
            ..condition("Blinded", Physical)
        },
    );
    conditions.insert(
        "frightened".to_owned(),
        ConditionInfo {
            stackable: true,
            max_stacks: 3,
            dice_penalty: Some(scaling(DicePenalty::attributes([Will, Presence], -1))),
            ..condition("Frightened", Mental)
        },
    );
    conditions.insert(
        "exhausted".to_owned(),
        ConditionInfo {
            stackable: true,
            max_stacks: 5,
            dice_penalty: Some(scaling(DicePenalty::all(-1))),
            ..condition("Exhausted", Physical)
        },
    );
    conditions.insert(
        "prone".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::attributes([Might, Finesse], -1)),
            ..condition("Prone", Physical)
        },
    );
    conditions.insert("slowed".to_owned(), condition("Slowed", Physical));
    conditions.insert(
        "grappled".to_owned(),
        ConditionInfo {
            implies: vec!["slowed".to_owned()],
            dice_penalty: Some(DicePenalty::attributes([Finesse], -1)),
            ..condition("Grappled", Physical)
        },
    );
    conditions.insert(
        "cursed".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::all(-1)),
            ..condition("Cursed", Magical)
        },
    );
    conditions.insert(
        "battered".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::all(-1)),
            ..condition("Battered", Physical)
        },
    );
    conditions.insert(
        "drained".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::attributes([Will], -2)),
            ..condition("Drained", Magical)
        },
    );
    conditions.insert(
        "maimed".to_owned(),
        ConditionInfo {
            dice_penalty: Some(DicePenalty::all(-2)),
            ..condition("Maimed", Physical)
        },
    );
    conditions.insert(
        "unconscious".to_owned(),
        ConditionInfo {
            implies: vec!["prone".to_owned()],
            ..condition("Unconscious", Physical)
        },
    );

    let mut sizes = BTreeMap::new();
    sizes.insert(
        CreatureSize::Tiny,
        SizeRow {
            guard_bonus: -4,
            carry_bonus: -20,
        },
    );
    sizes.insert(
        CreatureSize::Small,
        SizeRow {
            guard_bonus: -2,
            carry_bonus: -10,
        },
    );
    sizes.insert(CreatureSize::Medium, SizeRow::default());
    sizes.insert(
        CreatureSize::Large,
        SizeRow {
            guard_bonus: 4,
            carry_bonus: 20,
        },
    );
    sizes.insert(
        CreatureSize::Huge,
        SizeRow {
            guard_bonus: 8,
            carry_bonus: 40,
        },
    );

    let mut archetypes = BTreeMap::new();
    archetypes.insert(
        "warden".to_owned(),
        ArchetypeDef {
            name: "Warden".to_owned(),
            base_guard: 18,
            guard_per_level: 3,
            base_power: 2,
            power_per_level: 1,
        },
    );
    archetypes.insert(
        "skirmisher".to_owned(),
        ArchetypeDef {
            name: "Skirmisher".to_owned(),
            base_guard: 12,
            guard_per_level: 2,
            base_power: 4,
            power_per_level: 1,
        },
    );
    archetypes.insert(
        "mystic".to_owned(),
        ArchetypeDef {
            name: "Mystic".to_owned(),
            base_guard: 9,
            guard_per_level: 1,
            base_power: 10,
            power_per_level: 3,
        },
    );
    archetypes.insert(
        "wanderer".to_owned(),
        ArchetypeDef {
            name: "Wanderer".to_owned(),
            base_guard: 12,
            guard_per_level: 2,
            base_power: 6,
            power_per_level: 2,
        },
    );

    Rulebook {
        skills,
        conditions,
        sizes,
        archetypes,
    }
}
