//! Record assembly -- the creation path's final, single defaulting step.
//!
//! The validation engine has already accepted the payload and the
//! caller has already reconciled equipment, derived languages, and
//! looked up the race's speed. This module combines those pieces into
//! an [`AssembledCharacter`] and applies every default exactly once:
//! no other component falls back to a default value.

use crate::character::{AssembledCharacter, ClassLevel, NewCharacter};
use crate::equipment::Reconciled;
use crate::types::DbId;

/// Ability scores and the client-supplied combat stats default to 10.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;
pub const DEFAULT_COMBAT_STAT: i32 = 10;
pub const DEFAULT_LEVEL: i32 = 1;

/// Build the canonical record for a validated creation payload.
///
/// Establishes the creation invariants: the multiclass list holds
/// exactly one entry mirroring class/level and `total_level` equals its
/// sum; death-save triples start all-false; equip state and language
/// set come in already normalized; `speed` is the server-derived value,
/// regardless of anything the client sent.
pub fn assemble(
    input: NewCharacter,
    owner_id: DbId,
    equipment: Reconciled,
    languages: Vec<String>,
    speed: i32,
) -> AssembledCharacter {
    let level = input.level.unwrap_or(DEFAULT_LEVEL);
    let characteristics = input.background_characteristics.unwrap_or_default();

    AssembledCharacter {
        owner_id,

        name: input.name.trim().to_string(),
        race: input.race,
        subrace: input.subrace,
        class: input.class.clone(),
        subclass: input.subclass,
        level,
        alignment: input.alignment,
        background: input.background,

        strength: input.strength.unwrap_or(DEFAULT_ABILITY_SCORE),
        dexterity: input.dexterity.unwrap_or(DEFAULT_ABILITY_SCORE),
        constitution: input.constitution.unwrap_or(DEFAULT_ABILITY_SCORE),
        intelligence: input.intelligence.unwrap_or(DEFAULT_ABILITY_SCORE),
        wisdom: input.wisdom.unwrap_or(DEFAULT_ABILITY_SCORE),
        charisma: input.charisma.unwrap_or(DEFAULT_ABILITY_SCORE),

        hit_points: input.hit_points.unwrap_or(DEFAULT_COMBAT_STAT),
        max_hit_points: input.max_hit_points.unwrap_or(DEFAULT_COMBAT_STAT),
        armor_class: input.armor_class.unwrap_or(DEFAULT_COMBAT_STAT),
        speed,

        classes: vec![ClassLevel {
            class: input.class,
            level,
        }],
        total_level: level,

        inventory: equipment.inventory,
        weapons: equipment.weapons,
        armor: equipment.armor,

        languages,
        skills: input.skills,

        personality_traits: characteristics.personality_traits,
        ideals: characteristics.ideals,
        bonds: characteristics.bonds,
        flaws: characteristics.flaws,

        death_save_successes: [false; 3],
        death_save_failures: [false; 3],

        copper_pieces: input.copper_pieces.unwrap_or(0),
        silver_pieces: input.silver_pieces.unwrap_or(0),
        gold_pieces: input.gold_pieces.unwrap_or(0),

        appearance: input.appearance,
        personality: input.personality,
        backstory: input.backstory,
        notes: input.notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{InventoryItem, Reconciled};

    fn wizard_payload() -> NewCharacter {
        NewCharacter {
            name: "Arannis".to_string(),
            race: "Elf".to_string(),
            class: "Wizard".to_string(),
            level: Some(1),
            ..NewCharacter::default()
        }
    }

    #[test]
    fn absent_ability_scores_default_to_ten() {
        let record = assemble(wizard_payload(), 7, Reconciled::default(), vec![], 30);

        for score in [
            record.strength,
            record.dexterity,
            record.constitution,
            record.intelligence,
            record.wisdom,
            record.charisma,
        ] {
            assert_eq!(score, DEFAULT_ABILITY_SCORE);
        }
    }

    #[test]
    fn supplied_scores_are_kept_verbatim() {
        let input = NewCharacter {
            intelligence: Some(17),
            ..wizard_payload()
        };
        let record = assemble(input, 7, Reconciled::default(), vec![], 30);

        assert_eq!(record.intelligence, 17);
        assert_eq!(record.strength, DEFAULT_ABILITY_SCORE);
    }

    #[test]
    fn multiclass_structure_mirrors_class_and_level() {
        let input = NewCharacter {
            level: Some(3),
            ..wizard_payload()
        };
        let record = assemble(input, 7, Reconciled::default(), vec![], 30);

        assert_eq!(
            record.classes,
            vec![ClassLevel {
                class: "Wizard".to_string(),
                level: 3
            }]
        );
        assert_eq!(record.total_level, 3);
    }

    #[test]
    fn level_defaults_to_one() {
        let input = NewCharacter {
            level: None,
            ..wizard_payload()
        };
        let record = assemble(input, 7, Reconciled::default(), vec![], 30);

        assert_eq!(record.level, DEFAULT_LEVEL);
        assert_eq!(record.total_level, DEFAULT_LEVEL);
    }

    #[test]
    fn death_saves_initialize_all_false() {
        let record = assemble(wizard_payload(), 7, Reconciled::default(), vec![], 30);

        assert_eq!(record.death_save_successes, [false, false, false]);
        assert_eq!(record.death_save_failures, [false, false, false]);
    }

    #[test]
    fn derived_inputs_are_attached_unchanged() {
        let equipment = Reconciled {
            inventory: vec![InventoryItem {
                name: "Spellbook".to_string(),
                quantity: 1,
            }],
            ..Reconciled::default()
        };
        let record = assemble(
            wizard_payload(),
            7,
            equipment,
            vec!["Common".to_string(), "Elvish".to_string()],
            30,
        );

        assert_eq!(record.owner_id, 7);
        assert_eq!(record.speed, 30);
        assert_eq!(record.languages, vec!["Common", "Elvish"]);
        assert_eq!(record.inventory.len(), 1);
    }

    #[test]
    fn composite_characteristics_are_decomposed_at_creation() {
        let input = NewCharacter {
            background_characteristics: Some(crate::character::BackgroundCharacteristics {
                personality_traits: vec!["Curious".to_string()],
                ideals: vec!["Knowledge".to_string()],
                bonds: vec![],
                flaws: vec!["Overconfident".to_string()],
            }),
            ..wizard_payload()
        };
        let record = assemble(input, 7, Reconciled::default(), vec![], 30);

        assert_eq!(record.personality_traits, vec!["Curious"]);
        assert_eq!(record.ideals, vec!["Knowledge"]);
        assert!(record.bonds.is_empty());
        assert_eq!(record.flaws, vec!["Overconfident"]);
    }
}
