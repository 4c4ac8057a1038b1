//! Validation engine -- pure rule evaluation, no I/O.
//!
//! Both entry points accumulate every violation instead of stopping at
//! the first, so a client can fix all problems in one round trip.
//! Defaults for absent fields are applied later by the assembler; an
//! absent optional field is simply not evaluated here.

use serde::Serialize;

use crate::character::{CharacterPatch, NewCharacter};
use crate::error::CoreError;

pub const LEVEL_MIN: i32 = 1;
pub const LEVEL_MAX: i32 = 20;
pub const ABILITY_SCORE_MIN: i32 = 1;
pub const ABILITY_SCORE_MAX: i32 = 30;
pub const NAME_LIMIT: usize = 100;

/// Story-field character limits, matching the sheet editor.
pub const APPEARANCE_LIMIT: usize = 1000;
pub const PERSONALITY_LIMIT: usize = 1500;
pub const BACKSTORY_LIMIT: usize = 5000;
pub const NOTES_LIMIT: usize = 3000;

/// Lowest level at which any class unlocks its subclass choice.
pub const SUBCLASS_UNLOCK_LEVEL: i32 = 3;

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Aggregated outcome of evaluating all rules against one payload.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// Convert into a `Result` for use with `?` in handlers.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CoreError::Validation(self.violations))
        }
    }
}

/// Read-only context for update validation, fetched from the stored
/// record before the patch is evaluated.
#[derive(Debug, Clone)]
pub struct UpdateContext {
    pub class: String,
    pub level: i32,
}

/// Validate a creation payload.
pub fn validate_new_character(input: &NewCharacter) -> ValidationReport {
    let mut violations = Vec::new();

    if input.name.trim().is_empty() {
        violations.push(Violation::new("name", "Character name is required"));
    } else {
        check_name_limit(&input.name, &mut violations);
    }

    if input.race.trim().is_empty() {
        violations.push(Violation::new("race", "Character race is required"));
    }

    if input.class.trim().is_empty() {
        violations.push(Violation::new("class", "Character class is required"));
    }

    if let Some(level) = input.level {
        check_level_range(level, &mut violations);
    }

    if let Some(subclass) = &input.subclass {
        if subclass.trim().is_empty() {
            violations.push(Violation::new(
                "subclass",
                "Subclass must be a non-empty string",
            ));
        }
    }

    check_ability_scores(
        &[
            ("strength", input.strength),
            ("dexterity", input.dexterity),
            ("constitution", input.constitution),
            ("intelligence", input.intelligence),
            ("wisdom", input.wisdom),
            ("charisma", input.charisma),
        ],
        &mut violations,
    );

    check_combat_stats(
        input.hit_points,
        input.max_hit_points,
        input.armor_class,
        &mut violations,
    );
    check_currency(
        input.copper_pieces,
        input.silver_pieces,
        input.gold_pieces,
        &mut violations,
    );
    check_story_fields(
        input.appearance.as_deref(),
        input.personality.as_deref(),
        input.backstory.as_deref(),
        input.notes.as_deref(),
        &mut violations,
    );

    ValidationReport::from_violations(violations)
}

/// Validate an update payload. Only fields present in the patch are
/// evaluated; `ctx` supplies the stored class/level for rules that need
/// the current state of the record.
pub fn validate_patch(patch: &CharacterPatch, ctx: &UpdateContext) -> ValidationReport {
    let mut violations = Vec::new();

    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            violations.push(Violation::new("name", "Character name cannot be empty"));
        } else {
            check_name_limit(name, &mut violations);
        }
    }

    if let Some(level) = patch.level {
        check_level_range(level, &mut violations);
    }

    if let Some(subclass) = &patch.subclass {
        if subclass.trim().is_empty() {
            violations.push(Violation::new(
                "subclass",
                "Subclass must be a non-empty string",
            ));
        } else {
            // The level the record will have after this patch applies.
            let effective_level = patch.level.unwrap_or(ctx.level);
            if effective_level < SUBCLASS_UNLOCK_LEVEL {
                violations.push(Violation::new(
                    "subclass",
                    format!(
                        "Subclass requires level {SUBCLASS_UNLOCK_LEVEL} or higher \
                         (current level: {effective_level})"
                    ),
                ));
            }
        }
    }

    check_ability_scores(
        &[
            ("strength", patch.strength),
            ("dexterity", patch.dexterity),
            ("constitution", patch.constitution),
            ("intelligence", patch.intelligence),
            ("wisdom", patch.wisdom),
            ("charisma", patch.charisma),
        ],
        &mut violations,
    );

    check_combat_stats(
        patch.hit_points,
        patch.max_hit_points,
        patch.armor_class,
        &mut violations,
    );
    check_currency(
        patch.copper_pieces,
        patch.silver_pieces,
        patch.gold_pieces,
        &mut violations,
    );
    check_story_fields(
        patch.appearance.as_deref(),
        patch.personality.as_deref(),
        patch.backstory.as_deref(),
        patch.notes.as_deref(),
        &mut violations,
    );

    ValidationReport::from_violations(violations)
}

fn check_name_limit(name: &str, out: &mut Vec<Violation>) {
    if name.chars().count() > NAME_LIMIT {
        out.push(Violation::new(
            "name",
            format!("Character name must be {NAME_LIMIT} characters or less"),
        ));
    }
}

fn check_level_range(level: i32, out: &mut Vec<Violation>) {
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
        out.push(Violation::new(
            "level",
            format!("Character level must be between {LEVEL_MIN} and {LEVEL_MAX}"),
        ));
    }
}

fn check_ability_scores(scores: &[(&str, Option<i32>)], out: &mut Vec<Violation>) {
    for (field, score) in scores {
        if let Some(score) = score {
            if !(ABILITY_SCORE_MIN..=ABILITY_SCORE_MAX).contains(score) {
                out.push(Violation::new(
                    field,
                    format!(
                        "{} score must be between {ABILITY_SCORE_MIN} and {ABILITY_SCORE_MAX}",
                        capitalize(field)
                    ),
                ));
            }
        }
    }
}

fn check_combat_stats(
    hit_points: Option<i32>,
    max_hit_points: Option<i32>,
    armor_class: Option<i32>,
    out: &mut Vec<Violation>,
) {
    if let Some(hp) = hit_points {
        if hp < 0 {
            out.push(Violation::new("hitPoints", "Hit points must be non-negative"));
        }
    }
    if let Some(max_hp) = max_hit_points {
        if max_hp < 0 {
            out.push(Violation::new(
                "maxHitPoints",
                "Maximum hit points must be non-negative",
            ));
        }
    }
    if let (Some(hp), Some(max_hp)) = (hit_points, max_hit_points) {
        if hp > max_hp {
            out.push(Violation::new(
                "hitPoints",
                "Current hit points cannot exceed maximum hit points",
            ));
        }
    }
    if let Some(ac) = armor_class {
        if ac < 0 {
            out.push(Violation::new(
                "armorClass",
                "Armor class must be non-negative",
            ));
        }
    }
}

fn check_currency(
    copper: Option<i32>,
    silver: Option<i32>,
    gold: Option<i32>,
    out: &mut Vec<Violation>,
) {
    for (field, label, value) in [
        ("copperPieces", "Copper pieces", copper),
        ("silverPieces", "Silver pieces", silver),
        ("goldPieces", "Gold pieces", gold),
    ] {
        if let Some(value) = value {
            if value < 0 {
                out.push(Violation::new(field, format!("{label} must be non-negative")));
            }
        }
    }
}

fn check_story_fields(
    appearance: Option<&str>,
    personality: Option<&str>,
    backstory: Option<&str>,
    notes: Option<&str>,
    out: &mut Vec<Violation>,
) {
    for (field, label, limit, value) in [
        ("appearance", "Appearance", APPEARANCE_LIMIT, appearance),
        ("personality", "Personality", PERSONALITY_LIMIT, personality),
        ("backstory", "Backstory", BACKSTORY_LIMIT, backstory),
        ("notes", "Notes", NOTES_LIMIT, notes),
    ] {
        if let Some(text) = value {
            if text.chars().count() > limit {
                out.push(Violation::new(
                    field,
                    format!("{label} must be {limit} characters or less"),
                ));
            }
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_creation() -> NewCharacter {
        NewCharacter {
            name: "Arannis".to_string(),
            race: "Elf".to_string(),
            class: "Wizard".to_string(),
            ..NewCharacter::default()
        }
    }

    fn ctx() -> UpdateContext {
        UpdateContext {
            class: "Wizard".to_string(),
            level: 5,
        }
    }

    #[test]
    fn minimal_creation_payload_is_valid() {
        let report = validate_new_character(&minimal_creation());
        assert!(report.is_valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let report = validate_new_character(&NewCharacter::default());

        assert!(!report.is_valid);
        let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "race", "class"]);
    }

    #[test]
    fn violations_accumulate_across_rule_groups() {
        let input = NewCharacter {
            name: String::new(),
            strength: Some(0),
            gold_pieces: Some(-5),
            ..minimal_creation()
        };

        let report = validate_new_character(&input);

        let fields: Vec<&str> = report.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "strength", "goldPieces"]);
    }

    #[test]
    fn absent_ability_scores_are_not_evaluated() {
        let input = NewCharacter {
            strength: Some(18),
            ..minimal_creation()
        };
        assert!(validate_new_character(&input).is_valid);
    }

    #[test]
    fn ability_score_bounds_are_inclusive() {
        let mut input = minimal_creation();
        input.charisma = Some(ABILITY_SCORE_MAX);
        input.wisdom = Some(ABILITY_SCORE_MIN);
        assert!(validate_new_character(&input).is_valid);

        input.charisma = Some(ABILITY_SCORE_MAX + 1);
        let report = validate_new_character(&input);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "charisma");
    }

    #[test]
    fn level_out_of_range_is_rejected() {
        let input = NewCharacter {
            level: Some(21),
            ..minimal_creation()
        };
        let report = validate_new_character(&input);
        assert!(!report.is_valid);
        assert_eq!(report.violations[0].field, "level");
    }

    #[test]
    fn hit_points_cannot_exceed_maximum() {
        let input = NewCharacter {
            hit_points: Some(12),
            max_hit_points: Some(8),
            ..minimal_creation()
        };
        let report = validate_new_character(&input);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].message,
            "Current hit points cannot exceed maximum hit points"
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let input = NewCharacter {
            name: "x".repeat(NAME_LIMIT + 1),
            ..minimal_creation()
        };
        let report = validate_new_character(&input);
        assert_eq!(report.violations[0].field, "name");
    }

    #[test]
    fn overlong_backstory_is_rejected() {
        let input = NewCharacter {
            backstory: Some("y".repeat(BACKSTORY_LIMIT + 1)),
            ..minimal_creation()
        };
        let report = validate_new_character(&input);
        assert_eq!(report.violations[0].field, "backstory");
    }

    #[test]
    fn empty_patch_is_valid() {
        let report = validate_patch(&CharacterPatch::default(), &ctx());
        assert!(report.is_valid);
    }

    #[test]
    fn patch_only_evaluates_present_fields() {
        let patch = CharacterPatch {
            level: Some(7),
            ..CharacterPatch::default()
        };
        assert!(validate_patch(&patch, &ctx()).is_valid);

        let patch = CharacterPatch {
            level: Some(0),
            ..CharacterPatch::default()
        };
        let report = validate_patch(&patch, &ctx());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "level");
    }

    #[test]
    fn subclass_uses_patch_level_when_present() {
        // Context level is high enough, but the patch lowers it below
        // the unlock floor in the same request.
        let patch = CharacterPatch {
            level: Some(1),
            subclass: Some("Evocation".to_string()),
            ..CharacterPatch::default()
        };
        let report = validate_patch(&patch, &ctx());
        assert!(!report.is_valid);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "subclass");
    }

    #[test]
    fn subclass_falls_back_to_context_level() {
        let patch = CharacterPatch {
            subclass: Some("Evocation".to_string()),
            ..CharacterPatch::default()
        };
        assert!(validate_patch(&patch, &ctx()).is_valid);

        let low_ctx = UpdateContext {
            class: "Wizard".to_string(),
            level: 1,
        };
        let report = validate_patch(&patch, &low_ctx);
        assert!(!report.is_valid);
        assert_eq!(report.violations[0].field, "subclass");
    }

    #[test]
    fn empty_subclass_in_patch_is_rejected() {
        let patch = CharacterPatch {
            subclass: Some("  ".to_string()),
            ..CharacterPatch::default()
        };
        let report = validate_patch(&patch, &ctx());
        assert_eq!(
            report.violations[0].message,
            "Subclass must be a non-empty string"
        );
    }

    #[test]
    fn into_result_maps_violations_to_core_error() {
        let report = validate_new_character(&NewCharacter::default());
        let err = report.into_result().unwrap_err();
        match err {
            CoreError::Validation(violations) => assert_eq!(violations.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
