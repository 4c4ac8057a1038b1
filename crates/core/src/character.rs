//! Character payload and value types shared across the pipeline.
//!
//! Wire names are camelCase to match the sheet-manager client. Three
//! payload shapes exist:
//! - [`NewCharacter`]: the creation payload. Everything except the
//!   equipment lists is optional at the serde level so the validation
//!   engine can report every problem in one pass instead of failing
//!   at deserialization.
//! - [`CharacterPatch`]: the sparse update payload (all `Option`).
//! - [`AssembledCharacter`]: the fully-defaulted record produced by
//!   [`crate::assembly::assemble`], ready for insertion.

use serde::{Deserialize, Serialize};

use crate::equipment::{
    Armor, InventoryItem, RawArmorEntry, RawInventoryEntry, RawWeaponEntry, Weapon,
};
use crate::types::DbId;

/// One entry in the multiclass list. At creation the list holds exactly
/// one entry mirroring the character's class and level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassLevel {
    pub class: String,
    pub level: i32,
}

/// Death-save tracker: three slots, all false at creation.
pub type DeathSaveTriple = [bool; 3];

/// The composite background-characteristics object as submitted by the
/// client. Stored decomposed into four independent lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundCharacteristics {
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub ideals: Vec<String>,
    #[serde(default)]
    pub bonds: Vec<String>,
    #[serde(default)]
    pub flaws: Vec<String>,
}

/// Client payload for character creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub subrace: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub subclass: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub background: Option<String>,

    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub dexterity: Option<i32>,
    #[serde(default)]
    pub constitution: Option<i32>,
    #[serde(default)]
    pub intelligence: Option<i32>,
    #[serde(default)]
    pub wisdom: Option<i32>,
    #[serde(default)]
    pub charisma: Option<i32>,

    #[serde(default)]
    pub hit_points: Option<i32>,
    #[serde(default)]
    pub max_hit_points: Option<i32>,
    #[serde(default)]
    pub armor_class: Option<i32>,

    /// Raw equipment lists in whatever shape the client managed to
    /// produce; normalized by the equipment reconciler.
    #[serde(default)]
    pub inventory: Vec<RawInventoryEntry>,
    #[serde(default)]
    pub weapons: Vec<RawWeaponEntry>,
    #[serde(default)]
    pub armor: Vec<RawArmorEntry>,

    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub background_characteristics: Option<BackgroundCharacteristics>,

    #[serde(default)]
    pub copper_pieces: Option<i32>,
    #[serde(default)]
    pub silver_pieces: Option<i32>,
    #[serde(default)]
    pub gold_pieces: Option<i32>,

    #[serde(default)]
    pub appearance: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sparse update payload. Absent fields are never touched; `speed`,
/// `race`, `class`, and the owner are not updatable at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub subrace: Option<String>,
    pub subclass: Option<String>,
    pub level: Option<i32>,
    pub alignment: Option<String>,
    pub background: Option<String>,

    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,

    pub hit_points: Option<i32>,
    pub max_hit_points: Option<i32>,
    pub armor_class: Option<i32>,

    /// Equipment collections are replaced whole on update; this is the
    /// only way equip state can change after creation.
    pub inventory: Option<Vec<InventoryItem>>,
    pub weapons: Option<Vec<Weapon>>,
    pub armor: Option<Vec<Armor>>,

    pub languages: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub background_characteristics: Option<BackgroundCharacteristics>,

    pub death_save_successes: Option<DeathSaveTriple>,
    pub death_save_failures: Option<DeathSaveTriple>,

    pub copper_pieces: Option<i32>,
    pub silver_pieces: Option<i32>,
    pub gold_pieces: Option<i32>,

    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub backstory: Option<String>,
    pub notes: Option<String>,
}

/// A fully-defaulted character ready for persistence. Produced only by
/// [`crate::assembly::assemble`]; every invariant (score defaults,
/// multiclass shape, death-save init, derived speed) is established
/// there and nowhere else.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssembledCharacter {
    pub owner_id: DbId,

    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub class: String,
    pub subclass: Option<String>,
    pub level: i32,
    pub alignment: Option<String>,
    pub background: Option<String>,

    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,

    pub hit_points: i32,
    pub max_hit_points: i32,
    pub armor_class: i32,
    pub speed: i32,

    pub classes: Vec<ClassLevel>,
    pub total_level: i32,

    pub inventory: Vec<InventoryItem>,
    pub weapons: Vec<Weapon>,
    pub armor: Vec<Armor>,

    pub languages: Vec<String>,
    pub skills: Vec<String>,

    pub personality_traits: Vec<String>,
    pub ideals: Vec<String>,
    pub bonds: Vec<String>,
    pub flaws: Vec<String>,

    pub death_save_successes: DeathSaveTriple,
    pub death_save_failures: DeathSaveTriple,

    pub copper_pieces: i32,
    pub silver_pieces: i32,
    pub gold_pieces: i32,

    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub backstory: Option<String>,
    pub notes: Option<String>,
}
