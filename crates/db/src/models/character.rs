//! Character row model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use vellum_core::character::{ClassLevel, DeathSaveTriple};
use vellum_core::equipment::{Armor, InventoryItem, Weapon};
use vellum_core::types::{DbId, Timestamp};

/// A character row from the `characters` table.
///
/// Collection-valued attributes are JSONB columns; `speed` is the
/// server-derived value and `owner_id` is fixed at creation.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: DbId,
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

    pub classes: Json<Vec<ClassLevel>>,
    pub total_level: i32,

    pub inventory: Json<Vec<InventoryItem>>,
    pub weapons: Json<Vec<Weapon>>,
    pub armor: Json<Vec<Armor>>,

    pub languages: Json<Vec<String>>,
    pub skills: Json<Vec<String>>,

    pub personality_traits: Json<Vec<String>>,
    pub ideals: Json<Vec<String>>,
    pub bonds: Json<Vec<String>>,
    pub flaws: Json<Vec<String>>,

    pub death_save_successes: Json<DeathSaveTriple>,
    pub death_save_failures: Json<DeathSaveTriple>,

    pub copper_pieces: i32,
    pub silver_pieces: i32,
    pub gold_pieces: i32,

    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub backstory: Option<String>,
    pub notes: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
