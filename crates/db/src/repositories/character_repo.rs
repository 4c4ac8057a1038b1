//! Repository for the `characters` table.
//!
//! Every read and write is scoped by owner except `delete_by_id`,
//! whose callers verify ownership first (the not-found response is the
//! same either way, so non-owners learn nothing).

use sqlx::types::Json;
use sqlx::PgPool;
use vellum_core::character::AssembledCharacter;
use vellum_core::patch::CharacterMutation;
use vellum_core::types::DbId;

use crate::models::character::CharacterRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, race, subrace, class, subclass, level, alignment, \
     background, strength, dexterity, constitution, intelligence, wisdom, charisma, \
     hit_points, max_hit_points, armor_class, speed, classes, total_level, \
     inventory, weapons, armor, languages, skills, \
     personality_traits, ideals, bonds, flaws, \
     death_save_successes, death_save_failures, \
     copper_pieces, silver_pieces, gold_pieces, \
     appearance, personality, backstory, notes, created_at, updated_at";

/// Provides owner-scoped CRUD for character records.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a fully assembled character, returning the stored row
    /// with its assigned id.
    pub async fn create(
        pool: &PgPool,
        input: &AssembledCharacter,
    ) -> Result<CharacterRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (
                owner_id, name, race, subrace, class, subclass, level, alignment, background,
                strength, dexterity, constitution, intelligence, wisdom, charisma,
                hit_points, max_hit_points, armor_class, speed, classes, total_level,
                inventory, weapons, armor, languages, skills,
                personality_traits, ideals, bonds, flaws,
                death_save_successes, death_save_failures,
                copper_pieces, silver_pieces, gold_pieces,
                appearance, personality, backstory, notes
             ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9,
                $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, $20, $21,
                $22, $23, $24, $25, $26,
                $27, $28, $29, $30,
                $31, $32,
                $33, $34, $35,
                $36, $37, $38, $39
             ) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterRecord>(&query)
            .bind(input.owner_id)
            .bind(&input.name)
            .bind(&input.race)
            .bind(&input.subrace)
            .bind(&input.class)
            .bind(&input.subclass)
            .bind(input.level)
            .bind(&input.alignment)
            .bind(&input.background)
            .bind(input.strength)
            .bind(input.dexterity)
            .bind(input.constitution)
            .bind(input.intelligence)
            .bind(input.wisdom)
            .bind(input.charisma)
            .bind(input.hit_points)
            .bind(input.max_hit_points)
            .bind(input.armor_class)
            .bind(input.speed)
            .bind(Json(&input.classes))
            .bind(input.total_level)
            .bind(Json(&input.inventory))
            .bind(Json(&input.weapons))
            .bind(Json(&input.armor))
            .bind(Json(&input.languages))
            .bind(Json(&input.skills))
            .bind(Json(&input.personality_traits))
            .bind(Json(&input.ideals))
            .bind(Json(&input.bonds))
            .bind(Json(&input.flaws))
            .bind(Json(&input.death_save_successes))
            .bind(Json(&input.death_save_failures))
            .bind(input.copper_pieces)
            .bind(input.silver_pieces)
            .bind(input.gold_pieces)
            .bind(&input.appearance)
            .bind(&input.personality)
            .bind(&input.backstory)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List all characters owned by `owner_id`, most recently updated
    /// first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<CharacterRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE owner_id = $1
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, CharacterRecord>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Find one character by id, visible only to its owner.
    pub async fn find_by_id_and_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<CharacterRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, CharacterRecord>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a mutation set to an owned character. Absent fields keep
    /// their stored values (COALESCE). Returns the number of rows
    /// affected; 0 means the record vanished or is not owned.
    pub async fn update_by_id_and_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        mutation: &CharacterMutation,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE characters SET
                name = COALESCE($3, name),
                subrace = COALESCE($4, subrace),
                subclass = COALESCE($5, subclass),
                level = COALESCE($6, level),
                alignment = COALESCE($7, alignment),
                background = COALESCE($8, background),
                strength = COALESCE($9, strength),
                dexterity = COALESCE($10, dexterity),
                constitution = COALESCE($11, constitution),
                intelligence = COALESCE($12, intelligence),
                wisdom = COALESCE($13, wisdom),
                charisma = COALESCE($14, charisma),
                hit_points = COALESCE($15, hit_points),
                max_hit_points = COALESCE($16, max_hit_points),
                armor_class = COALESCE($17, armor_class),
                inventory = COALESCE($18, inventory),
                weapons = COALESCE($19, weapons),
                armor = COALESCE($20, armor),
                languages = COALESCE($21, languages),
                skills = COALESCE($22, skills),
                personality_traits = COALESCE($23, personality_traits),
                ideals = COALESCE($24, ideals),
                bonds = COALESCE($25, bonds),
                flaws = COALESCE($26, flaws),
                death_save_successes = COALESCE($27, death_save_successes),
                death_save_failures = COALESCE($28, death_save_failures),
                copper_pieces = COALESCE($29, copper_pieces),
                silver_pieces = COALESCE($30, silver_pieces),
                gold_pieces = COALESCE($31, gold_pieces),
                appearance = COALESCE($32, appearance),
                personality = COALESCE($33, personality),
                backstory = COALESCE($34, backstory),
                notes = COALESCE($35, notes),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .bind(&mutation.name)
        .bind(&mutation.subrace)
        .bind(&mutation.subclass)
        .bind(mutation.level)
        .bind(&mutation.alignment)
        .bind(&mutation.background)
        .bind(mutation.strength)
        .bind(mutation.dexterity)
        .bind(mutation.constitution)
        .bind(mutation.intelligence)
        .bind(mutation.wisdom)
        .bind(mutation.charisma)
        .bind(mutation.hit_points)
        .bind(mutation.max_hit_points)
        .bind(mutation.armor_class)
        .bind(mutation.inventory.as_ref().map(Json))
        .bind(mutation.weapons.as_ref().map(Json))
        .bind(mutation.armor.as_ref().map(Json))
        .bind(mutation.languages.as_ref().map(Json))
        .bind(mutation.skills.as_ref().map(Json))
        .bind(mutation.personality_traits.as_ref().map(Json))
        .bind(mutation.ideals.as_ref().map(Json))
        .bind(mutation.bonds.as_ref().map(Json))
        .bind(mutation.flaws.as_ref().map(Json))
        .bind(mutation.death_save_successes.as_ref().map(Json))
        .bind(mutation.death_save_failures.as_ref().map(Json))
        .bind(mutation.copper_pieces)
        .bind(mutation.silver_pieces)
        .bind(mutation.gold_pieces)
        .bind(&mutation.appearance)
        .bind(&mutation.personality)
        .bind(&mutation.backstory)
        .bind(&mutation.notes)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a character by id. Returns `true` if a row
    /// was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
