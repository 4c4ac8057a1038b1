//! Handlers for the `/characters` resource.
//!
//! Creation runs the full pipeline: validate, look up rule tables,
//! reconcile equipment, derive languages, assemble, persist. Updates
//! go through the patch merger instead and never touch reconciliation
//! or derivation. Every operation is scoped to the authenticated
//! owner; a record that exists under another account is reported as
//! not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vellum_core::character::{CharacterPatch, NewCharacter};
use vellum_core::error::CoreError;
use vellum_core::types::DbId;
use vellum_core::validation::{self, UpdateContext};
use vellum_core::{assembly, equipment, languages};
use vellum_db::models::character::CharacterRecord;
use vellum_db::repositories::{CharacterRepo, GameClassRepo, RaceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut input): Json<NewCharacter>,
) -> AppResult<(StatusCode, Json<CharacterRecord>)> {
    validation::validate_new_character(&input).into_result()?;

    // Speed comes from the race table and only from there. An unknown
    // race is a reference-data failure, not a validation failure.
    let race = RaceRepo::find_by_name(&state.pool, &input.race)
        .await?
        .ok_or(CoreError::RuleLookup {
            table: "races",
            name: input.race.clone(),
        })?;
    let speed = race.speed.ok_or_else(|| CoreError::IncompleteRuleData {
        table: "races",
        name: race.name.clone(),
        field: "speed",
    })?;

    // Unknown classes simply grant no languages.
    let class_languages = GameClassRepo::find_by_name(&state.pool, &input.class)
        .await?
        .map(|class| class.languages.0)
        .unwrap_or_default();

    let raw_inventory = std::mem::take(&mut input.inventory);
    let raw_weapons = std::mem::take(&mut input.weapons);
    let raw_armor = std::mem::take(&mut input.armor);
    let reconciled = equipment::reconcile(raw_inventory, raw_weapons, raw_armor);
    if !reconciled.dropped.is_empty() {
        tracing::warn!(
            owner_id = user.user_id,
            dropped = reconciled.dropped.len(),
            "Excluded unreconcilable equipment entries from creation"
        );
    }

    let starting_languages = languages::starting_languages(&race.languages.0, &class_languages);

    let assembled = assembly::assemble(
        input,
        user.user_id,
        reconciled,
        starting_languages,
        speed,
    );

    let stored = CharacterRepo::create(&state.pool, &assembled).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<CharacterRecord>>> {
    let characters = CharacterRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterRecord>> {
    let character = CharacterRepo::find_by_id_and_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PATCH /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(patch): Json<CharacterPatch>,
) -> AppResult<Json<CharacterRecord>> {
    let current = CharacterRepo::find_by_id_and_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    let ctx = UpdateContext {
        class: current.class.clone(),
        level: current.level,
    };
    validation::validate_patch(&patch, &ctx).into_result()?;

    let mutation = patch.into_mutation();
    let affected =
        CharacterRepo::update_by_id_and_owner(&state.pool, id, user.user_id, &mutation).await?;
    if affected == 0 {
        // The record vanished between the read and the write.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }

    let updated = CharacterRepo::find_by_id_and_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Ownership check first; the delete itself is by id.
    let character = CharacterRepo::find_by_id_and_owner(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    CharacterRepo::delete_by_id(&state.pool, character.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
