//! Repositories for the race and class rule tables.

use sqlx::PgPool;

use crate::models::rules::{GameClass, Race};

/// Lookup into the `races` reference table.
pub struct RaceRepo;

impl RaceRepo {
    /// Find a race by exact name (case-insensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Race>, sqlx::Error> {
        sqlx::query_as::<_, Race>(
            "SELECT id, name, speed, languages FROM races WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}

/// Lookup into the `classes` reference table.
pub struct GameClassRepo;

impl GameClassRepo {
    /// Find a class by exact name (case-insensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<GameClass>, sqlx::Error> {
        sqlx::query_as::<_, GameClass>(
            "SELECT id, name, languages FROM classes WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}
