//! Rule-table rows: the race and class reference data the pipeline
//! consumes. Only the attributes the core reads are modeled here; the
//! full catalogs live with the reference-data tooling.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use vellum_core::types::DbId;

/// A race row from the `races` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: DbId,
    pub name: String,
    /// Base movement speed in feet. NULL means the reference data was
    /// imported incomplete; creation fails on it rather than guessing.
    pub speed: Option<i32>,
    pub languages: Json<Vec<String>>,
}

/// A class row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClass {
    pub id: DbId,
    pub name: String,
    pub languages: Json<Vec<String>>,
}
