//! Repository for the `teams` table.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::team::{CreateTeam, Team};

const COLUMNS: &str = "id, name, trainer, group_name";

/// Provides team lookups and inserts.
pub struct TeamRepo;

impl TeamRepo {
    /// List all teams alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY name, id");
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }

    /// Find a team by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (name, trainer, group_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .bind(&input.trainer)
            .bind(&input.group_name)
            .fetch_one(pool)
            .await
    }
}
