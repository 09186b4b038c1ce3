//! Repository for the `todos` table. Every query is scoped to its owner.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo};

const COLUMNS: &str = "id, user_id, content, due";

/// Provides per-user to-do operations.
pub struct TodoRepo;

impl TodoRepo {
    /// List a user's to-dos, earliest due date first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE user_id = $1 ORDER BY due, id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a to-do owned by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTodo,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (user_id, content, due)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .bind(&input.content)
            .bind(input.due)
            .fetch_one(pool)
            .await
    }

    /// Delete a to-do if it belongs to `user_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn complete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
