//! Repository for the `favorites` join table.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::favorite::FavoriteToggle;

/// Provides the per-user favorite toggle.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Flip `user_id`'s favorite flag on `game_id`.
    ///
    /// Removes the favorite if present; otherwise inserts it, but only when
    /// the game exists.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        game_id: DbId,
    ) -> Result<FavoriteToggle, sqlx::Error> {
        let removed = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND game_id = $2")
            .bind(user_id)
            .bind(game_id)
            .execute(pool)
            .await?;
        if removed.rows_affected() > 0 {
            return Ok(FavoriteToggle::Removed);
        }

        let inserted = sqlx::query(
            "INSERT INTO favorites (user_id, game_id)
             SELECT $1, id FROM games WHERE id = $2
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(game_id)
        .execute(pool)
        .await?;

        if inserted.rows_affected() > 0 {
            Ok(FavoriteToggle::Added)
        } else {
            Ok(FavoriteToggle::GameMissing)
        }
    }
}
