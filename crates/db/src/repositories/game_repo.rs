//! Repository for the `games` table.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::game::{CreateGame, GameListing, GameScore};

/// Games joined with team names. `$1` is the viewing user for the
/// favorite flag.
const LISTING_SELECT: &str = "SELECT g.id,
            g.home_team_id, h.name AS home_team,
            g.away_team_id, a.name AS away_team,
            g.home_goals, g.away_goals,
            (f.user_id IS NOT NULL) AS is_favorite
     FROM games g
     JOIN teams h ON h.id = g.home_team_id
     JOIN teams a ON a.id = g.away_team_id
     LEFT JOIN favorites f ON f.game_id = g.id AND f.user_id = $1";

/// Provides game listing, inserts, and result updates.
pub struct GameRepo;

impl GameRepo {
    /// List every game, newest first, flagged with `viewer_id`'s favorites.
    pub async fn list_for_viewer(
        pool: &PgPool,
        viewer_id: DbId,
    ) -> Result<Vec<GameListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} ORDER BY g.id DESC");
        sqlx::query_as::<_, GameListing>(&query)
            .bind(viewer_id)
            .fetch_all(pool)
            .await
    }

    /// List only the games `user_id` has marked as favorite.
    pub async fn list_favorites(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<GameListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE f.user_id IS NOT NULL ORDER BY g.id DESC");
        sqlx::query_as::<_, GameListing>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All scores, for the standings table.
    pub async fn list_scores(pool: &PgPool) -> Result<Vec<GameScore>, sqlx::Error> {
        sqlx::query_as::<_, GameScore>(
            "SELECT home_team_id, away_team_id, home_goals, away_goals FROM games",
        )
        .fetch_all(pool)
        .await
    }

    /// Record a new game, returning its ID.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO games (home_team_id, away_team_id, home_goals, away_goals)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.home_team_id)
        .bind(input.away_team_id)
        .bind(input.home_goals)
        .bind(input.away_goals)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Overwrite a game's score. Returns `true` if the game exists.
    pub async fn update_result(
        pool: &PgPool,
        id: DbId,
        home_goals: i32,
        away_goals: i32,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE games SET home_goals = $2, away_goals = $3 WHERE id = $1")
                .bind(id)
                .bind(home_goals)
                .bind(away_goals)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
