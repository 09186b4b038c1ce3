//! Games between two teams and their results.

use serde::Serialize;
use sqlx::FromRow;
use spielplan_core::standings::GameResult;
use spielplan_core::types::DbId;

/// A game joined with both team names and the viewer's favorite flag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameListing {
    pub id: DbId,
    pub home_team_id: DbId,
    pub home_team: String,
    pub away_team_id: DbId,
    pub away_team: String,
    pub home_goals: i32,
    pub away_goals: i32,
    pub is_favorite: bool,
}

/// Just the score columns, used to build the standings.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct GameScore {
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub home_goals: i32,
    pub away_goals: i32,
}

impl From<GameScore> for GameResult {
    fn from(score: GameScore) -> Self {
        GameResult {
            home_team_id: score.home_team_id,
            away_team_id: score.away_team_id,
            home_goals: score.home_goals,
            away_goals: score.away_goals,
        }
    }
}

/// DTO for recording a new game.
#[derive(Debug, Clone)]
pub struct CreateGame {
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub home_goals: i32,
    pub away_goals: i32,
}
