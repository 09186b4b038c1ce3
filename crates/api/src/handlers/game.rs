//! Handlers for games, results, favorites, and the standings table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use spielplan_core::error::CoreError;
use spielplan_core::standings::{compute_standings, split_by_group, GameResult, TeamEntry};
use spielplan_core::tournament::{parse_goals, parse_team_id, validate_pairing};
use spielplan_core::types::DbId;
use spielplan_db::models::favorite::FavoriteToggle;
use spielplan_db::models::game::CreateGame;
use spielplan_db::models::user::User;
use spielplan_db::repositories::{FavoriteRepo, GameRepo, TeamRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{teams_exist, validation_message, UNKNOWN_TEAM};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views::tournament::{favorites_page, games_page, standings_page};

/// Entity name used in not-found messages.
const GAME: &str = "Spiel";

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Form body for `POST /games`. Fields stay strings so bad input can be
/// reported on the page instead of as an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct GameForm {
    #[serde(default)]
    pub home_team_id: String,
    #[serde(default)]
    pub away_team_id: String,
    #[serde(default)]
    pub home_goals: String,
    #[serde(default)]
    pub away_goals: String,
}

/// Form body for `POST /games/{id}/result`.
#[derive(Debug, Deserialize)]
pub struct ResultForm {
    #[serde(default)]
    pub home_goals: String,
    #[serde(default)]
    pub away_goals: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_game_fields(input: &GameForm) -> Result<CreateGame, CoreError> {
    let home_team_id = parse_team_id(&input.home_team_id)?;
    let away_team_id = parse_team_id(&input.away_team_id)?;
    validate_pairing(home_team_id, away_team_id)?;
    Ok(CreateGame {
        home_team_id,
        away_team_id,
        home_goals: parse_goals(&input.home_goals)?,
        away_goals: parse_goals(&input.away_goals)?,
    })
}

fn parse_result_fields(input: &ResultForm) -> Result<(i32, i32), CoreError> {
    Ok((parse_goals(&input.home_goals)?, parse_goals(&input.away_goals)?))
}

/// Parse the new-game form and check both teams exist.
///
/// The outer result carries database failures, the inner one form errors.
async fn parse_game_form(
    state: &AppState,
    input: &GameForm,
) -> AppResult<Result<CreateGame, CoreError>> {
    let game = match parse_game_fields(input) {
        Ok(game) => game,
        Err(err) => return Ok(Err(err)),
    };

    if !teams_exist(state, &[game.home_team_id, game.away_team_id]).await? {
        return Ok(Err(CoreError::Validation(UNKNOWN_TEAM.into())));
    }
    Ok(Ok(game))
}

async fn render_games(
    state: &AppState,
    user: &User,
    error: Option<&str>,
    status: StatusCode,
) -> AppResult<Response> {
    let games = GameRepo::list_for_viewer(&state.pool, user.id).await?;
    let teams = TeamRepo::list(&state.pool).await?;
    Ok((status, Html(games_page(&user.username, &games, &teams, error))).into_response())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /games
pub async fn list_games(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    render_games(&state, &user, None, StatusCode::OK).await
}

/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<GameForm>,
) -> AppResult<Response> {
    let game = match parse_game_form(&state, &input).await? {
        Ok(game) => game,
        Err(err) => {
            let msg = validation_message(err)?;
            return render_games(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };

    let game_id = GameRepo::create(&state.pool, &game).await?;
    tracing::info!(
        user_id = user.id,
        game_id,
        home_team_id = game.home_team_id,
        away_team_id = game.away_team_id,
        "Game recorded",
    );

    Ok(Redirect::to("/games").into_response())
}

/// POST /games/{id}/result
pub async fn update_result(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(game_id): Path<DbId>,
    Form(input): Form<ResultForm>,
) -> AppResult<Response> {
    let (home_goals, away_goals) = match parse_result_fields(&input) {
        Ok(goals) => goals,
        Err(err) => {
            let msg = validation_message(err)?;
            return render_games(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };

    if !GameRepo::update_result(&state.pool, game_id, home_goals, away_goals).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: GAME, id: game_id }));
    }
    tracing::info!(user_id = user.id, game_id, home_goals, away_goals, "Result updated");

    Ok(Redirect::to("/games").into_response())
}

/// POST /games/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(game_id): Path<DbId>,
) -> AppResult<Redirect> {
    match FavoriteRepo::toggle(&state.pool, user.id, game_id).await? {
        FavoriteToggle::Added => {
            tracing::info!(user_id = user.id, game_id, "Favorite added");
        }
        FavoriteToggle::Removed => {
            tracing::info!(user_id = user.id, game_id, "Favorite removed");
        }
        FavoriteToggle::GameMissing => {
            return Err(AppError::Core(CoreError::NotFound { entity: GAME, id: game_id }));
        }
    }
    Ok(Redirect::to("/games"))
}

/// GET /favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let games = GameRepo::list_favorites(&state.pool, user.id).await?;
    Ok(Html(favorites_page(&user.username, &games)))
}

/// GET /standings
pub async fn standings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Html<String>> {
    let teams: Vec<TeamEntry> = TeamRepo::list(&state.pool)
        .await?
        .iter()
        .map(TeamEntry::from)
        .collect();
    let results: Vec<GameResult> = GameRepo::list_scores(&state.pool)
        .await?
        .into_iter()
        .map(GameResult::from)
        .collect();

    let tables = split_by_group(compute_standings(&teams, &results));
    Ok(Html(standings_page(&user.username, &tables)))
}
