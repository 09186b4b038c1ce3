//! Route definitions for games, favorites, and standings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// ```text
/// GET  /games                 -> list_games
/// POST /games                 -> create_game
/// POST /games/{id}/result     -> update_result
/// POST /games/{id}/favorite   -> toggle_favorite
/// GET  /favorites             -> list_favorites
/// GET  /standings             -> standings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(game::list_games).post(game::create_game))
        .route("/games/{id}/result", post(game::update_result))
        .route("/games/{id}/favorite", post(game::toggle_favorite))
        .route("/favorites", get(game::list_favorites))
        .route("/standings", get(game::standings))
}
