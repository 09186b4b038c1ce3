use axum::routing::{get, post};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// ```text
/// GET  /          -> index
/// POST /          -> create_todo
/// POST /complete  -> complete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::index).post(todo::create_todo))
        .route("/complete", post(todo::complete_todo))
}
