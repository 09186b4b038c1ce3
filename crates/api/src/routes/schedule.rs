use axum::routing::{get, post};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// ```text
/// GET  /schedule              -> list_schedule
/// POST /schedule              -> create_entry
/// POST /schedule/{id}/delete  -> remove_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(schedule::list_schedule).post(schedule::create_entry))
        .route("/schedule/{id}/delete", post(schedule::remove_entry))
}
