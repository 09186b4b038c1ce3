use axum::routing::{get, post};
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// ```text
/// GET  /staff                              -> list_staff
/// POST /staff                              -> create_staff
/// POST /staff/{id}/teams                   -> assign_team
/// POST /staff/{id}/teams/{team_id}/remove  -> unassign_team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route("/staff/{id}/teams", post(staff::assign_team))
        .route("/staff/{id}/teams/{team_id}/remove", post(staff::unassign_team))
}
