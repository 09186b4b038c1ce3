use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/teams", get(team::list_teams).post(team::create_team))
}
