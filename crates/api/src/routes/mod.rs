pub mod auth;
pub mod game;
pub mod health;
pub mod schedule;
pub mod staff;
pub mod team;
pub mod todo;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                      login form, login (public)
/// /register                   registration form, register (public)
/// /logout                     logout
///
/// /                           to-do list, create to-do
/// /complete                   complete to-do
///
/// /teams                      list, create
/// /games                      list, create
/// /games/{id}/result          update result
/// /games/{id}/favorite        toggle favorite
/// /favorites                  the caller's favorite games
/// /standings                  derived table, one per group
///
/// /schedule                   list, schedule a pairing
/// /schedule/{id}/delete       unschedule
/// /staff                      list, create
/// /staff/{id}/teams           add to a team
/// /staff/{id}/teams/{team_id}/remove
///                             remove from a team
/// ```
///
/// Everything except the public auth pages requires a session cookie. The
/// `/update_server` webhook is mounted separately by
/// [`build_app_router`](crate::router::build_app_router) with its own
/// timeout.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(todo::router())
        .merge(team::router())
        .merge(game::router())
        .merge(schedule::router())
        .merge(staff::router())
}
