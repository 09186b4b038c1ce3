pub mod auth;
pub mod game;
pub mod schedule;
pub mod staff;
pub mod team;
pub mod todo;
pub mod webhook;

use spielplan_core::error::CoreError;
use spielplan_core::types::DbId;
use spielplan_db::repositories::TeamRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Form error shown when a selected team was deleted or never existed.
pub(crate) const UNKNOWN_TEAM: &str = "Das gewählte Team existiert nicht.";

/// Split a form-validation failure from other errors.
///
/// Validation messages are shown on the re-rendered form; anything else
/// propagates as an [`AppError`](crate::error::AppError).
pub(crate) fn validation_message(err: CoreError) -> AppResult<String> {
    match err {
        CoreError::Validation(msg) => Ok(msg),
        other => Err(other.into()),
    }
}

/// Check that every team a form selected exists.
pub(crate) async fn teams_exist(state: &AppState, team_ids: &[DbId]) -> AppResult<bool> {
    for &team_id in team_ids {
        if TeamRepo::find_by_id(&state.pool, team_id).await?.is_none() {
            return Ok(false);
        }
    }
    Ok(true)
}
