//! Handlers for the shared matchday schedule.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use spielplan_core::error::CoreError;
use spielplan_core::tournament::{parse_kickoff, parse_matchday, parse_team_id, validate_pairing};
use spielplan_core::types::DbId;
use spielplan_db::models::schedule::CreateScheduleEntry;
use spielplan_db::models::user::User;
use spielplan_db::repositories::{ScheduleRepo, TeamRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{teams_exist, validation_message, UNKNOWN_TEAM};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views::schedule::schedule_page;

const ENTRY: &str = "Termin";

const ALREADY_SCHEDULED: &str = "Diese Begegnung ist an diesem Spieltag bereits angesetzt.";

/// Form body for `POST /schedule`.
#[derive(Debug, Deserialize)]
pub struct ScheduleForm {
    #[serde(default)]
    pub home_team_id: String,
    #[serde(default)]
    pub away_team_id: String,
    #[serde(default)]
    pub matchday: String,
    pub kickoff: Option<String>,
}

fn parse_fields(input: &ScheduleForm) -> Result<CreateScheduleEntry, CoreError> {
    let home_team_id = parse_team_id(&input.home_team_id)?;
    let away_team_id = parse_team_id(&input.away_team_id)?;
    validate_pairing(home_team_id, away_team_id)?;
    Ok(CreateScheduleEntry {
        home_team_id,
        away_team_id,
        matchday: parse_matchday(&input.matchday)?,
        kickoff: parse_kickoff(input.kickoff.as_deref())?,
    })
}

async fn render(
    state: &AppState,
    user: &User,
    error: Option<&str>,
    status: StatusCode,
) -> AppResult<Response> {
    let entries = ScheduleRepo::list(&state.pool).await?;
    let teams = TeamRepo::list(&state.pool).await?;
    Ok((status, Html(schedule_page(&user.username, &entries, &teams, error))).into_response())
}

/// GET /schedule
pub async fn list_schedule(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    render(&state, &user, None, StatusCode::OK).await
}

/// POST /schedule
pub async fn create_entry(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<ScheduleForm>,
) -> AppResult<Response> {
    let entry = match parse_fields(&input) {
        Ok(entry) => entry,
        Err(err) => {
            let msg = validation_message(err)?;
            return render(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };
    if !teams_exist(&state, &[entry.home_team_id, entry.away_team_id]).await? {
        return render(&state, &user, Some(UNKNOWN_TEAM), StatusCode::BAD_REQUEST).await;
    }

    let Some(entry_id) = ScheduleRepo::schedule(&state.pool, &entry).await? else {
        return render(&state, &user, Some(ALREADY_SCHEDULED), StatusCode::CONFLICT).await;
    };
    tracing::info!(
        user_id = user.id,
        entry_id,
        matchday = entry.matchday,
        home_team_id = entry.home_team_id,
        away_team_id = entry.away_team_id,
        "Fixture scheduled",
    );

    Ok(Redirect::to("/schedule").into_response())
}

/// POST /schedule/{id}/delete
pub async fn remove_entry(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(entry_id): Path<DbId>,
) -> AppResult<Redirect> {
    if !ScheduleRepo::remove(&state.pool, entry_id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTRY, id: entry_id }));
    }
    tracing::info!(user_id = user.id, entry_id, "Fixture unscheduled");
    Ok(Redirect::to("/schedule"))
}
