//! Handlers for the shared team list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use spielplan_core::error::CoreError;
use spielplan_core::tournament::{normalize_group, normalize_trainer, validate_team_name};
use spielplan_db::models::team::CreateTeam;
use spielplan_db::models::user::User;
use spielplan_db::repositories::TeamRepo;

use crate::error::AppResult;
use crate::handlers::validation_message;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views::tournament::teams_page;

/// Form body for `POST /teams`.
#[derive(Debug, Deserialize)]
pub struct TeamForm {
    #[serde(default)]
    pub name: String,
    pub trainer: Option<String>,
    pub group: Option<String>,
}

fn parse_form(input: &TeamForm) -> Result<CreateTeam, CoreError> {
    Ok(CreateTeam {
        name: validate_team_name(&input.name)?,
        trainer: normalize_trainer(input.trainer.as_deref())?,
        group_name: normalize_group(input.group.as_deref())?,
    })
}

async fn render(
    state: &AppState,
    user: &User,
    error: Option<&str>,
    status: StatusCode,
) -> AppResult<Response> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok((status, Html(teams_page(&user.username, &teams, error))).into_response())
}

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    render(&state, &user, None, StatusCode::OK).await
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<TeamForm>,
) -> AppResult<Response> {
    let team = match parse_form(&input) {
        Ok(team) => team,
        Err(err) => {
            let msg = validation_message(err)?;
            return render(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };

    let created = TeamRepo::create(&state.pool, &team).await?;
    tracing::info!(user_id = user.id, team_id = created.id, name = %created.name, "Team created");

    Ok(Redirect::to("/teams").into_response())
}
