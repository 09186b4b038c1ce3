//! Handlers for team staff and their memberships.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use spielplan_core::error::CoreError;
use spielplan_core::tournament::{normalize_role, parse_team_id, validate_staff_name};
use spielplan_core::types::DbId;
use spielplan_db::models::staff::CreateStaffMember;
use spielplan_db::models::user::User;
use spielplan_db::repositories::{StaffRepo, TeamRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{teams_exist, validation_message, UNKNOWN_TEAM};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views::staff::staff_page;

const STAFF_MEMBER: &str = "Person";
const MEMBERSHIP: &str = "Teamzugehörigkeit";

/// Form body for `POST /staff`.
#[derive(Debug, Deserialize)]
pub struct StaffForm {
    #[serde(default)]
    pub name: String,
    pub role: Option<String>,
}

/// Form body for `POST /staff/{id}/teams`.
#[derive(Debug, Deserialize)]
pub struct AssignForm {
    #[serde(default)]
    pub team_id: String,
}

fn parse_form(input: &StaffForm) -> Result<CreateStaffMember, CoreError> {
    Ok(CreateStaffMember {
        name: validate_staff_name(&input.name)?,
        role: normalize_role(input.role.as_deref())?,
    })
}

async fn render(
    state: &AppState,
    user: &User,
    error: Option<&str>,
    status: StatusCode,
) -> AppResult<Response> {
    let staff = StaffRepo::list(&state.pool).await?;
    let teams = TeamRepo::list(&state.pool).await?;
    let memberships = StaffRepo::list_assignments(&state.pool).await?;
    let page = staff_page(&user.username, &staff, &teams, &memberships, error);
    Ok((status, Html(page)).into_response())
}

/// GET /staff
pub async fn list_staff(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    render(&state, &user, None, StatusCode::OK).await
}

/// POST /staff
pub async fn create_staff(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<StaffForm>,
) -> AppResult<Response> {
    let member = match parse_form(&input) {
        Ok(member) => member,
        Err(err) => {
            let msg = validation_message(err)?;
            return render(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };

    let created = StaffRepo::create(&state.pool, &member).await?;
    tracing::info!(user_id = user.id, staff_id = created.id, name = %created.name, "Staff member created");

    Ok(Redirect::to("/staff").into_response())
}

/// POST /staff/{id}/teams
///
/// Adding an existing membership again is a no-op.
pub async fn assign_team(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(staff_id): Path<DbId>,
    Form(input): Form<AssignForm>,
) -> AppResult<Response> {
    let team_id = match parse_team_id(&input.team_id) {
        Ok(team_id) => team_id,
        Err(err) => {
            let msg = validation_message(err)?;
            return render(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };
    if StaffRepo::find_by_id(&state.pool, staff_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: STAFF_MEMBER, id: staff_id }));
    }
    if !teams_exist(&state, &[team_id]).await? {
        return render(&state, &user, Some(UNKNOWN_TEAM), StatusCode::BAD_REQUEST).await;
    }

    if StaffRepo::assign(&state.pool, staff_id, team_id).await? {
        tracing::info!(user_id = user.id, staff_id, team_id, "Staff member joined team");
    }
    Ok(Redirect::to("/staff").into_response())
}

/// POST /staff/{id}/teams/{team_id}/remove
pub async fn unassign_team(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((staff_id, team_id)): Path<(DbId, DbId)>,
) -> AppResult<Redirect> {
    if !StaffRepo::unassign(&state.pool, staff_id, team_id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: MEMBERSHIP, id: team_id }));
    }
    tracing::info!(user_id = user.id, staff_id, team_id, "Staff member left team");
    Ok(Redirect::to("/staff"))
}
