//! Handlers for the per-user to-do list on `/`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use spielplan_core::error::CoreError;
use spielplan_core::todos::{parse_due, validate_content};
use spielplan_core::types::DbId;
use spielplan_db::models::todo::CreateTodo;
use spielplan_db::models::user::User;
use spielplan_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::handlers::validation_message;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views::todos::todo_page;

/// Form body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub due_at: String,
}

/// Form body for `POST /complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteForm {
    pub id: DbId,
}

fn parse_form(input: &TodoForm) -> Result<CreateTodo, CoreError> {
    Ok(CreateTodo {
        content: validate_content(&input.contents)?,
        due: parse_due(&input.due_at)?,
    })
}

async fn render(
    state: &AppState,
    user: &User,
    error: Option<&str>,
    status: StatusCode,
) -> AppResult<Response> {
    let todos = TodoRepo::list_for_user(&state.pool, user.id).await?;
    Ok((status, Html(todo_page(&user.username, &todos, error))).into_response())
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    render(&state, &user, None, StatusCode::OK).await
}

/// POST /
pub async fn create_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<TodoForm>,
) -> AppResult<Response> {
    let todo = match parse_form(&input) {
        Ok(todo) => todo,
        Err(err) => {
            let msg = validation_message(err)?;
            return render(&state, &user, Some(&msg), StatusCode::BAD_REQUEST).await;
        }
    };

    let created = TodoRepo::create(&state.pool, user.id, &todo).await?;
    tracing::info!(user_id = user.id, todo_id = created.id, "To-do created");

    Ok(Redirect::to("/").into_response())
}

/// POST /complete
///
/// Deletes the to-do if it belongs to the caller; ids owned by someone else
/// are ignored.
pub async fn complete_todo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(input): Form<CompleteForm>,
) -> AppResult<Redirect> {
    if TodoRepo::complete(&state.pool, user.id, input.id).await? {
        tracing::info!(user_id = user.id, todo_id = input.id, "To-do completed");
    } else {
        tracing::warn!(user_id = user.id, todo_id = input.id, "No such to-do for user");
    }
    Ok(Redirect::to("/"))
}
