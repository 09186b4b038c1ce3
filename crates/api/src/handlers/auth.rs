//! Handlers for login, registration, and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use validator::Validate;

use crate::auth::service::SessionState;
use crate::auth::session::{clear_session_cookie, session_cookie};
use crate::error::AppResult;
use crate::middleware::auth::{CurrentUser, Session};
use crate::state::AppState;
use crate::views::auth::{
    login_page as render_login, register_page as render_register, FIELDS_REQUIRED, LOGIN_FAILED,
    USERNAME_TAKEN,
};

// ---------------------------------------------------------------------------
// Form types
// ---------------------------------------------------------------------------

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Form body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
///
/// Signed-in users are sent straight to their to-do list.
pub async fn login_page(Session(session): Session) -> Response {
    match session {
        SessionState::Authenticated(_) => Redirect::to("/").into_response(),
        SessionState::Anonymous => Html(render_login("", None)).into_response(),
    }
}

/// POST /login
///
/// On success sets the session cookie and redirects to `/`. Any failure
/// re-renders the form with the same generic message.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = state.auth.authenticate(&input.username, &input.password).await? else {
        return Ok(Html(render_login(&input.username, Some(LOGIN_FAILED))).into_response());
    };

    let token = state.auth.issue_session(&user)?;
    let cookie = session_cookie(&token, state.auth.session_config());

    Ok(([(SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(render_register("", None))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<RegisterForm>,
) -> AppResult<Response> {
    if input.validate().is_err() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Html(render_register(&input.username, Some(FIELDS_REQUIRED))),
        )
            .into_response());
    }

    if !state.auth.register(&input.username, &input.password).await? {
        return Ok(Html(render_register(&input.username, Some(USERNAME_TAKEN))).into_response());
    }

    Ok(Redirect::to("/login").into_response())
}

/// GET /logout
///
/// Clears the session cookie. The token itself stays valid until it
/// expires; the browser simply no longer holds it.
pub async fn logout(State(state): State<AppState>, CurrentUser(user): CurrentUser) -> Response {
    tracing::info!(user_id = user.id, username = %user.username, "User logged out");
    let cookie = clear_session_cookie(state.auth.session_config());
    ([(SET_COOKIE, cookie)], Redirect::to("/login")).into_response()
}
