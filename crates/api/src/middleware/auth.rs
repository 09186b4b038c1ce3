//! Session-cookie extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use spielplan_db::models::user::User;

use crate::auth::service::SessionState;
use crate::auth::session::session_token;
use crate::state::AppState;

/// The signed-in user, resolved from the `session` cookie.
///
/// Any handler taking this extractor is closed to anonymous requests: they
/// are redirected to `/login` before the handler body runs, so nothing is
/// read or written on their behalf.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> AppResult<Html<String>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Html(String::new()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Rejection for [`CurrentUser`]: a `303 See Other` to the login form.
#[derive(Debug)]
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match Session::from_request_parts(parts, state).await {
            Ok(Session(SessionState::Authenticated(user))) => Ok(CurrentUser(user)),
            _ => {
                tracing::debug!(path = %parts.uri.path(), "Anonymous request redirected to login");
                Err(LoginRedirect)
            }
        }
    }
}

/// The request's session state, Anonymous or Authenticated. Never rejects.
#[derive(Debug, Clone)]
pub struct Session(pub SessionState);

impl FromRequestParts<AppState> for Session {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        Ok(Session(state.auth.resolve_session(token).await))
    }
}
