use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::config::WebhookConfig;
use crate::handlers::webhook;
use crate::state::AppState;

/// GitHub caps webhook payloads at 25 MB.
pub const MAX_WEBHOOK_BODY_BYTES: usize = 25 * 1024 * 1024;

/// `POST /update_server -> update_server`
///
/// Carries its own body limit and deadline; the router does not wrap it in
/// the page timeout.
pub fn router(config: &WebhookConfig) -> Router<AppState> {
    Router::new()
        .route("/update_server", post(webhook::update_server))
        .layer(DefaultBodyLimit::max(MAX_WEBHOOK_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
}
