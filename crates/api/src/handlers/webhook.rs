//! Handler for the push webhook that redeploys the running checkout.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use spielplan_core::webhook::{verify_signature, SIGNATURE_HEADER};

use crate::state::AppState;

pub const UPDATED: &str = "Updated successfully";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const UPDATE_FAILED: &str = "Update failed";

/// POST /update_server
///
/// Verifies `X-Hub-Signature` over the raw body with the configured secret,
/// then pulls the latest source. The pull never starts for a request that
/// failed verification.
pub async fn update_server(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    let secret = state.config.webhook.secret_key();

    let algorithm = match verify_signature(header, &body, secret) {
        Ok(algorithm) => algorithm,
        Err(err) => {
            tracing::warn!(error = %err, body_len = body.len(), "Webhook rejected");
            return (StatusCode::UNAUTHORIZED, UNAUTHORIZED);
        }
    };
    tracing::info!(algorithm = algorithm.name(), "Webhook signature verified");

    match state.source_puller.pull().await {
        Ok(_) => (StatusCode::OK, UPDATED),
        Err(err) => {
            tracing::error!(error = %err, "Deployment pull failed");
            (StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED)
        }
    }
}
