use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::config::ServerConfig;
use crate::deploy::SourcePuller;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: spielplan_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Credential store and session resolver.
    pub auth: AuthService,
    /// Runs the deployment pull after a verified push webhook.
    pub source_puller: Arc<dyn SourcePuller>,
}
