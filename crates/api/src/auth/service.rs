//! The credential store and session resolver.
//!
//! [`AuthService`] is built once at startup and shared through
//! [`AppState`](crate::state::AppState); handlers never reach for a global.

use std::sync::Arc;

use spielplan_core::types::DbId;
use spielplan_db::models::user::{CreateUser, User};
use spielplan_db::user_store::UserStore;

use crate::auth::password::{hash_password, verify_dummy, verify_password};
use crate::auth::session::{generate_session_token, validate_session_token, SessionConfig};
use crate::error::{AppError, AppResult};

/// Outcome of resolving a request's session token.
#[derive(Debug, Clone)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }
}

/// Registration, login, and session resolution over a [`UserStore`].
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    session: SessionConfig,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, session: SessionConfig) -> Self {
        Self { store, session }
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session
    }

    /// Create an account.
    ///
    /// Returns `Ok(false)` if the username is already taken; the existing
    /// account is left untouched.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<bool> {
        if self.store.find_by_username(username).await?.is_some() {
            tracing::info!(%username, "Registration refused, username taken");
            return Ok(false);
        }

        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.to_string(),
            password_hash,
        };
        match self.store.insert(&input).await? {
            Some(user) => {
                tracing::info!(user_id = user.id, %username, "User registered");
                Ok(true)
            }
            None => {
                tracing::info!(%username, "Registration refused, username taken");
                Ok(false)
            }
        }
    }

    /// Check a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`, and both
    /// cost one Argon2 verification.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.store.find_by_username(username).await? else {
            verify_dummy(password);
            tracing::info!(%username, "Login failed");
            return Ok(None);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => {
                tracing::info!(user_id = user.id, %username, "Login succeeded");
                Ok(Some(user))
            }
            Ok(false) => {
                tracing::info!(%username, "Login failed");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(user_id = user.id, error = %e, "Stored password hash is unreadable");
                Ok(None)
            }
        }
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<User>> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.store.find_by_username(username).await?)
    }

    /// Sign a session token for a freshly authenticated user.
    pub fn issue_session(&self, user: &User) -> AppResult<String> {
        generate_session_token(user.id, &self.session)
            .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))
    }

    /// Resolve a session token to the acting user.
    ///
    /// Fails closed: a missing, forged, or expired token, a token for a
    /// deleted user, and a storage error all resolve to
    /// [`SessionState::Anonymous`].
    pub async fn resolve_session(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Anonymous;
        };

        let claims = match validate_session_token(token, &self.session) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                return SessionState::Anonymous;
            }
        };

        match self.store.find_by_id(claims.sub).await {
            Ok(Some(user)) => SessionState::Authenticated(user),
            Ok(None) => {
                tracing::warn!(user_id = claims.sub, "Session refers to a missing user");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::error!(user_id = claims.sub, error = %e, "Session user lookup failed");
                SessionState::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use spielplan_db::user_store::InMemoryUserStore;

    use super::*;

    fn test_session_config() -> SessionConfig {
        SessionConfig {
            secret: "service-test-secret".to_string(),
            expiry_hours: 1,
            secure_cookie: false,
        }
    }

    fn service() -> (AuthService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        let service = AuthService::new(store.clone(), test_session_config());
        (service, store)
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let (auth, _store) = service();
        assert!(auth.register("alice", "p@ss1").await.expect("register"));

        let user = auth
            .authenticate("alice", "p@ss1")
            .await
            .expect("authenticate")
            .expect("credentials are valid");
        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "p@ss1", "plaintext must never be stored");
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_first_hash() {
        let (auth, _store) = service();
        assert!(auth.register("alice", "p@ss1").await.expect("register"));
        let before = auth
            .get_by_username("alice")
            .await
            .expect("lookup")
            .expect("alice exists");

        assert!(!auth.register("alice", "anything").await.expect("register"));

        let after = auth
            .get_by_username("alice")
            .await
            .expect("lookup")
            .expect("alice exists");
        assert_eq!(before.password_hash, after.password_hash);
        assert!(auth.authenticate("alice", "anything").await.expect("authenticate").is_none());
    }

    #[tokio::test]
    async fn test_same_password_gets_different_hashes() {
        let (auth, _store) = service();
        auth.register("alice", "shared").await.expect("register");
        auth.register("bob", "shared").await.expect("register");

        let alice = auth.get_by_username("alice").await.expect("lookup").expect("exists");
        let bob = auth.get_by_username("bob").await.expect("lookup").expect("exists");
        assert_ne!(alice.password_hash, bob.password_hash);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let (auth, _store) = service();
        auth.register("alice", "p@ss1").await.expect("register");

        assert!(auth.authenticate("alice", "wrong").await.expect("authenticate").is_none());
        assert!(auth.authenticate("mallory", "p@ss1").await.expect("authenticate").is_none());
    }

    #[tokio::test]
    async fn test_lookups_return_none_when_absent() {
        let (auth, _store) = service();
        assert!(auth.get_by_id(99).await.expect("lookup").is_none());
        assert!(auth.get_by_username("ghost").await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn test_issued_session_resolves_to_user() {
        let (auth, _store) = service();
        auth.register("alice", "p@ss1").await.expect("register");
        let user = auth
            .authenticate("alice", "p@ss1")
            .await
            .expect("authenticate")
            .expect("valid");

        let token = auth.issue_session(&user).expect("token");
        let state = auth.resolve_session(Some(&token)).await;
        assert_matches!(state, SessionState::Authenticated(u) if u.id == user.id);
    }

    #[tokio::test]
    async fn test_missing_or_forged_token_is_anonymous() {
        let (auth, _store) = service();
        assert_matches!(auth.resolve_session(None).await, SessionState::Anonymous);
        assert_matches!(
            auth.resolve_session(Some("not.a.token")).await,
            SessionState::Anonymous
        );
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_anonymous() {
        let (auth, _store) = service();
        auth.register("alice", "p@ss1").await.expect("register");
        let user = auth.get_by_username("alice").await.expect("lookup").expect("exists");

        let foreign = SessionConfig {
            secret: "someone-else".to_string(),
            ..test_session_config()
        };
        let token = generate_session_token(user.id, &foreign).expect("token");
        assert_matches!(
            auth.resolve_session(Some(&token)).await,
            SessionState::Anonymous
        );
    }

    #[tokio::test]
    async fn test_session_of_deleted_user_fails_closed() {
        let (auth, store) = service();
        auth.register("alice", "p@ss1").await.expect("register");
        let user = auth.get_by_username("alice").await.expect("lookup").expect("exists");
        let token = auth.issue_session(&user).expect("token");

        assert!(store.remove(user.id).await);
        let state = auth.resolve_session(Some(&token)).await;
        assert!(state.user().is_none());
    }
}
