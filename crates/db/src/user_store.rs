//! Storage seam behind the credential store.
//!
//! The authentication service only needs three operations on users, so it
//! talks to a [`UserStore`] instead of a pool. [`PgUserStore`] is the
//! production implementation; [`InMemoryUserStore`] backs tests and local
//! experiments without a database.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use spielplan_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::repositories::user_repo::{is_duplicate_username, UserRepo};
use crate::DbPool;

/// User persistence as seen by the credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    /// Insert a user. Returns `Ok(None)` if the username is already taken.
    async fn insert(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error>;
}

/// [`UserStore`] backed by the `users` table.
#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_username(&self.pool, username).await
    }

    async fn insert(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        match UserRepo::create(&self.pool, input).await {
            Ok(user) => Ok(Some(user)),
            Err(err) if is_duplicate_username(&err) => {
                tracing::debug!(username = %input.username, "Username taken at insert time");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// [`UserStore`] holding users in process memory.
///
/// Enforces the same unique-username rule as the database, and like a
/// sequence never hands out an id twice.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    last_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a user, as an administrator deleting the account would.
    ///
    /// Returns `true` if the user existed.
    pub async fn remove(&self, id: DbId) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|user| user.id != id);
        users.len() != before
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn insert(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.username == input.username) {
            return Ok(None);
        }

        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(Some(user))
    }
}
