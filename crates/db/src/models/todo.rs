//! To-do entries owned by a single user.

use serde::Serialize;
use sqlx::FromRow;
use spielplan_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub due: Timestamp,
}

/// DTO for creating a to-do. The owner is passed separately.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub content: String,
    pub due: Timestamp,
}
