//! Teams taking part in the tournament.

use serde::Serialize;
use sqlx::FromRow;
use spielplan_core::standings::TeamEntry;
use spielplan_core::types::DbId;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub trainer: Option<String>,
    /// Standings group, e.g. "A". `None` for teams outside any group.
    pub group_name: Option<String>,
}

/// DTO for creating a team.
#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub name: String,
    pub trainer: Option<String>,
    pub group_name: Option<String>,
}

impl From<&Team> for TeamEntry {
    fn from(team: &Team) -> Self {
        TeamEntry {
            id: team.id,
            name: team.name.clone(),
            group: team.group_name.clone(),
        }
    }
}
