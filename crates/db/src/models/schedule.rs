//! Planned fixtures and the matchday schedule.

use serde::Serialize;
use sqlx::FromRow;
use spielplan_core::types::{DbId, Timestamp};

/// A schedule entry joined with its pairing's team names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleListing {
    pub id: DbId,
    pub fixture_id: DbId,
    pub matchday: i32,
    pub kickoff: Option<Timestamp>,
    pub home_team_id: DbId,
    pub home_team: String,
    pub away_team_id: DbId,
    pub away_team: String,
}

/// DTO for putting a pairing on the schedule.
#[derive(Debug, Clone)]
pub struct CreateScheduleEntry {
    pub home_team_id: DbId,
    pub away_team_id: DbId,
    pub matchday: i32,
    pub kickoff: Option<Timestamp>,
}
