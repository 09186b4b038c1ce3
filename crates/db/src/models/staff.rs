//! Team staff: coaches, helpers, and their team memberships.

use serde::Serialize;
use sqlx::FromRow;
use spielplan_core::types::DbId;

/// A row from the `staff_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffMember {
    pub id: DbId,
    pub name: String,
    pub role: Option<String>,
}

/// DTO for creating a staff member.
#[derive(Debug, Clone)]
pub struct CreateStaffMember {
    pub name: String,
    pub role: Option<String>,
}

/// One staff member's membership in one team.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamStaffListing {
    pub team_id: DbId,
    pub team: String,
    pub staff_id: DbId,
    pub name: String,
    pub role: Option<String>,
}
