//! Repository for the `staff_members` and `team_staff` tables.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::staff::{CreateStaffMember, StaffMember, TeamStaffListing};

const COLUMNS: &str = "id, name, role";

/// Provides staff records and their team memberships.
pub struct StaffRepo;

impl StaffRepo {
    /// List all staff members alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<StaffMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_members ORDER BY name, id");
        sqlx::query_as::<_, StaffMember>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StaffMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_members WHERE id = $1");
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new staff member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStaffMember,
    ) -> Result<StaffMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_members (name, role)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Add `staff_id` to `team_id`. Returns `false` if already a member.
    pub async fn assign(
        pool: &PgPool,
        staff_id: DbId,
        team_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO team_staff (team_id, staff_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(team_id)
        .bind(staff_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `staff_id` from `team_id`. Returns `true` if they were a member.
    pub async fn unassign(
        pool: &PgPool,
        staff_id: DbId,
        team_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_staff WHERE team_id = $1 AND staff_id = $2")
            .bind(team_id)
            .bind(staff_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every membership, grouped by team name, then staff name.
    pub async fn list_assignments(pool: &PgPool) -> Result<Vec<TeamStaffListing>, sqlx::Error> {
        sqlx::query_as::<_, TeamStaffListing>(
            "SELECT t.id AS team_id, t.name AS team,
                    m.id AS staff_id, m.name, m.role
             FROM team_staff ts
             JOIN teams t ON t.id = ts.team_id
             JOIN staff_members m ON m.id = ts.staff_id
             ORDER BY t.name, t.id, m.name, m.id",
        )
        .fetch_all(pool)
        .await
    }
}
