//! Repository for the `fixtures` and `schedule_entries` tables.

use sqlx::PgPool;
use spielplan_core::types::DbId;

use crate::models::schedule::{CreateScheduleEntry, ScheduleListing};

/// Provides the shared matchday schedule.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// The whole schedule by matchday, then kickoff (unset last).
    pub async fn list(pool: &PgPool) -> Result<Vec<ScheduleListing>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleListing>(
            "SELECT s.id, s.fixture_id, s.matchday, s.kickoff,
                    fx.home_team_id, h.name AS home_team,
                    fx.away_team_id, a.name AS away_team
             FROM schedule_entries s
             JOIN fixtures fx ON fx.id = s.fixture_id
             JOIN teams h ON h.id = fx.home_team_id
             JOIN teams a ON a.id = fx.away_team_id
             ORDER BY s.matchday, s.kickoff NULLS LAST, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Schedule a pairing, reusing its fixture if it was planned before.
    ///
    /// Returns the new entry's ID, or `None` if the pairing is already on
    /// that matchday.
    pub async fn schedule(
        pool: &PgPool,
        input: &CreateScheduleEntry,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // The no-op update makes RETURNING yield the existing row's id.
        let (fixture_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO fixtures (home_team_id, away_team_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_fixtures_pairing
             DO UPDATE SET home_team_id = EXCLUDED.home_team_id
             RETURNING id",
        )
        .bind(input.home_team_id)
        .bind(input.away_team_id)
        .fetch_one(&mut *tx)
        .await?;

        let entry: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO schedule_entries (fixture_id, matchday, kickoff)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_schedule_entries_fixture_matchday DO NOTHING
             RETURNING id",
        )
        .bind(fixture_id)
        .bind(input.matchday)
        .bind(input.kickoff)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(entry.map(|(id,)| id))
    }

    /// Take an entry off the schedule. Returns `true` if it existed.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
