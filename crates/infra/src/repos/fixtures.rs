use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::FixtureRow;

#[derive(Debug, Clone, Default)]
pub struct FixtureFilter {
    pub event_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateFixture {
    pub event_id: String,
    pub division_a: String,
    pub division_b: String,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub phase: Option<String>,
    pub notes: Option<String>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateFixture) -> SqlxResult<FixtureRow> {
    sqlx::query_as::<_, FixtureRow>(
        r#"
        INSERT INTO fixtures (event_id, division_a, division_b, scheduled_date, scheduled_time, venue, phase, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, event_id, division_a, division_b, scheduled_date, scheduled_time, venue, phase, status, notes, created_at, updated_at
        "#,
    )
    .bind(data.event_id)
    .bind(data.division_a)
    .bind(data.division_b)
    .bind(data.scheduled_date)
    .bind(data.scheduled_time)
    .bind(data.venue)
    .bind(data.phase)
    .bind(data.notes)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<FixtureRow>> {
    sqlx::query_as::<_, FixtureRow>(
        r#"
        SELECT id, event_id, division_a, division_b, scheduled_date, scheduled_time, venue, phase, status, notes, created_at, updated_at
        FROM fixtures
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>, filter: FixtureFilter) -> SqlxResult<Vec<FixtureRow>> {
    // Unscheduled fixtures sort last
    sqlx::query_as::<_, FixtureRow>(
        r#"
        SELECT id, event_id, division_a, division_b, scheduled_date, scheduled_time, venue, phase, status, notes, created_at, updated_at
        FROM fixtures
        WHERE ($1::text IS NULL OR event_id = $1)
          AND ($2::text IS NULL OR status = $2)
        ORDER BY scheduled_date ASC NULLS LAST, scheduled_time ASC NULLS LAST, created_at ASC
        "#,
    )
    .bind(filter.event_id)
    .bind(filter.status)
    .fetch_all(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: CreateFixture,
) -> SqlxResult<Option<FixtureRow>> {
    sqlx::query_as::<_, FixtureRow>(
        r#"
        UPDATE fixtures
        SET event_id = $2, division_a = $3, division_b = $4, scheduled_date = $5, scheduled_time = $6,
            venue = $7, phase = $8, notes = $9, updated_at = NOW()
        WHERE id = $1
        RETURNING id, event_id, division_a, division_b, scheduled_date, scheduled_time, venue, phase, status, notes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.event_id)
    .bind(data.division_a)
    .bind(data.division_b)
    .bind(data.scheduled_date)
    .bind(data.scheduled_time)
    .bind(data.venue)
    .bind(data.phase)
    .bind(data.notes)
    .fetch_optional(executor)
    .await
}

/// Mark a fixture as played once its result has been recorded.
pub async fn mark_completed<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query(
        "UPDATE fixtures SET status = 'completed', updated_at = NOW() WHERE id = $1",
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM fixtures WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
