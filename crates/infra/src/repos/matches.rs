use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::MatchRow;

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub event_id: Option<String>,
    pub event_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CreateMatch {
    pub event_id: String,
    pub fixture_id: Option<Uuid>,
    pub division_a: String,
    pub division_b: String,
    pub winner: Option<String>,
    pub result: Option<String>,
    pub match_points_a: f64,
    pub match_points_b: f64,
    pub game_points_a: f64,
    pub game_points_b: f64,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub match_data: Option<serde_json::Value>,
    pub recorded_by: Option<String>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateMatch) -> SqlxResult<MatchRow> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        INSERT INTO matches (
            event_id, fixture_id, division_a, division_b, winner, result,
            match_points_a, match_points_b, game_points_a, game_points_b,
            phase, match_date, match_time, match_data, recorded_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING id, event_id, fixture_id, division_a, division_b, winner, result,
                  match_points_a, match_points_b, game_points_a, game_points_b,
                  phase, match_date, match_time, match_data, recorded_by, created_at
        "#,
    )
    .bind(data.event_id)
    .bind(data.fixture_id)
    .bind(data.division_a)
    .bind(data.division_b)
    .bind(data.winner)
    .bind(data.result)
    .bind(data.match_points_a)
    .bind(data.match_points_b)
    .bind(data.game_points_a)
    .bind(data.game_points_b)
    .bind(data.phase)
    .bind(data.match_date)
    .bind(data.match_time)
    .bind(data.match_data)
    .bind(data.recorded_by)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, event_id, fixture_id, division_a, division_b, winner, result,
               match_points_a, match_points_b, game_points_a, game_points_b,
               phase, match_date, match_time, match_data, recorded_by, created_at
        FROM matches
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>, filter: MatchFilter) -> SqlxResult<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        r#"
        SELECT id, event_id, fixture_id, division_a, division_b, winner, result,
               match_points_a, match_points_b, game_points_a, game_points_b,
               phase, match_date, match_time, match_data, recorded_by, created_at
        FROM matches
        WHERE ($1::text IS NULL OR event_id = $1)
          AND ($2::text[] IS NULL OR event_id = ANY($2))
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(filter.event_id)
    .bind(filter.event_ids)
    .fetch_all(executor)
    .await
}

/// Tie game rows go with it (ON DELETE CASCADE).
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
