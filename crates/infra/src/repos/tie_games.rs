use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TieGameRow;

#[derive(Debug, Clone)]
pub struct CreateTieGame {
    pub match_id: Uuid,
    pub tie_id: String,
    pub match_number: i32,
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    pub winner: String,
    pub score: Option<String>,
}

/// A tie summary in `matches` that has no game rows in `tt_tie_matches`.
#[derive(Debug, Clone, FromRow)]
pub struct OrphanedTieSummary {
    pub match_id: Uuid,
    pub event_id: String,
    pub tie_id: String,
    pub division_a: String,
    pub division_b: String,
    pub created_at: DateTime<Utc>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateTieGame) -> SqlxResult<TieGameRow> {
    sqlx::query_as::<_, TieGameRow>(
        r#"
        INSERT INTO tt_tie_matches (match_id, tie_id, match_number, match_type, team_a_players, team_b_players, winner, score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, match_id, tie_id, match_number, match_type, team_a_players, team_b_players, winner, score, created_at
        "#,
    )
    .bind(data.match_id)
    .bind(data.tie_id)
    .bind(data.match_number)
    .bind(data.match_type)
    .bind(data.team_a_players)
    .bind(data.team_b_players)
    .bind(data.winner)
    .bind(data.score)
    .fetch_one(executor)
    .await
}

pub async fn list_by_match<'e>(executor: impl PgExecutor<'e>, match_id: Uuid) -> SqlxResult<Vec<TieGameRow>> {
    sqlx::query_as::<_, TieGameRow>(
        r#"
        SELECT id, match_id, tie_id, match_number, match_type, team_a_players, team_b_players, winner, score, created_at
        FROM tt_tie_matches
        WHERE match_id = $1
        ORDER BY match_number ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(executor)
    .await
}

pub async fn list_orphaned_tie_summaries<'e>(
    executor: impl PgExecutor<'e>,
) -> SqlxResult<Vec<OrphanedTieSummary>> {
    sqlx::query_as::<_, OrphanedTieSummary>(
        r#"
        SELECT m.id AS match_id, m.event_id, m.match_data->>'tie_id' AS tie_id,
               m.division_a, m.division_b, m.created_at
        FROM matches m
        WHERE m.match_data ? 'tie_id'
          AND NOT EXISTS (SELECT 1 FROM tt_tie_matches t WHERE t.match_id = m.id)
        ORDER BY m.created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await
}
