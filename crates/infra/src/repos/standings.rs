use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::StandingRow;

#[derive(Debug, Clone)]
pub struct UpsertStanding {
    pub event_id: String,
    pub division: String,
    pub played: i32,
    pub won: i32,
    pub lost: i32,
    pub drawn: i32,
    pub match_points: f64,
    pub game_points: f64,
    pub position: i32,
}

pub async fn list_by_event<'e>(
    executor: impl PgExecutor<'e>,
    event_id: &str,
) -> SqlxResult<Vec<StandingRow>> {
    sqlx::query_as::<_, StandingRow>(
        r#"
        SELECT id, event_id, division, played, won, lost, drawn, match_points, game_points, position, updated_at
        FROM standings
        WHERE event_id = $1
        ORDER BY position ASC NULLS LAST, division ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(executor)
    .await
}

pub async fn upsert<'e>(executor: impl PgExecutor<'e>, data: UpsertStanding) -> SqlxResult<StandingRow> {
    sqlx::query_as::<_, StandingRow>(
        r#"
        INSERT INTO standings (event_id, division, played, won, lost, drawn, match_points, game_points, position)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (event_id, division) DO UPDATE
        SET played = EXCLUDED.played,
            won = EXCLUDED.won,
            lost = EXCLUDED.lost,
            drawn = EXCLUDED.drawn,
            match_points = EXCLUDED.match_points,
            game_points = EXCLUDED.game_points,
            position = EXCLUDED.position,
            updated_at = NOW()
        RETURNING id, event_id, division, played, won, lost, drawn, match_points, game_points, position, updated_at
        "#,
    )
    .bind(data.event_id)
    .bind(data.division)
    .bind(data.played)
    .bind(data.won)
    .bind(data.lost)
    .bind(data.drawn)
    .bind(data.match_points)
    .bind(data.game_points)
    .bind(data.position)
    .fetch_one(executor)
    .await
}

/// Remove cached rows for divisions that no longer appear in the event's matches.
pub async fn delete_except<'e>(
    executor: impl PgExecutor<'e>,
    event_id: &str,
    keep_divisions: &[String],
) -> SqlxResult<u64> {
    let result = sqlx::query(
        "DELETE FROM standings WHERE event_id = $1 AND NOT (division = ANY($2))",
    )
    .bind(event_id)
    .bind(keep_divisions)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
