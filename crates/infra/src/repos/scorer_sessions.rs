use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ScorerSessionRow;

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
    expires_at: DateTime<Utc>,
) -> SqlxResult<ScorerSessionRow> {
    sqlx::query_as::<_, ScorerSessionRow>(
        r#"
        INSERT INTO scorer_sessions (email, expires_at)
        VALUES ($1, $2)
        RETURNING id, email, created_at, expires_at, revoked_at
        "#,
    )
    .bind(email)
    .bind(expires_at)
    .fetch_one(executor)
    .await
}

/// Only sessions that are neither revoked nor expired.
pub async fn get_active<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ScorerSessionRow>> {
    sqlx::query_as::<_, ScorerSessionRow>(
        r#"
        SELECT id, email, created_at, expires_at, revoked_at
        FROM scorer_sessions
        WHERE id = $1 AND revoked_at IS NULL AND expires_at > NOW()
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn revoke<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query(
        "UPDATE scorer_sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL",
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
