use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::EventRow;

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    category: Option<&str>,
) -> SqlxResult<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, name, category, icon, status, created_at
        FROM events
        WHERE ($1::text IS NULL OR category = $1)
        ORDER BY category ASC, name ASC
        "#,
    )
    .bind(category)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
) -> SqlxResult<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, name, category, icon, status, created_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// `status` must pass the table's CHECK constraint.
pub async fn update_status<'e>(
    executor: impl PgExecutor<'e>,
    id: &str,
    status: &str,
) -> SqlxResult<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(
        r#"
        UPDATE events
        SET status = $2
        WHERE id = $1
        RETURNING id, name, category, icon, status, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(executor)
    .await
}
