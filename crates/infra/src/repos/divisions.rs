use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::DivisionRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<DivisionRow>> {
    sqlx::query_as::<_, DivisionRow>(
        r#"
        SELECT code, name, color, sort_order, created_at
        FROM divisions
        ORDER BY sort_order ASC, code ASC
        "#,
    )
    .fetch_all(executor)
    .await
}
