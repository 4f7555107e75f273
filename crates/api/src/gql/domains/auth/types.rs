use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use infra::models::ScorerSessionRow;

#[derive(SimpleObject, Clone)]
pub struct ScorerSession {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<ScorerSessionRow> for ScorerSession {
    fn from(row: ScorerSessionRow) -> Self {
        Self {
            email: row.email,
            signed_in_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}
