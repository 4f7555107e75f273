use async_graphql::{Context, Object, Result};

use crate::auth::current_session;

use super::types::ScorerSession;

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// The signed-in scorer, or null for anonymous viewers
    async fn session(&self, ctx: &Context<'_>) -> Result<Option<ScorerSession>> {
        Ok(current_session(ctx).await?.map(ScorerSession::from))
    }
}
