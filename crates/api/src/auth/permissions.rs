use async_graphql::{Context, Error, Result};
use uuid::Uuid;

use infra::models::ScorerSessionRow;
use infra::repos::scorer_sessions;

use crate::auth::Claims;
use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;

/// The active scorer session behind the request, or `None` for anonymous viewers.
pub async fn current_session(ctx: &Context<'_>) -> Result<Option<ScorerSessionRow>> {
    let Ok(claims) = ctx.data::<Claims>() else {
        return Ok(None);
    };

    let session_id = Uuid::parse_str(&claims.sid).gql_err("Invalid session")?;
    let state = ctx.data::<AppState>()?;

    let session = scorer_sessions::get_active(&state.db, session_id)
        .await
        .map_err(GqlError::from)?;

    Ok(session)
}

/// Reject the request unless a scorer is signed in with a live session.
pub async fn require_scorer(ctx: &Context<'_>) -> Result<ScorerSessionRow> {
    if ctx.data::<Claims>().is_err() {
        return Err(Error::new("You must be logged in as a scorer to perform this action"));
    }

    current_session(ctx)
        .await?
        .ok_or_else(|| Error::new("Your scorer session has expired or was signed out"))
}
