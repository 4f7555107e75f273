use async_graphql::{Context, Object, Result, ID};

use infra::repos::{divisions, events};

use crate::auth::require_scorer;
use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::{Division, Event, EventCategory, EventStatus};

#[derive(Default)]
pub struct CatalogQuery;

#[Object]
impl CatalogQuery {
    /// Competing divisions in display order
    async fn divisions(&self, ctx: &Context<'_>) -> Result<Vec<Division>> {
        let state = ctx.data::<AppState>()?;
        let rows = divisions::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Division::from).collect())
    }

    async fn events(&self, ctx: &Context<'_>, category: Option<EventCategory>) -> Result<Vec<Event>> {
        let state = ctx.data::<AppState>()?;
        let category = category.map(|c| crate::standings::EventCategory::from(c).as_str());
        let rows = events::list(&state.db, category).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Event>> {
        let state = ctx.data::<AppState>()?;
        let row = events::get_by_id(&state.db, id.as_str()).await.map_err(GqlError::from)?;
        Ok(row.map(Event::from))
    }
}

#[derive(Default)]
pub struct CatalogMutation;

#[Object]
impl CatalogMutation {
    /// Change an event's status. Only completed events award medals.
    async fn set_event_status(&self, ctx: &Context<'_>, event_id: ID, status: EventStatus) -> Result<Event> {
        let session = require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;

        let row = events::update_status(&state.db, event_id.as_str(), status.as_str())
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::new(format!("unknown event: {}", event_id.as_str())))?;

        tracing::info!("{} marked {} as {}", session.email, row.id, row.status);
        Ok(row.into())
    }
}
