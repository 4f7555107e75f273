use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use infra::repos::{fixtures, FixtureFilter};

use crate::auth::require_scorer;
use crate::gql::error::{GqlError, ResultExt};
use crate::services::fixture_service;
use crate::state::AppState;

use super::types::{Fixture, FixtureInput, FixtureStatus};

#[derive(Default)]
pub struct FixtureQuery;

#[Object]
impl FixtureQuery {
    /// Scheduled and played fixtures, soonest first
    async fn fixtures(
        &self,
        ctx: &Context<'_>,
        event_id: Option<ID>,
        status: Option<FixtureStatus>,
    ) -> Result<Vec<Fixture>> {
        let state = ctx.data::<AppState>()?;
        let filter = FixtureFilter {
            event_id: event_id.map(|id| id.to_string()),
            status: status.map(|s| s.as_str().to_string()),
        };

        let rows = fixtures::list(&state.db, filter)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Fixture::from).collect())
    }

    async fn fixture(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Fixture>> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid fixture ID")?;
        let row = fixtures::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Fixture::from))
    }
}

#[derive(Default)]
pub struct FixtureMutation;

#[Object]
impl FixtureMutation {
    async fn create_fixture(&self, ctx: &Context<'_>, input: FixtureInput) -> Result<Fixture> {
        require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;

        let row = fixture_service::create_fixture(&state.db, input.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    async fn update_fixture(&self, ctx: &Context<'_>, id: ID, input: FixtureInput) -> Result<Fixture> {
        require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid fixture ID")?;

        let row = fixture_service::update_fixture(&state.db, id, input.into())
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::new("Fixture not found"))?;
        Ok(row.into())
    }

    async fn delete_fixture(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid fixture ID")?;

        Ok(fixture_service::delete_fixture(&state.db, id)
            .await
            .map_err(GqlError::from)?)
    }
}
