use async_graphql::{Context, Object, Result, ID};

use crate::auth::require_scorer;
use crate::gql::error::GqlError;
use crate::services::standings_service;
use crate::state::AppState;

use super::types::{CachedStanding, EventStandingRow, EventStandings, Standing, StandingsDrift, TableColumn, TableLayout};

fn layout_for(state: &AppState, event_id: &str) -> TableLayout {
    let layouts = state.layouts();
    TableLayout {
        layout: layouts.layout_key(event_id).to_string(),
        columns: layouts.for_event(event_id).iter().map(TableColumn::from).collect(),
    }
}

#[derive(Default)]
pub struct StandingsQuery;

#[Object]
impl StandingsQuery {
    /// League standings from raw match results.
    /// `scope` is `all`, `sports`, `cultural` or a single event id.
    async fn standings(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = "all")] scope: String,
    ) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let ranked = standings_service::league_standings(&state.db, &scope)
            .await
            .map_err(GqlError::from)?;
        Ok(ranked.into_iter().map(|r| Standing::from_ranked(r, None)).collect())
    }

    /// Gold/silver/bronze tally over completed events
    async fn medal_table(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = "all")] scope: String,
    ) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let ranked = standings_service::medal_standings(&state.db, &scope, &state.scoring().medal_weights)
            .await
            .map_err(GqlError::from)?;
        Ok(ranked.into_iter().map(|r| Standing::from_ranked(r, None)).collect())
    }

    /// Column layout used to display an event's table
    async fn table_layout(&self, ctx: &Context<'_>, event_id: ID) -> Result<TableLayout> {
        let state = ctx.data::<AppState>()?;
        Ok(layout_for(state, event_id.as_str()))
    }

    async fn event_standings(&self, ctx: &Context<'_>, event_id: ID) -> Result<Option<EventStandings>> {
        let state = ctx.data::<AppState>()?;
        let Some(table) = standings_service::event_standings(&state.db, event_id.as_str())
            .await
            .map_err(GqlError::from)?
        else {
            return Ok(None);
        };

        let columns = state.layouts().for_event(&table.event.id);
        let rows = table
            .standings
            .into_iter()
            .map(|ranked| {
                let cells = columns
                    .iter()
                    .map(|column| column.value(&ranked.standing).unwrap_or_default())
                    .collect();
                EventStandingRow {
                    standing: Standing::from_ranked(ranked, Some(&table.divisions)),
                    cells,
                }
            })
            .collect();

        Ok(Some(EventStandings {
            layout: layout_for(state, &table.event.id),
            event: table.event.into(),
            rows,
        }))
    }

    /// Divisions whose cached standings disagree with their raw matches
    async fn standings_cache_drift(&self, ctx: &Context<'_>, event_id: ID) -> Result<Vec<StandingsDrift>> {
        let state = ctx.data::<AppState>()?;
        let drift = standings_service::cache_drift(&state.db, event_id.as_str())
            .await
            .map_err(GqlError::from)?;
        Ok(drift.into_iter().map(StandingsDrift::from).collect())
    }
}

#[derive(Default)]
pub struct StandingsMutation;

#[Object]
impl StandingsMutation {
    /// Recompute the cached standings table of one event
    async fn refresh_standings_cache(&self, ctx: &Context<'_>, event_id: ID) -> Result<Vec<CachedStanding>> {
        let session = require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;

        let rows = standings_service::refresh_cache(&state.db, event_id.as_str())
            .await
            .map_err(GqlError::from)?;

        tracing::info!("{} refreshed standings cache for {}", session.email, event_id.as_str());
        Ok(rows.into_iter().map(CachedStanding::from).collect())
    }
}
