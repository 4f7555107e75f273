use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use infra::repos::{matches, tie_games, MatchFilter};

use crate::auth::require_scorer;
use crate::gql::error::{GqlError, ResultExt};
use crate::services::match_service::{self, RecordMatchParams};
use crate::services::tie_service::{self, SubmitTieParams, TieGameParams};
use crate::state::AppState;

use super::types::{
    Match, OrphanedTie, RecordMatchInput, SubmitTieResultInput, SubmitTieResultPayload, TieGame,
};

fn parse_optional_id(id: Option<ID>, context: &str) -> Result<Option<Uuid>> {
    id.map(|id| Uuid::parse_str(id.as_str()).gql_err(context))
        .transpose()
}

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    /// Recorded matches of one event, oldest first
    async fn event_matches(&self, ctx: &Context<'_>, event_id: ID) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        let rows = matches::list(
            &state.db,
            MatchFilter {
                event_id: Some(event_id.to_string()),
                ..Default::default()
            },
        )
        .await
        .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Match::from).collect())
    }

    /// Individual games behind a tie summary
    async fn tie_games(&self, ctx: &Context<'_>, match_id: ID) -> Result<Vec<TieGame>> {
        let state = ctx.data::<AppState>()?;
        let match_id = Uuid::parse_str(match_id.as_str()).gql_err("Invalid match ID")?;
        let rows = tie_games::list_by_match(&state.db, match_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(TieGame::from).collect())
    }

    /// Tie summaries that lost their game rows
    async fn tie_consistency_report(&self, ctx: &Context<'_>) -> Result<Vec<OrphanedTie>> {
        require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let orphans = tie_service::consistency_report(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(orphans.into_iter().map(OrphanedTie::from).collect())
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    /// Record a single-game result
    async fn record_match(&self, ctx: &Context<'_>, input: RecordMatchInput) -> Result<Match> {
        let session = require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;

        let params = RecordMatchParams {
            event_id: input.event_id.to_string(),
            division_a: input.division_a,
            division_b: input.division_b,
            result: input.result,
            match_points_a: input.match_points_a,
            game_points_a: input.game_points_a,
            match_points_b: input.match_points_b,
            game_points_b: input.game_points_b,
            phase: input.phase,
            match_date: input.match_date,
            match_time: input.match_time,
            fixture_id: parse_optional_id(input.fixture_id, "Invalid fixture ID")?,
        };

        let row = match_service::record_match(&state.db, params, &session.email)
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    /// Record a best-of-N tie from its individual games
    async fn submit_tie_result(
        &self,
        ctx: &Context<'_>,
        input: SubmitTieResultInput,
    ) -> Result<SubmitTieResultPayload> {
        let session = require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;

        let params = SubmitTieParams {
            event_id: input.event_id.to_string(),
            division_a: input.division_a,
            division_b: input.division_b,
            phase: Some(input.phase),
            match_date: input.match_date,
            match_time: input.match_time,
            fixture_id: parse_optional_id(input.fixture_id, "Invalid fixture ID")?,
            games: input
                .games
                .into_iter()
                .map(|game| TieGameParams {
                    match_type: game.match_type,
                    team_a_players: game.team_a_players,
                    team_b_players: game.team_b_players,
                    winner: game.winner,
                    score: game.score,
                })
                .collect(),
        };

        let submitted = tie_service::submit_tie(&state.db, params, state.scoring(), &session.email)
            .await
            .map_err(GqlError::from)?;

        Ok(SubmitTieResultPayload {
            summary: submitted.summary.into(),
            games: submitted.games.into_iter().map(TieGame::from).collect(),
            winner: submitted.winner,
            points_a: submitted.result.points_a,
            points_b: submitted.result.points_b,
            inconsistent: submitted.result.inconsistency.is_some(),
        })
    }

    async fn delete_match(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let session = require_scorer(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid match ID")?;

        Ok(match_service::delete_match(&state.db, id, &session.email)
            .await
            .map_err(GqlError::from)?)
    }
}
