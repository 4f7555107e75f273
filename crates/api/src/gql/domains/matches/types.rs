use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use infra::models::{MatchRow, TieGameRow};
use infra::repos::OrphanedTieSummary;

use crate::services::records;

#[derive(SimpleObject, Clone)]
pub struct Match {
    pub id: ID,
    pub event_id: ID,
    pub fixture_id: Option<ID>,
    pub division_a: String,
    pub division_b: String,
    pub winner: Option<String>,
    pub result: Option<String>,
    pub match_points_a: f64,
    pub match_points_b: f64,
    pub game_points_a: f64,
    pub game_points_b: f64,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    /// Set when this match summarises a best-of-N tie
    pub tie_id: Option<String>,
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            tie_id: records::tie_id(&row),
            id: row.id.into(),
            event_id: row.event_id.into(),
            fixture_id: row.fixture_id.map(Into::into),
            division_a: row.division_a,
            division_b: row.division_b,
            winner: row.winner,
            result: row.result,
            match_points_a: row.match_points_a,
            match_points_b: row.match_points_b,
            game_points_a: row.game_points_a,
            game_points_b: row.game_points_b,
            phase: row.phase,
            match_date: row.match_date,
            match_time: row.match_time,
            recorded_by: row.recorded_by,
            created_at: row.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TieGame {
    pub id: ID,
    pub match_id: ID,
    pub tie_id: String,
    pub match_number: i32,
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    /// `team_a` or `team_b`
    pub winner: String,
    pub score: Option<String>,
}

impl From<TieGameRow> for TieGame {
    fn from(row: TieGameRow) -> Self {
        Self {
            id: row.id.into(),
            match_id: row.match_id.into(),
            tie_id: row.tie_id,
            match_number: row.match_number,
            match_type: row.match_type,
            team_a_players: row.team_a_players,
            team_b_players: row.team_b_players,
            winner: row.winner,
            score: row.score,
        }
    }
}

#[derive(InputObject)]
pub struct RecordMatchInput {
    pub event_id: ID,
    pub division_a: String,
    pub division_b: String,
    /// Division A's result: `win`, `draw` or `loss`
    pub result: String,
    /// Leave blank to use the result's default points
    pub match_points_a: Option<String>,
    pub game_points_a: Option<String>,
    pub match_points_b: Option<String>,
    pub game_points_b: Option<String>,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub fixture_id: Option<ID>,
}

#[derive(InputObject)]
pub struct TieGameInput {
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    /// `team_a` or `team_b`; leave empty for unplayed games
    pub winner: Option<String>,
    pub score: Option<String>,
}

#[derive(InputObject)]
pub struct SubmitTieResultInput {
    pub event_id: ID,
    pub division_a: String,
    pub division_b: String,
    pub phase: String,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub fixture_id: Option<ID>,
    pub games: Vec<TieGameInput>,
}

#[derive(SimpleObject)]
pub struct SubmitTieResultPayload {
    #[graphql(name = "match")]
    pub summary: Match,
    pub games: Vec<TieGame>,
    /// Winning division
    pub winner: String,
    pub points_a: f64,
    pub points_b: f64,
    /// Both sides reached the win threshold; the tie was awarded to division A
    pub inconsistent: bool,
}

#[derive(SimpleObject, Clone)]
pub struct OrphanedTie {
    pub match_id: ID,
    pub event_id: ID,
    pub tie_id: String,
    pub division_a: String,
    pub division_b: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrphanedTieSummary> for OrphanedTie {
    fn from(row: OrphanedTieSummary) -> Self {
        Self {
            match_id: row.match_id.into(),
            event_id: row.event_id.into(),
            tie_id: row.tie_id,
            division_a: row.division_a,
            division_b: row.division_b,
            created_at: row.created_at,
        }
    }
}
