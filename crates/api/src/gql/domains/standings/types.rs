use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};

use infra::models::StandingRow;

use crate::gql::domains::catalog::types::Event;
use crate::services::standings_service::CacheDrift;
use crate::standings::{self, DivisionSet, DivisionStanding, RankedStanding};

#[derive(SimpleObject, Clone)]
pub struct Standing {
    pub rank: i32,
    pub division: String,
    pub division_name: Option<String>,
    pub played: i32,
    pub won: i32,
    pub lost: i32,
    pub drawn: i32,
    pub match_points: f64,
    pub game_points: f64,
    pub gold: i32,
    pub silver: i32,
    pub bronze: i32,
    pub points: f64,
}

impl Standing {
    pub fn from_ranked(ranked: RankedStanding, divisions: Option<&DivisionSet>) -> Self {
        let row = ranked.standing;
        Self {
            rank: ranked.rank as i32,
            division_name: divisions
                .and_then(|set| set.name_of(&row.division))
                .map(str::to_string),
            division: row.division,
            played: row.played as i32,
            won: row.won as i32,
            lost: row.lost as i32,
            drawn: row.drawn as i32,
            match_points: row.match_points,
            game_points: row.game_points,
            gold: row.gold as i32,
            silver: row.silver as i32,
            bronze: row.bronze as i32,
            points: row.points,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ColumnKind {
    Text,
    Number,
}

#[derive(SimpleObject, Clone)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl From<&standings::TableColumn> for TableColumn {
    fn from(column: &standings::TableColumn) -> Self {
        Self {
            key: column.key.clone(),
            label: column.label.clone(),
            kind: match column.kind {
                standings::ColumnKind::Text => ColumnKind::Text,
                standings::ColumnKind::Number => ColumnKind::Number,
            },
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TableLayout {
    pub layout: String,
    pub columns: Vec<TableColumn>,
}

#[derive(SimpleObject, Clone)]
pub struct EventStandingRow {
    pub standing: Standing,
    /// One cell per column, in column order
    pub cells: Vec<String>,
}

#[derive(SimpleObject, Clone)]
pub struct EventStandings {
    pub event: Event,
    pub layout: TableLayout,
    pub rows: Vec<EventStandingRow>,
}

#[derive(SimpleObject, Clone)]
pub struct CachedStanding {
    pub division: String,
    pub position: Option<i32>,
    pub played: i32,
    pub won: i32,
    pub lost: i32,
    pub drawn: i32,
    pub match_points: f64,
    pub game_points: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<StandingRow> for CachedStanding {
    fn from(row: StandingRow) -> Self {
        Self {
            division: row.division,
            position: row.position,
            played: row.played,
            won: row.won,
            lost: row.lost,
            drawn: row.drawn,
            match_points: row.match_points,
            game_points: row.game_points,
            updated_at: row.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct StandingsDrift {
    pub division: String,
    pub cached_match_points: Option<f64>,
    pub computed_match_points: Option<f64>,
    pub cached_game_points: Option<f64>,
    pub computed_game_points: Option<f64>,
    pub cached_played: Option<i32>,
    pub computed_played: Option<i32>,
}

impl From<CacheDrift> for StandingsDrift {
    fn from(drift: CacheDrift) -> Self {
        let field = |row: &Option<DivisionStanding>, pick: fn(&DivisionStanding) -> f64| row.as_ref().map(pick);
        let played = |row: &Option<DivisionStanding>| row.as_ref().map(|r| r.played as i32);
        Self {
            cached_match_points: field(&drift.cached, |r| r.match_points),
            computed_match_points: field(&drift.computed, |r| r.match_points),
            cached_game_points: field(&drift.cached, |r| r.game_points),
            computed_game_points: field(&drift.computed, |r| r.game_points),
            cached_played: played(&drift.cached),
            computed_played: played(&drift.computed),
            division: drift.division,
        }
    }
}
