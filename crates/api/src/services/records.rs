//! Row-to-record conversions between the store and the standings engine.

use infra::models::{DivisionRow, EventRow, MatchRow, StandingRow};

use crate::standings::{
    CachedStanding, DivisionInfo, DivisionSet, EventInfo, MatchRecord, MatchResult, ValidationError,
};

pub fn division_set(rows: &[DivisionRow]) -> DivisionSet {
    DivisionSet::new(
        rows.iter()
            .map(|row| DivisionInfo::new(row.code.clone(), row.name.clone())),
    )
}

pub fn event_info(row: &EventRow) -> Result<EventInfo, ValidationError> {
    Ok(EventInfo {
        id: row.id.clone(),
        category: row.category.parse()?,
        completed: row.is_completed(),
    })
}

pub fn match_record(row: &MatchRow) -> Result<MatchRecord, ValidationError> {
    let result = row
        .result
        .as_deref()
        .map(str::parse::<MatchResult>)
        .transpose()?;

    Ok(MatchRecord {
        id: Some(row.id),
        event_id: row.event_id.clone(),
        division_a: row.division_a.clone(),
        division_b: row.division_b.clone(),
        winner: row.winner.clone(),
        result,
        match_points_a: row.match_points_a,
        match_points_b: row.match_points_b,
        game_points_a: row.game_points_a,
        game_points_b: row.game_points_b,
        phase: row.phase.clone(),
        fixture_id: row.fixture_id,
    })
}

pub fn cached_standing(row: &StandingRow) -> CachedStanding {
    let count = |value: i32| u32::try_from(value).unwrap_or(0);

    CachedStanding {
        event_id: row.event_id.clone(),
        division: row.division.clone(),
        played: count(row.played),
        won: count(row.won),
        lost: count(row.lost),
        drawn: count(row.drawn),
        match_points: row.match_points,
        game_points: row.game_points,
    }
}

/// The tie id stored in a summary row's `match_data`, if the match was a tie.
pub fn tie_id(row: &MatchRow) -> Option<String> {
    row.match_data
        .as_ref()
        .and_then(|data| data.get("tie_id"))
        .and_then(|id| id.as_str())
        .map(str::to_string)
}
