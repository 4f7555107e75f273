use sqlx::PgPool;

use infra::models::{EventRow, StandingRow};
use infra::repos::{divisions, events, matches, standings, MatchFilter, UpsertStanding};

use super::error::StandingsError;
use super::records;
use crate::standings::{
    aggregate, medal_table, rank_league, rank_medals, CategoryWeights, DivisionSet, DivisionStanding,
    EventCategory, EventInfo, MatchRecord, RankedStanding, ScopeFilter, StandingsScope, ValidationError,
};

/// Everything a standings computation reads, fetched fresh for each request.
pub struct Snapshot {
    pub divisions: DivisionSet,
    pub events: Vec<EventInfo>,
    pub matches: Vec<MatchRecord>,
}

/// Only the matches `scope` can count are fetched.
pub async fn load_snapshot(pool: &PgPool, scope: &StandingsScope) -> Result<Snapshot, StandingsError> {
    let divisions = records::division_set(&divisions::list(pool).await?);

    let events = events::list(pool, None)
        .await?
        .iter()
        .map(records::event_info)
        .collect::<Result<Vec<_>, _>>()?;

    let matches = matches::list(pool, match_filter(scope, &events))
        .await?
        .iter()
        .map(records::match_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot {
        divisions,
        events,
        matches,
    })
}

fn match_filter(scope: &StandingsScope, events: &[EventInfo]) -> MatchFilter {
    match scope {
        StandingsScope::All => MatchFilter::default(),
        StandingsScope::Event(id) => MatchFilter {
            event_id: Some(id.clone()),
            ..Default::default()
        },
        StandingsScope::Category(category) => MatchFilter {
            event_ids: Some(
                events
                    .iter()
                    .filter(|event| event.category == *category)
                    .map(|event| event.id.clone())
                    .collect(),
            ),
            ..Default::default()
        },
    }
}

/// League table over raw matches: match points, then game points.
pub async fn league_standings(pool: &PgPool, scope: &str) -> Result<Vec<RankedStanding>, StandingsError> {
    let scope = StandingsScope::parse(scope)?;
    let snapshot = load_snapshot(pool, &scope).await?;
    let filter = ScopeFilter::resolve(&scope, &snapshot.events)?;

    let totals = aggregate(&snapshot.matches, &snapshot.divisions, |id| filter.contains(id))?;

    Ok(rank_league(totals.into_rows()))
}

/// Medal tally over completed events.
pub async fn medal_standings(
    pool: &PgPool,
    scope: &str,
    weights: &CategoryWeights,
) -> Result<Vec<RankedStanding>, StandingsError> {
    let scope = StandingsScope::parse(scope)?;
    let snapshot = load_snapshot(pool, &scope).await?;
    let filter = ScopeFilter::resolve(&scope, &snapshot.events)?;

    let totals = medal_table(
        &snapshot.events,
        &snapshot.matches,
        &snapshot.divisions,
        weights,
        &filter,
    )?;

    Ok(rank_medals(totals.into_rows()))
}

pub struct EventTable {
    pub event: EventRow,
    pub divisions: DivisionSet,
    pub standings: Vec<RankedStanding>,
}

/// One event's league table, or `None` if there is no such event.
pub async fn event_standings(pool: &PgPool, event_id: &str) -> Result<Option<EventTable>, StandingsError> {
    let Some(event) = events::get_by_id(pool, event_id).await? else {
        return Ok(None);
    };

    let snapshot = load_snapshot(pool, &StandingsScope::Event(event.id.clone())).await?;
    let totals = aggregate(&snapshot.matches, &snapshot.divisions, |id| id == event.id)?;

    Ok(Some(EventTable {
        event,
        divisions: snapshot.divisions,
        standings: rank_league(totals.into_rows()),
    }))
}

fn cache_row(event_id: &str, ranked: &RankedStanding) -> Result<UpsertStanding, StandingsError> {
    let row = &ranked.standing;
    let column = |field: &'static str, value: u32| {
        i32::try_from(value).map_err(|_| StandingsError::CountOverflow {
            field,
            division: row.division.clone(),
            value,
        })
    };

    Ok(UpsertStanding {
        event_id: event_id.to_string(),
        division: row.division.clone(),
        played: column("played", row.played)?,
        won: column("won", row.won)?,
        lost: column("lost", row.lost)?,
        drawn: column("drawn", row.drawn)?,
        match_points: row.match_points,
        game_points: row.game_points,
        position: column("position", ranked.rank)?,
    })
}

/// Rewrite the `standings` cache for one event from its raw matches.
pub async fn refresh_cache(pool: &PgPool, event_id: &str) -> Result<Vec<StandingRow>, StandingsError> {
    let table = event_standings(pool, event_id)
        .await?
        .ok_or_else(|| ValidationError::UnknownEvent(event_id.to_string()))?;

    let mut tx = pool.begin().await?;
    let mut written = Vec::with_capacity(table.standings.len());

    for ranked in &table.standings {
        let saved = standings::upsert(&mut *tx, cache_row(&table.event.id, ranked)?).await?;
        written.push(saved);
    }

    let keep: Vec<String> = written.iter().map(|row| row.division.clone()).collect();
    let removed = standings::delete_except(&mut *tx, &table.event.id, &keep).await?;

    tx.commit().await?;

    tracing::info!(
        "Refreshed standings cache for {}: {} row(s) written, {} removed",
        table.event.id,
        written.len(),
        removed
    );

    Ok(written)
}

/// A division whose cached row disagrees with a fresh computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheDrift {
    pub division: String,
    pub cached: Option<DivisionStanding>,
    pub computed: Option<DivisionStanding>,
}

fn drifted(cached: Option<&DivisionStanding>, computed: Option<&DivisionStanding>) -> bool {
    match (cached, computed) {
        (None, None) => false,
        (Some(c), Some(f)) => {
            c.played != f.played
                || c.won != f.won
                || c.lost != f.lost
                || c.drawn != f.drawn
                || c.match_points != f.match_points
                || c.game_points != f.game_points
        }
        _ => true,
    }
}

pub async fn cache_drift(pool: &PgPool, event_id: &str) -> Result<Vec<CacheDrift>, StandingsError> {
    let table = event_standings(pool, event_id)
        .await?
        .ok_or_else(|| ValidationError::UnknownEvent(event_id.to_string()))?;

    let cached_rows: Vec<_> = standings::list_by_event(pool, &table.event.id)
        .await?
        .iter()
        .map(records::cached_standing)
        .collect();
    let cached = aggregate(&cached_rows, &table.divisions, |_| true)?;

    let drift: Vec<CacheDrift> = table
        .divisions
        .iter()
        .filter_map(|division| {
            let code = division.code.as_str();
            let from_cache = cached.get(code);
            let from_matches = table
                .standings
                .iter()
                .map(|ranked| &ranked.standing)
                .find(|row| row.division == code);

            drifted(from_cache, from_matches).then(|| CacheDrift {
                division: code.to_string(),
                cached: from_cache.cloned(),
                computed: from_matches.cloned(),
            })
        })
        .collect();

    if !drift.is_empty() {
        tracing::warn!(
            "Standings cache for {} is stale for {} division(s)",
            table.event.id,
            drift.len()
        );
    }

    Ok(drift)
}
