use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use infra::models::MatchRow;
use infra::repos::{divisions, events, fixtures, matches, CreateMatch};

use super::error::SubmitError;
use super::records;
use crate::standings::{derive_points, validate_match, DivisionSet, MatchRecord, MatchResult, ValidationError};

/// A single-game result as a scorer types it in. Point fields stay textual so that a
/// blank box falls back to the result's default points.
#[derive(Debug, Clone, Default)]
pub struct RecordMatchParams {
    pub event_id: String,
    pub division_a: String,
    pub division_b: String,
    pub result: String,
    pub match_points_a: Option<String>,
    pub game_points_a: Option<String>,
    pub match_points_b: Option<String>,
    pub game_points_b: Option<String>,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub fixture_id: Option<Uuid>,
}

/// Turn the form into a validated record. `result` is side A's result; side B gets the
/// opposite one.
pub fn build_match_record(
    params: &RecordMatchParams,
    divisions: &DivisionSet,
) -> Result<MatchRecord, ValidationError> {
    if params.result.trim().is_empty() {
        return Err(ValidationError::MissingField("result"));
    }
    let result: MatchResult = params.result.parse()?;

    let side_a = derive_points(
        result,
        params.match_points_a.as_deref(),
        params.game_points_a.as_deref(),
    );
    let side_b = derive_points(
        result.opposite(),
        params.match_points_b.as_deref(),
        params.game_points_b.as_deref(),
    );

    let division_a = params.division_a.trim().to_string();
    let division_b = params.division_b.trim().to_string();
    let winner = match result {
        MatchResult::Win => Some(division_a.clone()),
        MatchResult::Loss => Some(division_b.clone()),
        MatchResult::Draw => None,
    };

    let record = MatchRecord {
        id: None,
        event_id: params.event_id.trim().to_string(),
        division_a,
        division_b,
        winner,
        result: Some(result),
        match_points_a: side_a.match_points,
        match_points_b: side_b.match_points,
        game_points_a: side_a.game_points,
        game_points_b: side_b.game_points,
        phase: params
            .phase
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        fixture_id: params.fixture_id,
    };

    validate_match(&record, divisions)?;
    Ok(record)
}

pub async fn record_match(
    pool: &PgPool,
    params: RecordMatchParams,
    recorded_by: &str,
) -> Result<MatchRow, SubmitError> {
    let divisions = records::division_set(&divisions::list(pool).await?);
    let record = build_match_record(&params, &divisions)?;

    if events::get_by_id(pool, &record.event_id).await?.is_none() {
        return Err(ValidationError::UnknownEvent(record.event_id).into());
    }

    let mut tx = pool.begin().await?;

    let row = matches::create(
        &mut *tx,
        CreateMatch {
            event_id: record.event_id.clone(),
            fixture_id: record.fixture_id,
            division_a: record.division_a.clone(),
            division_b: record.division_b.clone(),
            winner: record.winner.clone(),
            result: record.result.map(|r| r.as_str().to_string()),
            match_points_a: record.match_points_a,
            match_points_b: record.match_points_b,
            game_points_a: record.game_points_a,
            game_points_b: record.game_points_b,
            phase: record.phase.clone(),
            match_date: params.match_date,
            match_time: params.match_time,
            match_data: None,
            recorded_by: Some(recorded_by.to_string()),
        },
    )
    .await?;

    if let Some(fixture_id) = record.fixture_id {
        fixtures::mark_completed(&mut *tx, fixture_id).await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Recorded {} {} vs {} ({}) by {}",
        row.event_id,
        row.division_a,
        row.division_b,
        params.result.trim().to_lowercase(),
        recorded_by
    );

    Ok(row)
}

/// Tie game rows are removed with their summary.
pub async fn delete_match(pool: &PgPool, id: Uuid, deleted_by: &str) -> Result<bool, SubmitError> {
    let deleted = matches::delete(pool, id).await?;
    if deleted {
        tracing::info!("Match {} deleted by {}", id, deleted_by);
    }
    Ok(deleted)
}
