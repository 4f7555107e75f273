use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use infra::models::{MatchRow, TieGameRow};
use infra::repos::{divisions, events, fixtures, matches, tie_games, CreateMatch, CreateTieGame, OrphanedTieSummary};

use super::error::SubmitError;
use super::records;
use crate::config::ScoringConfig;
use crate::standings::{
    resolve_tie, validate_match, DivisionSet, MatchRecord, MatchResult, TieGameRecord, TieResolution,
    TieResult, TieSide, ValidationError,
};

/// One row of the tie form. Rows without a winner or players are unplayed games.
#[derive(Debug, Clone, Default)]
pub struct TieGameParams {
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    pub winner: Option<String>,
    pub score: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitTieParams {
    pub event_id: String,
    pub division_a: String,
    pub division_b: String,
    pub phase: Option<String>,
    pub match_date: Option<NaiveDate>,
    pub match_time: Option<NaiveTime>,
    pub fixture_id: Option<Uuid>,
    pub games: Vec<TieGameParams>,
}

/// A validated, decided tie ready to be written.
#[derive(Debug, Clone)]
pub struct PreparedTie {
    pub tie_id: String,
    pub record: MatchRecord,
    pub games: Vec<TieGameRecord>,
    pub result: TieResult,
}

impl PreparedTie {
    pub fn winning_division(&self) -> &str {
        match self.result.winner {
            TieSide::TeamA => &self.record.division_a,
            TieSide::TeamB => &self.record.division_b,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn played_games(tie_id: &str, games: &[TieGameParams]) -> Result<Vec<TieGameRecord>, ValidationError> {
    let mut played = Vec::new();

    for game in games {
        let winner = game.winner.as_deref().map(str::trim).unwrap_or_default();
        let team_a = game.team_a_players.trim();
        let team_b = game.team_b_players.trim();
        if winner.is_empty() || team_a.is_empty() || team_b.is_empty() {
            continue;
        }

        played.push(TieGameRecord {
            tie_id: tie_id.to_string(),
            match_number: played.len() as i32 + 1,
            match_type: game.match_type.trim().to_string(),
            team_a_players: team_a.to_string(),
            team_b_players: team_b.to_string(),
            winner: winner.parse()?,
            score: game
                .score
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        });
    }

    Ok(played)
}

/// Validate a tie form and decide it, without touching the store.
///
/// Game points are the individual games each side won; match points go to the tie
/// winner only.
pub fn prepare_tie(
    params: &SubmitTieParams,
    divisions: &DivisionSet,
    scoring: &ScoringConfig,
    submitted_at: DateTime<Utc>,
) -> Result<PreparedTie, SubmitError> {
    let event_id = required(&params.event_id, "eventId")?;
    let division_a = required(&params.division_a, "divisionA")?;
    let division_b = required(&params.division_b, "divisionB")?;
    let phase = required(params.phase.as_deref().unwrap_or_default(), "phase")?;

    divisions.require(&division_a)?;
    divisions.require(&division_b)?;
    if division_a == division_b {
        return Err(ValidationError::SameDivision(division_a).into());
    }

    let tie_id = format!(
        "{}-{}-{}-{}",
        event_id,
        division_a,
        division_b,
        submitted_at.timestamp_millis()
    );
    let games = played_games(&tie_id, &params.games)?;

    let result = match resolve_tie(&games, scoring.tie_win_threshold, scoring.tie_points_on_win) {
        TieResolution::Decided(result) => result,
        TieResolution::Undecided {
            wins_a,
            wins_b,
            threshold,
        } => {
            return Err(SubmitError::Undecided {
                required: threshold,
                wins_a,
                wins_b,
            })
        }
    };

    let (winner, side_a_result) = match result.winner {
        TieSide::TeamA => (division_a.clone(), MatchResult::Win),
        TieSide::TeamB => (division_b.clone(), MatchResult::Loss),
    };

    let record = MatchRecord {
        id: None,
        event_id,
        division_a,
        division_b,
        winner: Some(winner),
        result: Some(side_a_result),
        match_points_a: result.points_a,
        match_points_b: result.points_b,
        game_points_a: f64::from(result.wins_a),
        game_points_b: f64::from(result.wins_b),
        phase: Some(phase),
        fixture_id: params.fixture_id,
    };
    validate_match(&record, divisions)?;

    Ok(PreparedTie {
        tie_id,
        record,
        games,
        result,
    })
}

pub struct SubmittedTie {
    pub summary: MatchRow,
    pub games: Vec<TieGameRow>,
    pub winner: String,
    pub result: TieResult,
}

/// Decide and store a tie: its summary match, every played game and the fixture's
/// completion all commit together or not at all.
pub async fn submit_tie(
    pool: &PgPool,
    params: SubmitTieParams,
    scoring: &ScoringConfig,
    recorded_by: &str,
) -> Result<SubmittedTie, SubmitError> {
    let divisions = records::division_set(&divisions::list(pool).await?);
    let prepared = prepare_tie(&params, &divisions, scoring, Utc::now())?;

    if events::get_by_id(pool, &prepared.record.event_id).await?.is_none() {
        return Err(ValidationError::UnknownEvent(prepared.record.event_id).into());
    }

    if let Some(inconsistency) = &prepared.result.inconsistency {
        tracing::warn!("Tie {} has inconsistent games: {}", prepared.tie_id, inconsistency);
    }

    match persist_tie(pool, &params, &prepared, recorded_by).await {
        Ok((summary, games)) => {
            tracing::info!(
                "Recorded tie {} won by {} ({}-{}) by {}",
                prepared.tie_id,
                prepared.winning_division(),
                prepared.result.wins_a,
                prepared.result.wins_b,
                recorded_by
            );
            Ok(SubmittedTie {
                summary,
                games,
                winner: prepared.winning_division().to_string(),
                result: prepared.result,
            })
        }
        Err(e) => {
            tracing::error!("Failed to store tie {}, rolled back: {}", prepared.tie_id, e);
            Err(e.into())
        }
    }
}

async fn persist_tie(
    pool: &PgPool,
    params: &SubmitTieParams,
    prepared: &PreparedTie,
    recorded_by: &str,
) -> Result<(MatchRow, Vec<TieGameRow>), sqlx::Error> {
    let record = &prepared.record;
    let mut tx = pool.begin().await?;

    let summary = matches::create(
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
            match_data: Some(json!({
                "tie_id": prepared.tie_id,
                "tie_result": {
                    "winner": prepared.winning_division(),
                    "points": prepared.result.points_for(prepared.result.winner),
                },
            })),
            recorded_by: Some(recorded_by.to_string()),
        },
    )
    .await?;

    let mut games = Vec::with_capacity(prepared.games.len());
    for game in &prepared.games {
        let row = tie_games::create(
            &mut *tx,
            CreateTieGame {
                match_id: summary.id,
                tie_id: game.tie_id.clone(),
                match_number: game.match_number,
                match_type: game.match_type.clone(),
                team_a_players: game.team_a_players.clone(),
                team_b_players: game.team_b_players.clone(),
                winner: game.winner.as_str().to_string(),
                score: game.score.clone(),
            },
        )
        .await?;
        games.push(row);
    }

    if let Some(fixture_id) = record.fixture_id {
        fixtures::mark_completed(&mut *tx, fixture_id).await?;
    }

    tx.commit().await?;
    Ok((summary, games))
}

/// Tie summaries with no game rows, left behind by writers that did not use a transaction.
pub async fn consistency_report(pool: &PgPool) -> Result<Vec<OrphanedTieSummary>, SubmitError> {
    let orphans = tie_games::list_orphaned_tie_summaries(pool).await?;
    if !orphans.is_empty() {
        tracing::warn!("{} tie summary row(s) have no game rows", orphans.len());
    }
    Ok(orphans)
}
