use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::division::DivisionSet;
use super::error::ValidationError;

/// Outcome of a match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "win",
            MatchResult::Draw => "draw",
            MatchResult::Loss => "loss",
        }
    }

    /// The same match seen from the other side.
    pub fn opposite(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Draw => MatchResult::Draw,
            MatchResult::Loss => MatchResult::Win,
        }
    }

    /// Default schedule used when a scorer does not type points in.
    pub fn fallback_points(self) -> DerivedPoints {
        match self {
            MatchResult::Win => DerivedPoints {
                match_points: 2.0,
                game_points: 1.0,
            },
            MatchResult::Draw => DerivedPoints {
                match_points: 1.0,
                game_points: 0.5,
            },
            MatchResult::Loss => DerivedPoints {
                match_points: 0.0,
                game_points: 0.0,
            },
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchResult {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" => Ok(MatchResult::Win),
            "draw" => Ok(MatchResult::Draw),
            "loss" => Ok(MatchResult::Loss),
            _ => Err(ValidationError::UnknownResult(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedPoints {
    pub match_points: f64,
    pub game_points: f64,
}

/// Points for one side of a match.
///
/// Explicit values win per field: each one that parses as a finite number is used as-is
/// (including `"0"`), and any field left blank or unparseable falls back to the schedule
/// for `result`.
pub fn derive_points(
    result: MatchResult,
    explicit_match_points: Option<&str>,
    explicit_game_points: Option<&str>,
) -> DerivedPoints {
    let fallback = result.fallback_points();
    DerivedPoints {
        match_points: parse_explicit(explicit_match_points).unwrap_or(fallback.match_points),
        game_points: parse_explicit(explicit_game_points).unwrap_or(fallback.game_points),
    }
}

fn parse_explicit(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// One recorded game or tie outcome between two divisions.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub id: Option<Uuid>,
    pub event_id: String,
    pub division_a: String,
    pub division_b: String,
    pub winner: Option<String>,
    /// From `division_a`'s point of view.
    pub result: Option<MatchResult>,
    pub match_points_a: f64,
    pub match_points_b: f64,
    pub game_points_a: f64,
    pub game_points_b: f64,
    pub phase: Option<String>,
    pub fixture_id: Option<Uuid>,
}

/// How one side of a record counts towards played/won/lost/drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideOutcome {
    Won,
    Lost,
    Drawn,
    /// No winner and not a draw: points still count, the game does not.
    Pending,
}

impl MatchRecord {
    pub fn outcome_for(&self, division: &str) -> SideOutcome {
        match (&self.winner, self.result) {
            (Some(winner), _) if winner == division => SideOutcome::Won,
            (Some(_), _) => SideOutcome::Lost,
            (None, Some(MatchResult::Draw)) => SideOutcome::Drawn,
            (None, _) => SideOutcome::Pending,
        }
    }
}

pub fn validate_match(record: &MatchRecord, divisions: &DivisionSet) -> Result<(), ValidationError> {
    if record.event_id.trim().is_empty() {
        return Err(ValidationError::MissingField("eventId"));
    }
    if record.division_a.trim().is_empty() {
        return Err(ValidationError::MissingField("divisionA"));
    }
    if record.division_b.trim().is_empty() {
        return Err(ValidationError::MissingField("divisionB"));
    }

    divisions.require(&record.division_a)?;
    divisions.require(&record.division_b)?;

    if record.division_a == record.division_b {
        return Err(ValidationError::SameDivision(record.division_a.clone()));
    }

    if let Some(winner) = &record.winner {
        if winner != &record.division_a && winner != &record.division_b {
            return Err(ValidationError::InvalidWinner {
                winner: winner.clone(),
                division_a: record.division_a.clone(),
                division_b: record.division_b.clone(),
            });
        }
    }

    for (field, value) in [
        ("matchPointsA", record.match_points_a),
        ("matchPointsB", record.match_points_b),
        ("gamePointsA", record.game_points_a),
        ("gamePointsB", record.game_points_b),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinitePoints { field });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativePoints { field, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(division_a: &str, division_b: &str, winner: Option<&str>) -> MatchRecord {
        MatchRecord {
            id: None,
            event_id: "football".to_string(),
            division_a: division_a.to_string(),
            division_b: division_b.to_string(),
            winner: winner.map(str::to_string),
            result: None,
            match_points_a: 0.0,
            match_points_b: 0.0,
            game_points_a: 0.0,
            game_points_b: 0.0,
            phase: None,
            fixture_id: None,
        }
    }

    #[test]
    fn fallback_schedule_without_overrides() {
        assert_eq!(
            derive_points(MatchResult::Win, None, None),
            DerivedPoints { match_points: 2.0, game_points: 1.0 }
        );
        assert_eq!(
            derive_points(MatchResult::Draw, None, None),
            DerivedPoints { match_points: 1.0, game_points: 0.5 }
        );
        assert_eq!(
            derive_points(MatchResult::Loss, None, None),
            DerivedPoints { match_points: 0.0, game_points: 0.0 }
        );
    }

    #[test]
    fn explicit_override_applies_per_field() {
        let points = derive_points(MatchResult::Loss, Some("5"), None);
        assert_eq!(points, DerivedPoints { match_points: 5.0, game_points: 0.0 });

        let points = derive_points(MatchResult::Win, None, Some("2.5"));
        assert_eq!(points, DerivedPoints { match_points: 2.0, game_points: 2.5 });
    }

    #[test]
    fn explicit_zero_is_used_verbatim() {
        let points = derive_points(MatchResult::Win, Some("0"), Some(" 0 "));
        assert_eq!(points, DerivedPoints { match_points: 0.0, game_points: 0.0 });
    }

    #[test]
    fn unparseable_or_non_finite_overrides_fall_back() {
        let points = derive_points(MatchResult::Win, Some("abc"), Some("NaN"));
        assert_eq!(points, DerivedPoints { match_points: 2.0, game_points: 1.0 });

        let points = derive_points(MatchResult::Draw, Some(""), Some("inf"));
        assert_eq!(points, DerivedPoints { match_points: 1.0, game_points: 0.5 });
    }

    #[test]
    fn result_parsing_is_case_insensitive_and_closed() {
        assert_eq!("WIN".parse::<MatchResult>(), Ok(MatchResult::Win));
        assert_eq!(" draw ".parse::<MatchResult>(), Ok(MatchResult::Draw));
        assert_eq!(
            "forfeit".parse::<MatchResult>(),
            Err(ValidationError::UnknownResult("forfeit".to_string()))
        );
        assert_eq!(MatchResult::Win.opposite(), MatchResult::Loss);
        assert_eq!(MatchResult::Draw.opposite(), MatchResult::Draw);
    }

    #[test]
    fn outcome_follows_winner_then_draw_result() {
        let decided = record("A", "B", Some("B"));
        assert_eq!(decided.outcome_for("B"), SideOutcome::Won);
        assert_eq!(decided.outcome_for("A"), SideOutcome::Lost);

        let mut drawn = record("A", "B", None);
        drawn.result = Some(MatchResult::Draw);
        assert_eq!(drawn.outcome_for("A"), SideOutcome::Drawn);
        assert_eq!(drawn.outcome_for("B"), SideOutcome::Drawn);

        let pending = record("A", "B", None);
        assert_eq!(pending.outcome_for("A"), SideOutcome::Pending);
    }

    #[test]
    fn validation_rejects_bad_records() {
        let divisions = DivisionSet::from_codes(["A", "B", "C"]);

        assert!(validate_match(&record("A", "B", Some("A")), &divisions).is_ok());
        assert_eq!(
            validate_match(&record("A", "A", None), &divisions),
            Err(ValidationError::SameDivision("A".to_string()))
        );
        assert_eq!(
            validate_match(&record("A", "Q", None), &divisions),
            Err(ValidationError::UnknownDivision("Q".to_string()))
        );
        assert!(matches!(
            validate_match(&record("A", "B", Some("C")), &divisions),
            Err(ValidationError::InvalidWinner { .. })
        ));

        let mut negative = record("A", "B", None);
        negative.game_points_b = -1.0;
        assert_eq!(
            validate_match(&negative, &divisions),
            Err(ValidationError::NegativePoints {
                field: "gamePointsB",
                value: -1.0
            })
        );

        let mut missing = record("A", "B", None);
        missing.event_id = "  ".to_string();
        assert_eq!(
            validate_match(&missing, &divisions),
            Err(ValidationError::MissingField("eventId"))
        );
    }
}
