use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieSide {
    TeamA,
    TeamB,
}

impl TieSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieSide::TeamA => "team_a",
            TieSide::TeamB => "team_b",
        }
    }
}

impl fmt::Display for TieSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team_a" => Ok(TieSide::TeamA),
            "team_b" => Ok(TieSide::TeamB),
            _ => Err(ValidationError::UnknownTieSide(s.to_string())),
        }
    }
}

/// One game inside a best-of-N tie (e.g. the men's singles of a badminton tie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieGameRecord {
    pub tie_id: String,
    pub match_number: i32,
    pub match_type: String,
    pub team_a_players: String,
    pub team_b_players: String,
    pub winner: TieSide,
    pub score: Option<String>,
}

/// Both sides reached the threshold, which honest data cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentTie {
    pub wins_a: u32,
    pub wins_b: u32,
    pub threshold: u32,
}

impl fmt::Display for InconsistentTie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "both sides reached {} wins (team_a {}, team_b {}); awarding team_a",
            self.threshold, self.wins_a, self.wins_b
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TieResult {
    pub winner: TieSide,
    pub wins_a: u32,
    pub wins_b: u32,
    pub points_a: f64,
    pub points_b: f64,
    pub inconsistency: Option<InconsistentTie>,
}

impl TieResult {
    pub fn points_for(&self, side: TieSide) -> f64 {
        match side {
            TieSide::TeamA => self.points_a,
            TieSide::TeamB => self.points_b,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TieResolution {
    Decided(TieResult),
    /// Neither side has enough wins yet. Not an error.
    Undecided {
        wins_a: u32,
        wins_b: u32,
        threshold: u32,
    },
}

impl TieResolution {
    pub fn is_decided(&self) -> bool {
        matches!(self, TieResolution::Decided(_))
    }

    pub fn decided(self) -> Option<TieResult> {
        match self {
            TieResolution::Decided(result) => Some(result),
            TieResolution::Undecided { .. } => None,
        }
    }
}

/// Decide a tie from its recorded games.
///
/// The first side with `threshold` game wins takes the tie and `points_on_win`; the other
/// side gets nothing. Games beyond the deciding one need no records. If both sides reach
/// the threshold, team A is chosen and the result carries an [`InconsistentTie`].
pub fn resolve_tie(games: &[TieGameRecord], threshold: u32, points_on_win: f64) -> TieResolution {
    let wins_a = games.iter().filter(|g| g.winner == TieSide::TeamA).count() as u32;
    let wins_b = games.iter().filter(|g| g.winner == TieSide::TeamB).count() as u32;

    let a_decides = wins_a >= threshold;
    let b_decides = wins_b >= threshold;

    let (winner, inconsistency) = match (a_decides, b_decides) {
        (true, true) => (
            TieSide::TeamA,
            Some(InconsistentTie {
                wins_a,
                wins_b,
                threshold,
            }),
        ),
        (true, false) => (TieSide::TeamA, None),
        (false, true) => (TieSide::TeamB, None),
        (false, false) => {
            return TieResolution::Undecided {
                wins_a,
                wins_b,
                threshold,
            }
        }
    };

    let (points_a, points_b) = match winner {
        TieSide::TeamA => (points_on_win, 0.0),
        TieSide::TeamB => (0.0, points_on_win),
    };

    TieResolution::Decided(TieResult {
        winner,
        wins_a,
        wins_b,
        points_a,
        points_b,
        inconsistency,
    })
}
