use thiserror::Error;

/// Input rejected before anything is computed or written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown division: {0}")]
    UnknownDivision(String),

    #[error("division {0} cannot play against itself")]
    SameDivision(String),

    #[error("winner {winner} is neither {division_a} nor {division_b}")]
    InvalidWinner {
        winner: String,
        division_a: String,
        division_b: String,
    },

    #[error("{field} cannot be negative (got {value})")]
    NegativePoints { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinitePoints { field: &'static str },

    #[error("unknown result '{0}', expected win, draw or loss")]
    UnknownResult(String),

    #[error("unknown tie side '{0}', expected team_a or team_b")]
    UnknownTieSide(String),

    #[error("unknown event: {0}")]
    UnknownEvent(String),

    #[error("unknown event category '{0}', expected sports or cultural")]
    UnknownCategory(String),
}
