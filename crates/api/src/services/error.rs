use thiserror::Error;

use crate::standings::ValidationError;

/// Failure while computing standings.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{field} for division {division} is too large to cache ({value})")]
    CountOverflow {
        field: &'static str,
        division: String,
        value: u32,
    },

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Failure while recording a result or a fixture.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Complete at least {required} games to determine a winner (team A {wins_a}, team B {wins_b})")]
    Undecided { required: u32, wins_a: u32, wins_b: u32 },

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
