pub mod error;
pub mod fixture_service;
pub mod match_service;
pub mod records;
pub mod standings_service;
pub mod tie_service;

pub use error::{StandingsError, SubmitError};
