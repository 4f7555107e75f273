pub mod divisions;
pub mod events;
pub mod fixtures;
pub mod matches;
pub mod scorer_sessions;
pub mod standings;
pub mod tie_games;

pub use fixtures::{CreateFixture, FixtureFilter};
pub use matches::{CreateMatch, MatchFilter};
pub use standings::UpsertStanding;
pub use tie_games::{CreateTieGame, OrphanedTieSummary};
