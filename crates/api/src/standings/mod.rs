//! Standings engine: turns recorded match and tie outcomes into ranked division tables.
//!
//! Everything in here is synchronous and free of I/O. Callers fetch a snapshot of rows
//! from the store, convert them into the record types below and hand them in.

pub mod aggregate;
pub mod columns;
pub mod division;
pub mod error;
pub mod medals;
pub mod ranking;
pub mod record;
pub mod scope;
pub mod tie;

pub use aggregate::{aggregate, CachedStanding, Contributes, Contribution, DivisionStanding, DivisionTotals};
pub use columns::{ColumnKind, ColumnLayouts, TableColumn};
pub use division::{DivisionInfo, DivisionSet};
pub use error::ValidationError;
pub use medals::{medal_table, CategoryWeights, MedalWeights};
pub use ranking::{league_order, medal_order, rank_league, rank_medals, RankedStanding};
pub use record::{derive_points, validate_match, DerivedPoints, MatchRecord, MatchResult};
pub use scope::{EventCategory, EventInfo, ScopeFilter, StandingsScope};
pub use tie::{resolve_tie, InconsistentTie, TieGameRecord, TieResolution, TieResult, TieSide};
