use crate::services::{StandingsError, SubmitError};
use crate::standings::ValidationError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
///   - `From<sqlx::Error>` logs the DB detail and shows a sanitized message to clients
///   - `From<StandingsError>` / `From<SubmitError>` keep validation messages as they are
///   - `GqlError::new("…")` for one-off messages
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Uuid(uuid::Error),
    Validation(ValidationError),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Uuid(e) => write!(f, "Invalid ID: {e}"),
            GqlError::Validation(e) => write!(f, "{e}"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<uuid::Error> for GqlError {
    fn from(e: uuid::Error) -> Self {
        GqlError::Uuid(e)
    }
}

impl From<ValidationError> for GqlError {
    fn from(e: ValidationError) -> Self {
        GqlError::Validation(e)
    }
}

impl From<StandingsError> for GqlError {
    fn from(e: StandingsError) -> Self {
        match e {
            StandingsError::Validation(e) => GqlError::Validation(e),
            StandingsError::Store(e) => GqlError::Sqlx(e),
            overflow @ StandingsError::CountOverflow { .. } => {
                tracing::error!("{overflow}");
                GqlError::Custom(overflow.to_string())
            }
        }
    }
}

impl From<SubmitError> for GqlError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Validation(e) => GqlError::Validation(e),
            SubmitError::Store(e) => GqlError::Sqlx(e),
            undecided @ SubmitError::Undecided { .. } => GqlError::Custom(undecided.to_string()),
        }
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `Uuid::parse_str(id).gql_err("Invalid match ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}
