//! Error types for fitcal.

use thiserror::Error;

/// Classified query outcomes that are not data.
///
/// These are ordinary, renderable states (an empty month, a past month, a
/// date with nothing scheduled) rather than failures of the store itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryError {
    #[error("UserId Error")]
    UserIdError,

    /// A mutation or month listing was attempted without a user.
    #[error("Error")]
    MissingUser,

    #[error("Older date")]
    OlderDate,

    #[error("No upcoming workout for this month")]
    NoUpcomingWorkout,

    #[error("No Dates")]
    NoDates,

    #[error("Clicked date has no workout")]
    NoWorkoutForDate,
}

impl QueryError {
    /// Whether a result carrying this error may be kept in the query cache.
    ///
    /// Missing-user outcomes say nothing about stored data, so no tag could
    /// ever invalidate them.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self, QueryError::UserIdError | QueryError::MissingUser)
    }
}

/// Errors that can occur in fitcal operations.
#[derive(Error, Debug)]
pub enum FitCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid month key '{0}'. Expected <month>_<year>, e.g. june_2025")]
    InvalidMonthKey(String),

    #[error("Invalid user id '{0}'. User ids cannot be empty or contain path separators")]
    InvalidUser(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl FitCalError {
    /// The classified query outcome, if this error is one.
    pub fn query_error(&self) -> Option<QueryError> {
        match self {
            FitCalError::Query(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FitCalError {
    fn from(e: serde_json::Error) -> Self {
        FitCalError::Serialization(e.to_string())
    }
}

/// Result type alias for fitcal operations.
pub type FitCalResult<T> = Result<T, FitCalError>;
