//! Content Error Types
//!
//! Errors raised when the compiled-in dashboard content breaks one of its
//! invariants. None of these can occur with the shipped literals; they guard
//! edits to the content tables.

use thiserror::Error;

/// Content validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    /// A time-series date is not an ISO-8601 calendar date
    #[error("Invalid date {date:?}: {reason}")]
    InvalidDate { date: String, reason: String },

    /// Time-series dates must be strictly increasing
    #[error("Time series is not chronological: {previous} is followed by {next}")]
    NotChronological { previous: String, next: String },

    /// Two navigation entries point at the same route
    #[error("Duplicate navigation route: {0}")]
    DuplicateRoute(String),

    /// A navigation entry's route does not resolve to any view
    #[error("Navigation entry {label:?} targets {route:?}, which is not a view")]
    UnresolvedRoute { label: String, route: String },

    /// A navigation entry's route resolves, but only after normalisation
    #[error("Navigation entry {label:?} targets {route:?} instead of {canonical:?}")]
    NonCanonicalRoute {
        label: String,
        route: String,
        canonical: String,
    },
}

/// Result type for content validation
pub type ContentResult<T> = Result<T, ContentError>;
