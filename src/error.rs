//! Error types for the trip scenario optimizer

use thiserror::Error;

use crate::algorithms::SolverFailure;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed, missing or out-of-range input
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown scenario title
    #[error("scenario not found: {title}")]
    NotFound { title: String },

    /// A scenario was requested before any trips were loaded
    #[error("trip catalog has not been loaded")]
    CatalogNotLoaded,

    /// The solver reported a non-optimal outcome
    #[error("solver failure: {0}")]
    SolverFailure(#[from] SolverFailure),

    /// Internal chain bookkeeping is inconsistent (should not occur in normal operation)
    #[error("state invariant violated: {0}")]
    StateInvariant(String),

    /// Configuration file could not be parsed or holds invalid values
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn state_invariant(msg: impl Into<String>) -> Self {
        Self::StateInvariant(msg.into())
    }

    /// Errors the caller can fix by changing its input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::StateInvariant(_))
    }
}
