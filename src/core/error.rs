//! Error types and handling for the social graph service
//!
//! Validation and not-found conditions are returned to the caller as explicit
//! results. Dangling references between records are never errors: the
//! resolver turns them into absent fields instead.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the social graph service
#[derive(Error, Debug)]
pub enum Error {
    /// A required scalar argument is missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// An id the operation requires to exist does not
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind (`User`, `Post`, `Comment`)
        kind: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// The dispatcher was asked for an operation it does not know
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Prometheus metrics errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error for an entity kind
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-readable name of the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Error::Config(_) => "CONFIG",
            Error::Io(_) => "IO",
            Error::Serialization(_) => "SERIALIZATION",
            Error::Metrics(_) => "METRICS",
        }
    }

    /// Check if this is a client error (4xx equivalent)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::NotFound { .. } | Error::UnknownOperation(_)
        )
    }

    /// Check if this is a server error (5xx equivalent)
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}
