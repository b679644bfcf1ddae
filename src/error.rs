//! Error Handling
//!
//! Unified error type for the application layer. Uses thiserror for
//! ergonomic error definitions; analysis errors convert in via `#[from]`
//! and keep their taxonomy visible for logging.

use thiserror::Error;

use pathfinder_llm::AnalysisError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (out-of-phase calls, out-of-range input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Analysis request/response errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
