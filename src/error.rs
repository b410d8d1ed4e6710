//! Error types for flowq.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for flowq operations.
#[derive(Error, Debug)]
pub enum FlowqError {
    /// Errors submitting the query (transport faults, service rejections).
    #[error("Submit error: {0}")]
    Submit(String),

    /// Errors retrieving the execution status (transport faults, malformed responses).
    #[error("Status error: {0}")]
    Status(String),

    /// Errors retrieving the result rows.
    #[error("Results error: {0}")]
    Results(String),

    /// The query reached a failure-classified terminal state (FAILED or CANCELLED).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FlowqError {
    /// Creates a submit error with the given message.
    pub fn submit(msg: impl Into<String>) -> Self {
        Self::Submit(msg.into())
    }

    /// Creates a status error with the given message.
    pub fn status(msg: impl Into<String>) -> Self {
        Self::Status(msg.into())
    }

    /// Creates a results error with the given message.
    pub fn results(msg: impl Into<String>) -> Self {
        Self::Results(msg.into())
    }

    /// Creates a query-failed error with the given message.
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::QueryFailed(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Submit(_) => "Submit Error",
            Self::Status(_) => "Status Error",
            Self::Results(_) => "Results Error",
            Self::QueryFailed(_) => "Query Failed",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using FlowqError.
pub type Result<T> = std::result::Result<T, FlowqError>;
