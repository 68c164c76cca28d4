//! Error types for the zambia-forecast crate.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building series or producing forecasts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed} data points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Date parsing or ordering error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Non-finite values detected in the input.
    #[error("missing values detected in data")]
    MissingValues,

    /// Computation error (date overflow, numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

/// Errors raised by insight providers.
///
/// These never reach API callers: the insight chain logs them and degrades
/// to a fallback message.
#[derive(Error, Debug)]
pub enum InsightError {
    /// The provider has no API key.
    #[error("{provider}: API key not configured")]
    NotConfigured { provider: String },

    /// Transport or decoding failure.
    #[error("{provider}: request failed: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} API error: {status}")]
    Status { provider: String, status: u16 },
}
