//! Error types for the Coinpane plugin.
//!
//! This module defines the centralized error type [`CoinpaneError`], the single
//! market fetch failure kind [`FetchFailure`], and a [`Result`] alias. All errors
//! are implemented with `thiserror`.

use thiserror::Error;

/// The one way a market data fetch can fail.
///
/// Transport errors, non-success HTTP statuses, and bodies that do not parse as
/// a coin list all collapse into this type. Callers never branch on the reason;
/// it exists for logging only.
///
/// # Examples
///
/// ```
/// use coinpane::domain::FetchFailure;
///
/// let failure = FetchFailure::status(429);
/// assert_eq!(failure.to_string(), "market fetch failed: HTTP status 429");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("market fetch failed: {reason}")]
pub struct FetchFailure {
    /// Human-readable description of what went wrong.
    pub reason: String,
}

impl FetchFailure {
    /// Creates a failure with a free-form reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Creates a failure for a response whose status is outside the 2xx range.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::new(format!("HTTP status {status}"))
    }

    /// Creates a failure for a body that is not a valid coin list.
    #[must_use]
    pub fn parse(error: &serde_json::Error) -> Self {
        Self::new(format!("malformed response: {error}"))
    }
}

/// The main error type for Coinpane operations.
///
/// # Examples
///
/// ```
/// use coinpane::domain::{CoinpaneError, FetchFailure};
///
/// let err: CoinpaneError = FetchFailure::status(500).into();
/// assert!(matches!(err, CoinpaneError::Fetch(_)));
/// ```
#[derive(Debug, Error)]
pub enum CoinpaneError {
    /// Fetching market data failed.
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Coinpane operations.
pub type Result<T> = std::result::Result<T, CoinpaneError>;
