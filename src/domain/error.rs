//! Error types for the Quoteboard plugin.
//!
//! [`FetchError`] is the single "fetch failed" kind surfaced to the UI. Its
//! variants only exist so logs can tell a bad status from a bad payload; the
//! rendering layer treats all of them the same. [`QuoteboardError`] covers the
//! remaining plugin-level failures.

use thiserror::Error;

/// Failure of a quote fetch.
///
/// Caught at the loader boundary and never propagated further than the
/// loader's error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The host returned a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not a quote payload.
    #[error("could not decode quote payload: {0}")]
    Decode(String),

    /// The response was a JSON array with no quotes in it.
    #[error("quote list was empty")]
    EmptyList,
}

/// The main error type for Quoteboard plugin operations.
///
/// # Examples
///
/// ```
/// use quoteboard::QuoteboardError;
///
/// fn validate() -> Result<(), QuoteboardError> {
///     Err(QuoteboardError::Config("quote_url is empty".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum QuoteboardError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A quote fetch failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// A specialized `Result` type for Quoteboard operations.
pub type Result<T> = std::result::Result<T, QuoteboardError>;
