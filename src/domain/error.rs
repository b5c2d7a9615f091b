//! Error types for bookgrid.
//!
//! This module defines the centralized error type [`BookgridError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for bookgrid operations.
///
/// This enum consolidates all error conditions that can occur during execution,
/// from the search fetch to theme loading. The first three variants form the
/// fetch failure taxonomy: transport failure, non-2xx status, and malformed
/// response body. All three collapse to an empty book list at the application
/// layer; they are distinguished here for diagnostics only.
///
/// # Examples
///
/// ```
/// use bookgrid::domain::BookgridError;
///
/// fn reject_status() -> Result<(), BookgridError> {
///     Err(BookgridError::Response { status: 404 })
/// }
/// ```
#[derive(Debug, Error)]
pub enum BookgridError {
    /// Transport or connection failure while talking to the search endpoint.
    ///
    /// Covers DNS failures, refused connections, TLS errors, and timeouts.
    /// The string contains a description of what went wrong.
    #[error("Network error: {0}")]
    Network(String),

    /// The search endpoint answered with a non-2xx HTTP status.
    ///
    /// No partial data is kept; the response body is discarded.
    #[error("Unexpected HTTP status: {status}")]
    Response {
        /// The HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The response body could not be parsed as the expected JSON envelope.
    ///
    /// The string contains the deserialization error description.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A cover image failed to load for one cell.
    ///
    /// Per-cell and non-fatal: recorded for diagnostics, never surfaced to
    /// the user, and never blocks the text fields of the affected cell.
    #[error("Image load failed for position {position}: {reason}")]
    ImageLoad {
        /// Grid position whose cover failed to load.
        position: usize,
        /// Description of the failure.
        reason: String,
    },

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a built-in or custom TOML theme cannot be parsed.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for bookgrid operations.
///
/// This is a type alias for `std::result::Result<T, BookgridError>` that
/// simplifies function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use bookgrid::domain::Result;
///
/// fn noop() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BookgridError>;
