//! Error types for gt.
//!
//! Assertions never hand these back to the caller. They are rendered into a
//! failure message and forwarded to the reporter.

use thiserror::Error;

/// Errors raised while evaluating an assertion or loading configuration.
#[derive(Debug, Error)]
pub enum GtError {
    /// A regular expression given to a string assertion did not compile.
    #[error("invalid pattern, {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A file assertion could not access its file.
    #[error("{action} file, {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read or parsed.
    #[error("failed to load config: {path}: {message}")]
    Config { path: String, message: String },
}

/// Result type for gt operations.
pub type GtResult<T> = Result<T, GtError>;
