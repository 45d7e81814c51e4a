//! Error handling for Shotcraft
//!
//! Provides the shared error type used by the workspace crates:
//! - I/O failures (export sinks, file loading)
//! - Serialization failures (layout JSON, settings)
//! - Free-form errors raised at crate boundaries
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Shotcraft
///
/// A unified error type for the fallible edges of the system. Editing
/// operations on a document are total and never produce one of these.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A value failed validation
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a validation error for a named field
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
