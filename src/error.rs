//! Error types for the Wordsmith library.
//!
//! All errors are represented by the [`WordsmithError`] enum. Argument
//! validation failures use four variants ([`ErrorKind::InvalidType`],
//! [`ErrorKind::EmptyValue`], [`ErrorKind::TooLong`] and
//! [`ErrorKind::InvalidPattern`]); the remaining variants belong to the
//! command line surface (I/O, JSON).
//!
//! # Examples
//!
//! ```
//! use wordsmith::error::{ErrorKind, Result, WordsmithError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsmithError::empty_value("Substring"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::EmptyValue),
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for Wordsmith operations.
#[derive(Error, Debug)]
pub enum WordsmithError {
    /// An argument is not of the expected type or shape.
    #[error("{param} must be {expected}.")]
    InvalidType { param: String, expected: String },

    /// A required string argument is empty or whitespace-only.
    #[error("{param} must not be empty.")]
    EmptyValue { param: String },

    /// A string argument exceeds its maximum length (in characters).
    #[error("{param} must be at most {max} characters.")]
    TooLong { param: String, max: usize },

    /// A regex argument is empty or fails to compile.
    #[error("{param} is not a valid regular expression: {reason}")]
    InvalidPattern { param: String, reason: String },

    /// I/O errors (reading input files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordsmithError.
pub type Result<T> = std::result::Result<T, WordsmithError>;

/// Fieldless classification of a [`WordsmithError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidType,
    EmptyValue,
    TooLong,
    InvalidPattern,
    Io,
    Json,
    Other,
}

impl WordsmithError {
    /// Create a new invalid type error.
    pub fn invalid_type<P: Into<String>, E: Into<String>>(param: P, expected: E) -> Self {
        WordsmithError::InvalidType {
            param: param.into(),
            expected: expected.into(),
        }
    }

    /// Create a new empty value error.
    pub fn empty_value<P: Into<String>>(param: P) -> Self {
        WordsmithError::EmptyValue {
            param: param.into(),
        }
    }

    /// Create a new too long error.
    pub fn too_long<P: Into<String>>(param: P, max: usize) -> Self {
        WordsmithError::TooLong {
            param: param.into(),
            max,
        }
    }

    /// Create a new invalid pattern error.
    pub fn invalid_pattern<P: Into<String>, R: Into<String>>(param: P, reason: R) -> Self {
        WordsmithError::InvalidPattern {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Other(msg.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordsmithError::InvalidType { .. } => ErrorKind::InvalidType,
            WordsmithError::EmptyValue { .. } => ErrorKind::EmptyValue,
            WordsmithError::TooLong { .. } => ErrorKind::TooLong,
            WordsmithError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            WordsmithError::Io(_) => ErrorKind::Io,
            WordsmithError::Json(_) => ErrorKind::Json,
            WordsmithError::Other(_) | WordsmithError::Anyhow(_) => ErrorKind::Other,
        }
    }

    /// Whether this error reports a bad argument rather than an environment failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidType
                | ErrorKind::EmptyValue
                | ErrorKind::TooLong
                | ErrorKind::InvalidPattern
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordsmithError::empty_value("Text");
        assert_eq!(error.to_string(), "Text must not be empty.");

        let error = WordsmithError::too_long("Substring", 1000);
        assert_eq!(error.to_string(), "Substring must be at most 1000 characters.");

        let error = WordsmithError::invalid_type("minLength", "an integer greater than 0");
        assert_eq!(
            error.to_string(),
            "minLength must be an integer greater than 0."
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            WordsmithError::invalid_pattern("pattern", "empty").kind(),
            ErrorKind::InvalidPattern
        );
        assert!(WordsmithError::empty_value("Text").is_validation());
        assert!(!WordsmithError::other("boom").is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordsmithError::from(io_error);

        match error {
            WordsmithError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(!WordsmithError::from(io::Error::other("x")).is_validation());
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = WordsmithError::from(anyhow::anyhow!("missing flag"));
        assert_eq!(error.kind(), ErrorKind::Other);
        assert_eq!(error.to_string(), "Anyhow error: missing flag");
    }
}
