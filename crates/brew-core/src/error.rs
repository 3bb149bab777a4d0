//! Error types for the brew library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible brew operation.
///
/// The schedule model and the timer engine are deliberately infallible for
/// missing step ids and exhausted schedules; those are no-ops or normal
/// transitions, never errors. What remains are problems at the edges: user
/// input that is not a number, files that cannot be read, and settings out of
/// range.
#[derive(Error, Debug)]
pub enum BrewError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BrewError {
        BrewError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BrewError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an IO error with the path it happened at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for brew operations
pub type Result<T> = std::result::Result<T, BrewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = BrewError::invalid_input("water").with_reason("not a number: abc");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'water': not a number: abc"
        );
    }

    #[test]
    fn test_file_system_message_names_path() {
        let err = BrewError::file_system(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.json"));
        assert!(message.contains("gone"));
    }
}
