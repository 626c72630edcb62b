//! Error types for the wayfarer core library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A stored time-of-day that does not read as `H:MM AM/PM`
    #[error("Invalid time of day '{value}': {reason}")]
    InvalidTimeOfDay { value: String, reason: String },
    /// Failures talking to booking search, geocoding or attachment storage
    #[error("Collaborator error: {message}")]
    Collaborator { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a collaborator error from a message and the underlying cause.
    pub fn collaborator(message: &str, cause: impl fmt::Display) -> Self {
        Self::Collaborator {
            message: format!("{message}: {cause}"),
        }
    }

    /// Wraps a join failure from a blocking task.
    pub(crate) fn task_join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Extension trait for Results coming back from HTTP collaborators.
pub trait CollaboratorResultExt<T> {
    /// Map request or decode failures with a message.
    fn collaborator_context(self, message: &str) -> Result<T>;
}

impl<T> CollaboratorResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn collaborator_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::collaborator(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("start_date").with_reason("expected YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'start_date': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load trip").unwrap_err();

        match err {
            PlannerError::Database { message, source } => {
                assert_eq!(message, "Failed to load trip");
                assert!(matches!(source, rusqlite::Error::QueryReturnedNoRows));
            }
            other => panic!("expected database error, got {other}"),
        }
    }

    #[test]
    fn test_trip_not_found_message() {
        let err = PlannerError::TripNotFound { id: 7 };
        assert_eq!(err.to_string(), "Trip with ID 7 not found");
    }
}
