//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection, query or write errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Exercise not found for the given ID
    #[error("Exercise with ID {id} not found")]
    ExerciseNotFound { id: u64 },
    /// A session cannot start on a plan that resolved to zero steps
    #[error("Plan with ID {plan_id} has no steps to run")]
    EmptyPlan { plan_id: u64 },
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
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Personalised plan generation failed
    #[error("Plan generation failed: {message}")]
    Generation { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a join failure from the blocking pool.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        TrackerError::Configuration {
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
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
