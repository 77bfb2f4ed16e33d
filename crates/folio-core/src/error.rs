//! Error types for the report runner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all report operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A SQL file could not be read
    #[error("Failed to read SQL file '{path}': {source}")]
    SqlFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The SQL queries directory does not exist
    #[error("SQL queries directory does not exist: {path}")]
    QueriesDirMissing { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Chart rendering errors
    #[error("Chart rendering error: {message}")]
    Chart { message: String },
}

impl ReportError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates a new SQL file error for a path.
    pub fn sql_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SqlFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a new chart rendering error from any displayable failure.
    pub fn chart(message: impl Into<String>) -> Self {
        Self::Chart {
            message: message.into(),
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
        self.map_err(|e| ReportError::database_error(message, e))
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
