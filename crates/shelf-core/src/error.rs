//! Error types for the recipe shelf library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all shelf operations.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Recipe not found in the loaded catalog or at the source
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: String },
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
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Catalog source failures. The message is shown to the user verbatim.
    #[error("{message}")]
    Fetch { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> ShelfError {
        ShelfError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> ShelfError {
        ShelfError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ShelfError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a fetch error carrying a displayable message.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
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
        self.map_err(|e| ShelfError::database(message).with_source(e))
    }
}

/// Extension trait turning transport errors into displayable fetch failures.
pub trait FetchResultExt<T> {
    /// Map any transport error to [`ShelfError::Fetch`], prefixed with `message`.
    fn fetch_context(self, message: &str) -> Result<T>;
}

impl<T> FetchResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn fetch_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ShelfError::fetch(format!("{message}: {e}")))
    }
}

/// Result type alias for shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;
