//! Error types for the organizer library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all organizer operations.
#[derive(Error, Debug)]
pub enum OrganizerError {
    /// Transport or service-level failure calling the AI boundary
    #[error("AI service error: {message}")]
    Service { message: String },
    /// Every JSON-repair strategy was exhausted on an AI response
    #[error("The model produced a response in an invalid format")]
    MalformedResponse,
    /// The AI service returned an empty result (zero days, zero questions)
    #[error("The model returned no {what}")]
    EmptyResult { what: &'static str },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: Uuid },
    /// Day not found for the given day number
    #[error("Day {number} not found in the active plan")]
    DayNotFound { number: u32 },
    /// An operation required an active plan but none is selected
    #[error("No active plan; generate or select one first")]
    NoActivePlan,
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
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl OrganizerError {
    /// Creates a service error from any displayable transport failure.
    pub fn service(message: impl fmt::Display) -> Self {
        OrganizerError::Service {
            message: message.to_string(),
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        OrganizerError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to OrganizerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| OrganizerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Extension trait for file system Results carrying the offending path.
pub trait FsResultExt<T> {
    /// Map I/O errors into `OrganizerError::FileSystem` for a path.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| OrganizerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for organizer operations
pub type Result<T> = std::result::Result<T, OrganizerError>;
