//! Error types for studytime.

use thiserror::Error;

/// Errors surfaced by the study log and the command layer.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Filesystem failure while opening, writing or deleting the session log.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session that would violate the log's invariants.
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// User input the command layer could not interpret.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be resolved, read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failure while rendering output.
    ///
    /// YAML problems with the config file are reported as `Config`.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for StudyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl StudyError {
    /// Whether this error came from the filesystem.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
