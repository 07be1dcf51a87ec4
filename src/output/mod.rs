//! Output formatting for studytime.
//!
//! This module renders study data either for people or for scripts.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StudyError;
use crate::study::{ClearOutcome, Session, StudySummary};

pub use json::*;
pub use pretty::*;

/// Format the session history based on output format
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_history(
    sessions: &[Session],
    summary: &StudySummary,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, summary)),
        OutputFormat::Json => format_history_json(sessions, summary),
    }
}

/// Format a recorded session based on output format
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_recorded(session: &Session, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_recorded_pretty(session)),
        OutputFormat::Json => format_recorded_json(session),
    }
}

/// Format a clear outcome based on output format
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_cleared(outcome: ClearOutcome, format: OutputFormat) -> Result<String, StudyError> {
    match format {
        OutputFormat::Pretty => Ok(format_cleared_pretty(outcome)),
        OutputFormat::Json => format_cleared_json(outcome),
    }
}
