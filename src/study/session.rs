//! Study session records.
//!
//! A session is one completed study interval: the local wall-clock time it
//! started at and how many seconds it lasted.

use std::time::Instant;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;

use crate::error::StudyError;

/// `strftime` pattern for `started_at`: `DD/MM/YYYY HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Separator between the two fields of a log line.
pub const FIELD_DELIMITER: &str = " | ";

/// A completed study session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    started_at: String,
    duration_seconds: f64,
}

impl Session {
    /// Create a session from an already formatted start time and a duration.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidSession` if the duration is negative or not
    /// finite, or if `started_at` is empty, contains a line break or the field
    /// delimiter, or would otherwise not read back from the log unchanged.
    pub fn new(started_at: impl Into<String>, duration_seconds: f64) -> Result<Self, StudyError> {
        let started_at = started_at.into();

        if !duration_seconds.is_finite() {
            return Err(StudyError::InvalidSession(format!(
                "duration must be a finite number of seconds, got {duration_seconds}"
            )));
        }
        if duration_seconds < 0.0 {
            return Err(StudyError::InvalidSession(format!(
                "duration cannot be negative, got {duration_seconds}"
            )));
        }
        if started_at.contains(['\n', '\r']) || started_at.contains(FIELD_DELIMITER) {
            return Err(StudyError::InvalidSession(format!(
                "start time {started_at:?} cannot contain a line break or \"{FIELD_DELIMITER}\""
            )));
        }
        if started_at.is_empty() {
            return Err(StudyError::InvalidSession("start time cannot be empty".to_string()));
        }
        // Lines are trimmed on read, so leading blanks would not survive.
        if started_at.starts_with(char::is_whitespace) {
            return Err(StudyError::InvalidSession(format!(
                "start time {started_at:?} cannot begin with whitespace"
            )));
        }
        // A trailing " |" merges with the delimiter and splits early on read.
        if started_at.ends_with(" |") {
            return Err(StudyError::InvalidSession(format!(
                "start time {started_at:?} cannot end with \" |\""
            )));
        }

        Ok(Self {
            started_at,
            duration_seconds,
        })
    }

    /// The formatted local start time.
    #[must_use]
    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    /// Seconds spent studying.
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Render the session as one log line, without the trailing newline.
    ///
    /// `{:?}` gives the shortest text that parses back to the same `f64` and
    /// keeps the `.0` on whole numbers (`1800.0`).
    #[must_use]
    pub fn to_log_line(&self) -> String {
        format!(
            "{}{FIELD_DELIMITER}{:?}",
            self.started_at, self.duration_seconds
        )
    }
}

/// Format a local time the way `started_at` is stored.
#[must_use]
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Check that a user-supplied start time matches `DD/MM/YYYY HH:MM:SS`.
///
/// Returns the input trimmed, ready to be stored.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` if the text is not a valid date-time in
/// that format.
pub fn parse_timestamp(input: &str) -> Result<String, StudyError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|e| {
        StudyError::InvalidInput(format!(
            "'{trimmed}' is not a DD/MM/YYYY HH:MM:SS timestamp: {e}"
        ))
    })?;
    Ok(trimmed.to_string())
}

/// Measures one live study session.
///
/// The start timestamp comes from the wall clock; the duration comes from a
/// monotonic clock so clock adjustments mid-session cannot make it negative.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started_at: String,
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: format_timestamp(Local::now()),
            started: Instant::now(),
        }
    }

    /// The formatted start time.
    #[must_use]
    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    /// Seconds elapsed since `start`.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Stop timing and produce the finished session.
    ///
    /// # Errors
    ///
    /// Only fails if the session invariants are violated, which a wall-clock
    /// timestamp and a monotonic duration never do.
    pub fn stop(self) -> Result<Session, StudyError> {
        let elapsed = self.elapsed_seconds();
        Session::new(self.started_at, elapsed)
    }
}
