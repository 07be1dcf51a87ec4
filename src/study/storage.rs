//! Session log storage.
//!
//! Sessions are persisted as lines of plain text, one per session, oldest
//! first:
//!
//! ```text
//! 12/03/2024 09:15:02 | 1800.0
//! 12/03/2024 14:00:41 | 2712.5033
//! ```
//!
//! The file is append-only. Reading tolerates lines that do not parse (a torn
//! write, a manual edit) by leaving them out of the result.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::session::{Session, FIELD_DELIMITER};
use crate::error::StudyError;

/// Name of the session log, relative to the working directory.
pub const LOG_FILE_NAME: &str = "registro_estudo.txt";

/// Why a log line was not read as a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line did not split into exactly two fields on `" | "`.
    #[error("expected 2 fields separated by \" | \", found {0}")]
    FieldCount(usize),

    /// The duration field is not a decimal number.
    #[error("duration {0:?} is not a number")]
    InvalidDuration(String),

    /// The duration parsed but is below zero.
    #[error("duration {0:?} is negative")]
    NegativeDuration(String),

    /// The duration parsed to NaN or infinity.
    #[error("duration {0:?} is not finite")]
    NonFiniteDuration(String),

    /// The start time holds a character a session cannot store.
    #[error("start time {0:?} cannot be stored")]
    InvalidStartTime(String),

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// One line of the log together with how it parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The parsed session, or why the line was skipped.
    pub result: Result<Session, LineError>,
}

/// Result of clearing the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearOutcome {
    /// The log existed and was removed.
    Cleared,
    /// There was no log to remove.
    NothingToClear,
}

/// Persistent, append-only log of study sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given log file.
    ///
    /// Nothing is touched on disk until the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over [`LOG_FILE_NAME`] in the working directory.
    #[must_use]
    pub fn open_default() -> Self {
        Self::new(LOG_FILE_NAME)
    }

    /// Path of the backing log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load every well-formed session, in the order they were appended.
    ///
    /// A missing log is an empty history. Malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Io` if the log exists but cannot be read.
    pub fn load_all(&self) -> Result<Vec<Session>, StudyError> {
        let sessions: Vec<Session> = self
            .scan()?
            .into_iter()
            .filter_map(|line| line.result.ok())
            .collect();

        debug!(
            path = %self.path.display(),
            sessions = sessions.len(),
            "loaded study log"
        );
        Ok(sessions)
    }

    /// Parse every line of the log, keeping the failures alongside the
    /// sessions.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Io` if the log exists but cannot be read.
    pub fn scan(&self) -> Result<Vec<ScannedLine>, StudyError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StudyError::Io(e)),
        };

        let mut lines = Vec::new();
        if bytes.is_empty() {
            return Ok(lines);
        }
        // A trailing newline does not start another record.
        let body = bytes.strip_suffix(b"\n").unwrap_or(&bytes);

        for (index, raw) in body.split(|b| *b == b'\n').enumerate() {
            let result = std::str::from_utf8(raw)
                .map_err(|_| LineError::InvalidUtf8)
                .and_then(parse_line);

            if let Err(ref reason) = result {
                debug!(line = index + 1, %reason, "skipping malformed study log line");
            }

            lines.push(ScannedLine {
                line_number: index + 1,
                result,
            });
        }

        Ok(lines)
    }

    /// Append one session to the end of the log, creating the file if needed.
    ///
    /// If the last line of an existing log is unterminated, it is closed
    /// first so the new record starts on a line of its own.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Io` if the log cannot be opened or written.
    pub fn append(&self, session: &Session) -> Result<(), StudyError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        let mut line = String::new();
        if has_unterminated_line(&mut file)? {
            debug!(path = %self.path.display(), "terminating last study log line");
            line.push('\n');
        }
        line.push_str(&session.to_log_line());
        line.push('\n');
        file.write_all(line.as_bytes())?;

        info!(
            path = %self.path.display(),
            started_at = session.started_at(),
            duration_seconds = session.duration_seconds(),
            "recorded study session"
        );
        Ok(())
    }

    /// Remove the whole log.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Io` if the log exists but cannot be deleted.
    pub fn clear_all(&self) -> Result<ClearOutcome, StudyError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared study log");
                Ok(ClearOutcome::Cleared)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no study log to clear");
                Ok(ClearOutcome::NothingToClear)
            }
            Err(e) => Err(StudyError::Io(e)),
        }
    }
}

/// Whether the file is non-empty and does not end with a newline.
fn has_unterminated_line(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0_u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Parse one log line into a session.
///
/// The line is trimmed first, so `\r\n` endings and stray indentation are
/// accepted.
///
/// # Errors
///
/// Returns the [`LineError`] describing why the line is not a session.
pub fn parse_line(line: &str) -> Result<Session, LineError> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    let [started_at, duration] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let duration = duration.trim();
    let seconds: f64 = duration
        .parse()
        .map_err(|_| LineError::InvalidDuration(duration.to_string()))?;

    if !seconds.is_finite() {
        return Err(LineError::NonFiniteDuration(duration.to_string()));
    }
    if seconds < 0.0 {
        return Err(LineError::NegativeDuration(duration.to_string()));
    }

    Session::new(*started_at, seconds)
        .map_err(|_| LineError::InvalidStartTime((*started_at).to_string()))
}
