//! Commands that add sessions to the log.

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::debug;

use crate::cli::args::{OutputFormat, RecordArgs};
use crate::cli::prompt::Prompter;
use crate::error::StudyError;
use crate::output::format_recorded;
use crate::study::{
    format_timestamp, parse_duration, parse_timestamp, Session, SessionStore, Stopwatch,
};

/// Time one session with two ENTER presses, then append it.
///
/// Returns `None` if input ended before the session started. Input ending
/// while the session runs stops it there, so the time is still recorded.
///
/// # Errors
///
/// Returns an error if the prompts cannot be written or the log cannot be
/// appended to.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &SessionStore,
) -> Result<Option<Session>, StudyError> {
    if !prompter.wait_for_enter("Pressione ENTER para iniciar a sessão de estudo...")? {
        return Ok(None);
    }

    let stopwatch = Stopwatch::start();
    prompter.say(&format!(
        "Sessão iniciada em {}. Bom estudo!",
        stopwatch.started_at()
    ))?;

    if !prompter.wait_for_enter("Pressione ENTER para finalizar a sessão de estudo...")? {
        debug!("input closed while a session was running; stopping it");
    }

    let session = stopwatch.stop()?;
    store.append(&session)?;
    Ok(Some(session))
}

/// Execute the start command against the terminal.
///
/// # Errors
///
/// Returns an error if the terminal or the log fails.
pub fn start(store: &SessionStore, format: OutputFormat) -> Result<String, StudyError> {
    let mut prompter = Prompter::stdio();

    match run_session(&mut prompter, store)? {
        Some(session) => format_recorded(&session, format),
        None => Ok(String::new()),
    }
}

/// Execute the record command.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` for an unreadable duration or start
/// time, or `StudyError::Io` if the log cannot be appended to.
pub fn record(
    store: &SessionStore,
    args: RecordArgs,
    format: OutputFormat,
) -> Result<String, StudyError> {
    let duration = parse_duration(&args.duration).ok_or_else(|| {
        StudyError::InvalidInput(format!(
            "Invalid duration '{}'. Use e.g. 45m, 1h30m, 90s or a number of minutes.",
            args.duration
        ))
    })?;

    let started_at = match args.at {
        Some(at) => parse_timestamp(&at)?,
        None => format_timestamp(Local::now()),
    };

    #[allow(clippy::cast_precision_loss)]
    let session = Session::new(started_at, duration.num_seconds() as f64)?;
    store.append(&session)?;

    format_recorded(&session, format)
}
