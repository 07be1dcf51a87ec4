//! Commands that read or remove the study history.

use crate::cli::args::OutputFormat;
use crate::error::StudyError;
use crate::output::{format_cleared, format_history};
use crate::study::{SessionStore, StudySummary};

/// Execute the history command.
///
/// # Errors
///
/// Returns `StudyError::Io` if the log exists but cannot be read.
pub fn history(store: &SessionStore, format: OutputFormat) -> Result<String, StudyError> {
    let sessions = store.load_all()?;
    let summary = StudySummary::from_sessions(&sessions);
    format_history(&sessions, &summary, format)
}

/// Execute the clear command.
///
/// # Errors
///
/// Returns `StudyError::Io` if the log exists but cannot be deleted.
pub fn clear(store: &SessionStore, format: OutputFormat) -> Result<String, StudyError> {
    let outcome = store.clear_all()?;
    format_cleared(outcome, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NO_SESSIONS;
    use crate::study::Session;
    use tempfile::TempDir;

    #[test]
    fn test_history_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("registro.txt"));

        assert_eq!(history(&store, OutputFormat::Pretty).unwrap(), NO_SESSIONS);
    }

    #[test]
    fn test_history_totals_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("registro.txt"));
        store
            .append(&Session::new("01/01/2024 08:00:00", 1800.0).unwrap())
            .unwrap();
        store
            .append(&Session::new("01/01/2024 10:00:00", 5400.0).unwrap())
            .unwrap();

        let output = history(&store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["total"], "2 horas, 0 minutos e 0 segundos");
    }

    #[test]
    fn test_clear_reports_both_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("registro.txt"));
        store
            .append(&Session::new("01/01/2024 08:00:00", 60.0).unwrap())
            .unwrap();

        let first = clear(&store, OutputFormat::Json).unwrap();
        assert!(first.contains("\"cleared\""));

        let second = clear(&store, OutputFormat::Json).unwrap();
        assert!(second.contains("\"nothing_to_clear\""));
    }
}
