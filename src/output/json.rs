//! JSON output formatting for studytime.

use serde_json::json;

use crate::error::StudyError;
use crate::study::{format_duration, ClearOutcome, Session, StudySummary};

/// Format the session history and its totals as JSON.
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_history_json(
    sessions: &[Session],
    summary: &StudySummary,
) -> Result<String, StudyError> {
    let items: Vec<_> = sessions
        .iter()
        .map(|s| {
            json!({
                "started_at": s.started_at(),
                "duration_seconds": s.duration_seconds(),
                "formatted": format_duration(s.duration_seconds()),
            })
        })
        .collect();

    let output = json!({
        "count": summary.count,
        "total_seconds": summary.total_seconds,
        "total": summary.format_total(),
        "average_seconds": summary.average_seconds,
        "longest_seconds": summary.longest_seconds,
        "sessions": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a freshly recorded session as JSON.
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_recorded_json(session: &Session) -> Result<String, StudyError> {
    let output = json!({
        "started_at": session.started_at(),
        "duration_seconds": session.duration_seconds(),
        "formatted": format_duration(session.duration_seconds()),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the outcome of clearing the log as JSON.
///
/// # Errors
///
/// Returns `StudyError::Parse` if JSON serialization fails.
pub fn format_cleared_json(outcome: ClearOutcome) -> Result<String, StudyError> {
    Ok(serde_json::to_string_pretty(&json!({ "outcome": outcome }))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_json() {
        let sessions = vec![
            Session::new("01/01/2024 08:00:00", 1800.0).unwrap(),
            Session::new("01/01/2024 10:00:00", 5400.0).unwrap(),
        ];
        let summary = StudySummary::from_sessions(&sessions);

        let output = format_history_json(&sessions, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["total_seconds"], 7200.0);
        assert_eq!(value["total"], "2 horas, 0 minutos e 0 segundos");
        assert_eq!(value["sessions"][1]["started_at"], "01/01/2024 10:00:00");
        assert_eq!(
            value["sessions"][0]["formatted"],
            "0 horas, 30 minutos e 0 segundos"
        );
    }

    #[test]
    fn test_format_cleared_json() {
        let cleared: serde_json::Value =
            serde_json::from_str(&format_cleared_json(ClearOutcome::Cleared).unwrap()).unwrap();
        assert_eq!(cleared["outcome"], "cleared");

        let nothing: serde_json::Value =
            serde_json::from_str(&format_cleared_json(ClearOutcome::NothingToClear).unwrap())
                .unwrap();
        assert_eq!(nothing["outcome"], "nothing_to_clear");
    }
}
