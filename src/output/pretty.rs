use colored::Colorize;

use crate::study::{format_duration, ClearOutcome, Session, StudySummary};

/// Message shown when the log holds no sessions.
pub const NO_SESSIONS: &str = "Nenhuma sessão de estudo registrada.";

/// Format the session history and total as a numbered list
pub fn format_history_pretty(sessions: &[Session], summary: &StudySummary) -> String {
    if sessions.is_empty() {
        return NO_SESSIONS.to_string();
    }

    let mut output = Vec::new();
    output.push("Sessões de estudo:".bold().to_string());

    for (i, session) in sessions.iter().enumerate() {
        output.push(format!(
            " Sessão {}: {} - {}",
            i + 1,
            session.started_at(),
            format_duration(session.duration_seconds())
        ));
    }

    output.push(String::new());
    output.push(format!(
        "Tempo total de estudo: {}",
        summary.format_total().green().bold()
    ));

    output.join("\n")
}

/// Format a session that was just recorded
pub fn format_recorded_pretty(session: &Session) -> String {
    format!(
        "Sessão finalizada. Você estudou por {}.",
        format_duration(session.duration_seconds())
    )
}

/// Format the outcome of clearing the log
pub fn format_cleared_pretty(outcome: ClearOutcome) -> String {
    match outcome {
        ClearOutcome::Cleared => "Histórico de tempo de estudo apagado com sucesso!"
            .green()
            .to_string(),
        ClearOutcome::NothingToClear => "Não há histórico para apagar.".yellow().to_string(),
    }
}
