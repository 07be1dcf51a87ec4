//! The interactive menu.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::warn;

use super::session::run_session;
use crate::cli::args::OutputFormat;
use crate::cli::prompt::Prompter;
use crate::error::StudyError;
use crate::output::{format_cleared, format_history, format_recorded};
use crate::study::{SessionStore, StudySummary};

const MENU: [&str; 4] = [
    "1. Iniciar sessão de estudo",
    "2. Mostrar tempo total de estudo",
    "3. Limpar histórico de estudo",
    "4. Sair",
];

const FAREWELL: &str = "Saindo do monitor. Bom aprendizado!";

/// Run the menu until the user quits or input ends.
///
/// Failures of the log are reported and the menu carries on; only failures
/// of the terminal itself end the loop with an error.
///
/// # Errors
///
/// Returns `StudyError::Io` if the prompt streams fail.
pub fn run_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &SessionStore,
) -> Result<(), StudyError> {
    loop {
        prompter.say("")?;
        prompter.say(&"=== Monitor de Tempo de Estudo ===".bold().to_string())?;
        for entry in MENU {
            prompter.say(entry)?;
        }

        let Some(choice) = prompter.ask("Escolha uma opção:")? else {
            prompter.say(FAREWELL)?;
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => run_session(prompter, store).and_then(|session| match session {
                Some(session) => format_recorded(&session, OutputFormat::Pretty),
                None => Ok(String::new()),
            }),
            "2" => store.load_all().and_then(|sessions| {
                let summary = StudySummary::from_sessions(&sessions);
                format_history(&sessions, &summary, OutputFormat::Pretty)
            }),
            "3" => store
                .clear_all()
                .and_then(|outcome| format_cleared(outcome, OutputFormat::Pretty)),
            "4" => {
                prompter.say(FAREWELL)?;
                return Ok(());
            }
            _ => Ok("Opção inválida. Tente novamente.".yellow().to_string()),
        };

        match result {
            Ok(message) if message.is_empty() => {}
            Ok(message) => prompter.say(&message)?,
            Err(e) => {
                warn!(error = %e, "menu action failed");
                prompter.say(&format!("{}: {e}", "erro".red().bold()))?;
            }
        }
    }
}

/// Execute the menu command against the terminal.
///
/// # Errors
///
/// Returns `StudyError::Io` if the terminal fails.
pub fn menu(store: &SessionStore) -> Result<String, StudyError> {
    let mut prompter = Prompter::stdio();
    run_menu(&mut prompter, store)?;
    Ok(String::new())
}
