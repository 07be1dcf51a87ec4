//! Configuration commands.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::StudyError;

/// Execute config subcommands.
///
/// `config` is the configuration already loaded for this run.
///
/// # Errors
///
/// Returns `StudyError::Config` if the file cannot be written or already
/// exists without `--force`.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match cmd {
        ConfigCommands::Show => show_config(config, paths, format),
        ConfigCommands::Init { force } => init_config(paths, force),
    }
}

fn show_config(
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, StudyError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Pretty => {
            let source = if paths.config_file.is_file() {
                paths.config_file.display().to_string()
            } else {
                format!("{} (não encontrado, usando padrões)", paths.config_file.display())
            };
            Ok(format!(
                "{}\n{}",
                format!("# {source}").dimmed(),
                config.to_yaml()?.trim_end()
            ))
        }
    }
}

fn init_config(paths: &Paths, force: bool) -> Result<String, StudyError> {
    if paths.config_file.exists() && !force {
        return Err(StudyError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    Config::default().save(paths)?;
    info!(path = %paths.config_file.display(), "wrote default configuration");

    Ok(format!(
        "Configuração criada em {}",
        paths.config_file.display()
    ))
}
