use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studytime::cli::args::{Cli, Commands};
use studytime::cli::commands;
use studytime::config::{Config, Paths};
use studytime::logging::{init_logging, level_for_verbosity};
use studytime::study::SessionStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    config.general.color.apply();
    init_logging(level_for_verbosity(cli.verbose, &config.logging.level))?;

    let format = cli.output.unwrap_or(config.general.default_output);
    let store = SessionStore::open_default();

    let output = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu(&store)?,
        Commands::Start => commands::start(&store, format)?,
        Commands::Record(args) => commands::record(&store, args, format)?,
        Commands::History => commands::history(&store, format)?,
        Commands::Clear => commands::clear(&store, format)?,
        Commands::Config(args) => {
            commands::config(args.command, &config, &Paths::new()?, format)?
        }
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
