use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "studytime")]
#[command(about = "Track how much time you spend studying")]
#[command(long_about = "studytime - a study-time tracker for the terminal

Times study sessions, keeps them in registro_estudo.txt in the current
directory, and adds up how long you have studied.

QUICK START:
  studytime                 Open the interactive menu
  studytime start           Time one session (ENTER to start, ENTER to stop)
  studytime record 45m      Log a session you timed elsewhere
  studytime history         List sessions and the total
  studytime clear           Delete the history

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from ~/.studytime/config.yaml,
    /// or 'pretty' when that is not set.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive menu (default)
    ///
    /// 1. Start a study session
    /// 2. Show total study time
    /// 3. Clear study history
    /// 4. Quit
    #[command(alias = "m")]
    Menu,

    /// Time one study session interactively
    ///
    /// Press ENTER to start and ENTER again to stop. The session is then
    /// appended to the log.
    #[command(alias = "s")]
    Start,

    /// Log a session without timing it live
    ///
    /// # Examples
    ///
    ///   studytime record 45m
    ///   studytime record 1h30m --at "12/03/2024 09:15:02"
    ///   studytime record 90          Bare numbers are minutes
    #[command(alias = "r")]
    Record(RecordArgs),

    /// List recorded sessions and the total study time
    #[command(alias = "h", alias = "total")]
    History,

    /// Delete the whole study history
    Clear,

    /// Show or create the configuration file (~/.studytime/config.yaml)
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: studytime completions bash > ~/.bash_completion.d/studytime
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct RecordArgs {
    /// How long the session lasted (e.g. 45m, 1h30m, 90s, 25)
    pub duration: String,

    /// When the session started, as "DD/MM/YYYY HH:MM:SS" (default: now)
    #[arg(long, short = 'a')]
    pub at: Option<String>,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the configuration in effect
    Show,

    /// Write a configuration file with the default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
