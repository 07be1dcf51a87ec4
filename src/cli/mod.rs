//! Command-line interface: argument parsing, prompts and commands.

pub mod args;
pub mod commands;
pub mod prompt;
