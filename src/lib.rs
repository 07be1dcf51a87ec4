//! studytime - a study-time tracker for the terminal
//!
//! Study sessions are appended to a plain-text log, one line per session,
//! and totalled on demand. The [`study`] module holds the log and the time
//! formatting; [`cli`] is the terminal front end built on top of it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod study;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyError;
pub use study::{format_duration, ClearOutcome, Session, SessionStore};
