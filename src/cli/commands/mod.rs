//! Command implementations for studytime.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod history;
mod menu;
mod session;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use config::config;
pub use history::{clear, history};
pub use menu::{menu, run_menu};
pub use session::{record, run_session, start};
