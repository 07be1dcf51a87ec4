//! Configuration management for studytime.
//!
//! This module handles loading and saving configuration from `~/.studytime/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig};
