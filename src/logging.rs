//! Diagnostic logging initialisation.
//!
//! Events go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` overrides the level chosen from `-v` flags or the config file.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::StudyError;

/// Pick the filter directive for a `-v` count, falling back to `configured`.
#[must_use]
pub fn level_for_verbosity(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns `StudyError::Config` if `level` is not a valid filter directive or
/// a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<(), StudyError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| StudyError::Config(format!("Invalid log level '{level}': {e}")))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| StudyError::Config(format!("Failed to initialise logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0, "warn"), "warn");
        assert_eq!(level_for_verbosity(0, "studytime=debug"), "studytime=debug");
        assert_eq!(level_for_verbosity(1, "warn"), "info");
        assert_eq!(level_for_verbosity(2, "warn"), "debug");
        assert_eq!(level_for_verbosity(5, "warn"), "trace");
    }
}
