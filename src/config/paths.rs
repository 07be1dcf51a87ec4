//! Path resolution for studytime configuration.
//!
//! User preferences live in `~/.studytime/config.yaml`. The study log itself
//! is not placed here: it is always `registro_estudo.txt` in the working
//! directory (see [`crate::study::LOG_FILE_NAME`]).

use std::path::PathBuf;

use crate::error::StudyError;

/// Paths to studytime configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.studytime/`
    pub root: PathBuf,
    /// Config file: `~/.studytime/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyError> {
        let home = std::env::var("HOME")
            .map_err(|_| StudyError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".studytime")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), StudyError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                StudyError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-studytime");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".studytime"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.is_dir());

        // Second call is a no-op.
        paths.ensure_dirs().unwrap();
    }
}
