//! Unified path management for JobScout files.
//!
//! Paths are resolved via AppPaths from the version-migrate crate so every
//! platform gets its conventional config location.

use std::path::{Path, PathBuf};
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for JobScout.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/jobscout/          # Config directory (AppPaths default)
/// ├── config.toml              # Backend URLs, HTTP and storage settings
/// ├── storage/                 # Durable key/value storage
/// │   └── currentUser.json     # The persisted session
/// └── logs/                    # Application logs
///     └── jobscout.log.YYYY-MM-DD
/// ```
///
/// A custom base directory replaces `~/.config/jobscout/` entirely; used by
/// tests and by the CLI's `--config-dir` flag.
#[derive(Debug, Clone, Default)]
pub struct JobScoutPaths {
    base: Option<PathBuf>,
}

impl JobScoutPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    fn app_paths() -> AppPaths {
        AppPaths::new("jobscout")
    }

    /// Returns the JobScout configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => Self::app_paths()
                .config_dir()
                .map_err(|_| PathError::HomeDirNotFound),
        }
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the directory backing the durable key/value storage.
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("storage"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_base_layout() {
        let base = PathBuf::from("/tmp/jobscout-test");
        let paths = JobScoutPaths::new(Some(&base));

        assert_eq!(paths.config_dir().unwrap(), base);
        assert_eq!(paths.config_file().unwrap(), base.join("config.toml"));
        assert_eq!(paths.storage_dir().unwrap(), base.join("storage"));
        assert_eq!(paths.logs_dir().unwrap(), base.join("logs"));
    }

    #[test]
    fn test_default_config_dir() {
        let config_dir = JobScoutPaths::default().config_dir().unwrap();
        // AppPaths returns platform-specific config directory with "jobscout" appended
        assert!(config_dir.ends_with("jobscout"));
    }
}
