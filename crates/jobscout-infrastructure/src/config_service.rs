//! Configuration service implementation.
//!
//! Loads the root configuration from `<config_dir>/config.toml`, applies
//! `JOBSCOUT_*` environment overrides and caches the result.

use std::sync::{Arc, RwLock};

use jobscout_core::config::RootConfig;
use jobscout_core::error::Result;

use crate::paths::JobScoutPaths;
use crate::storage::AtomicFile;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: JobScoutPaths,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: JobScoutPaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file yields the defaults and writes them out. An unreadable
    /// or invalid file is logged and also yields the defaults.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let mut loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            RootConfig::default()
        });
        loaded.apply_env_overrides(|name| std::env::var(name).ok());

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        let config_path = self
            .paths
            .config_file()
            .map_err(|e| jobscout_core::JobScoutError::config(e.to_string()))?;
        let file = AtomicFile::new(config_path);

        match file.load()? {
            Some(content) => Ok(toml::from_str(&content)?),
            None => {
                let default_config = RootConfig::default();
                let content = toml::to_string_pretty(&default_config)?;
                if let Err(e) = file.save(&content) {
                    tracing::warn!(
                        "Failed to write default config to {}: {}",
                        file.path().display(),
                        e
                    );
                }
                Ok(default_config)
            }
        }
    }
}
