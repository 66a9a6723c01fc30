//! Client configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every section and
//! field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::session::SESSION_STORAGE_KEY;

pub const DEFAULT_AUTH_URL: &str = "https://jobscout-auth-production.up.railway.app";
pub const DEFAULT_API_URL: &str = "https://jobscout-main.up.railway.app";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`ApiConfig::auth_url`].
pub const ENV_AUTH_URL: &str = "JOBSCOUT_AUTH_URL";
/// Environment variable overriding [`ApiConfig::api_url`].
pub const ENV_API_URL: &str = "JOBSCOUT_API_URL";

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl RootConfig {
    /// Applies `JOBSCOUT_*` overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_AUTH_URL).filter(|v| !v.trim().is_empty()) {
            self.api.auth_url = url;
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.api_url = url;
        }
    }
}

/// Base URLs of the backend services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Token issuance and verification service.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// Profile, registration and catalog service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl ApiConfig {
    /// `auth_url` without trailing slashes.
    pub fn auth_base(&self) -> &str {
        self.auth_url.trim_end_matches('/')
    }

    /// `api_url` without trailing slashes.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            api_url: default_api_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout applied by the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the current session is stored under.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
        }
    }
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_session_key() -> String {
    SESSION_STORAGE_KEY.to_string()
}
