use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::kv::KeyValueBackend;
use crate::version::Version;

/// Default server address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8200";

/// Default key/value mount
pub const DEFAULT_MOUNT: &str = "secret";

/// Timeout for HTTP requests in milliseconds (30 seconds)
pub const REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Environment variable overriding [`ClientConfig::address`]
pub const ADDRESS_ENV: &str = "VAULT_ADDR";

/// Environment variable overriding [`ClientConfig::token`]
pub const TOKEN_ENV: &str = "VAULT_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Key/value client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub address: String,
    pub token: Option<String>,
    pub mount: String,
    pub backend: KeyValueBackend,
    /// Server version, when known; used to reject unsupported backends
    pub server_version: Option<Version>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            token: None,
            mount: DEFAULT_MOUNT.to_string(),
            backend: KeyValueBackend::default(),
            server_version: None,
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from an optional JSON file, then apply
    /// `VAULT_ADDR` and `VAULT_TOKEN` from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Ok(config.with_env(
            std::env::var(ADDRESS_ENV).ok(),
            std::env::var(TOKEN_ENV).ok(),
        ))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_env(mut self, address: Option<String>, token: Option<String>) -> Self {
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.address = address;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        self
    }
}

/// Returns the path to the data directory for vault-version.
/// Uses $XDG_DATA_HOME/vault-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/vault-version,
/// or ./vault-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("vault-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("vault-version")
}
