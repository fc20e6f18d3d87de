use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::constants::{DEFAULT_API_URL, DEFAULT_DATABASE_PATH, timeouts};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// SQLite file to seed. Parent directories are created on demand.
    pub database_path: String,

    pub log_level: String,

    /// Silence reqwest/hyper connection noise when the API is unreachable.
    #[serde(default)]
    pub suppress_connection_errors: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            log_level: "info".to_string(),
            suppress_connection_errors: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Applied to each request separately.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: timeouts::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("storeseed.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("storeseed").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".storeseed").join("config.toml"));
        }

        paths
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("API base URL must use http or https: {}", self.api.base_url);
        }

        if self.api.timeout_secs == 0 {
            anyhow::bail!("API timeout must be > 0");
        }

        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        Ok(())
    }
}
