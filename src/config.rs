//! Configuration loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default API base when neither config nor CLI provides one.
pub const DEFAULT_BASE_URL: &str = "https://example.com/wp-json/wp/v2";

/// The WordPress REST API caps `per_page` at 100.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the WordPress REST API, e.g.
    /// `https://example.com/wp-json/wp/v2`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Media items requested per page (1..=100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_per_page() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::config(format!("failed to parse config file {path:?}: {e}")))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return the default config.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./wpmedia.toml",
        "~/.config/wpmedia/config.toml",
        "/etc/wpmedia/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.api.base_url.trim().is_empty() {
        return Err(Error::config("api.base_url cannot be empty"));
    }

    if config.api.per_page == 0 || config.api.per_page > MAX_PER_PAGE {
        return Err(Error::config(format!(
            "api.per_page must be between 1 and {}, got {}",
            MAX_PER_PAGE, config.api.per_page
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(Error::config("api.timeout_secs cannot be 0"));
    }

    Ok(())
}
