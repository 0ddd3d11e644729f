//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the data root and includes:
//! - The catalog API base URL and request timeout
//! - The page size used for list fetches
//! - The quiet interval applied to interactive search input

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DexError, Result};
use crate::paths;

/// Environment variable overriding `api.url`.
pub const API_URL_ENV: &str = "DEX_API_URL";

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Keys accepted by `dex config get/set`.
pub const VALID_KEYS: &[&str] = &[
    "api.url",
    "api.timeout",
    "list.page_size",
    "search.debounce_ms",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote catalog settings
    #[serde(default, skip_serializing_if = "ApiConfig::is_default")]
    pub api: ApiConfig,

    /// List view settings
    #[serde(default, skip_serializing_if = "ListConfig::is_default")]
    pub list: ListConfig,

    /// Search input settings
    #[serde(default, skip_serializing_if = "SearchConfig::is_default")]
    pub search: SearchConfig,
}

/// Remote catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API (default: PokeAPI v2)
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_api_timeout")]
    pub timeout: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout: default_api_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// List view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Entries per page (default: 20)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    20
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl ListConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Search input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet interval before search text is committed (default: 300)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            DexError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.list.page_size == 0 {
            return Err(DexError::Config(
                "list.page_size must be greater than 0".to_string(),
            ));
        }
        if url::Url::parse(&self.api.url).is_err() {
            return Err(DexError::Config(format!(
                "api.url '{}' is not a valid URL",
                self.api.url
            )));
        }
        Ok(())
    }

    /// Base URL of the catalog API, from environment or config file.
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url.trim_end_matches('/').to_string();
        }

        self.api.url.trim_end_matches('/').to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }

    pub fn page_size(&self) -> u32 {
        self.list.page_size
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Read a value by dot-notation key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.url" => Ok(self.api.url.clone()),
            "api.timeout" => Ok(self.api.timeout.to_string()),
            "list.page_size" => Ok(self.list.page_size.to_string()),
            "search.debounce_ms" => Ok(self.search.debounce_ms.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value by dot-notation key, validating it first.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                url::Url::parse(value).map_err(|e| {
                    DexError::Config(format!("invalid URL '{value}' for api.url: {e}"))
                })?;
                self.api.url = value.to_string();
            }
            "api.timeout" => self.api.timeout = parse_number(key, value)?,
            "list.page_size" => {
                let size: u32 = parse_number(key, value)?;
                if size == 0 {
                    return Err(DexError::Config(
                        "list.page_size must be greater than 0".to_string(),
                    ));
                }
                self.list.page_size = size;
            }
            "search.debounce_ms" => self.search.debounce_ms = parse_number(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DexError::Config(format!("invalid value '{value}' for {key}: expected a number")))
}

fn unknown_key(key: &str) -> DexError {
    DexError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_config_serializes_empty() {
        let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml_ng::from_str("list:\n  page_size: 50\n").unwrap();
        assert_eq!(config.page_size(), 50);
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.search.debounce_ms, 300);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("list.page_size", "40").unwrap();
        config.set("search.debounce_ms", "150").unwrap();
        config.set("api.url", "http://localhost:8080/api/v2").unwrap();

        assert_eq!(config.get("list.page_size").unwrap(), "40");
        assert_eq!(config.get("search.debounce_ms").unwrap(), "150");
        assert_eq!(config.get("api.url").unwrap(), "http://localhost:8080/api/v2");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("list.page_size", "0").is_err());
        assert!(config.set("list.page_size", "lots").is_err());
        assert!(config.set("api.url", "not a url").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_lists_valid_keys() {
        let err = Config::default().get("api_url").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("api.url"), "got: {msg}");
        assert!(msg.contains("list.page_size"), "got: {msg}");
    }

    #[test]
    #[serial]
    fn test_api_url_env_override() {
        let config = Config::default();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(API_URL_ENV, "http://127.0.0.1:9000/v2/") };
        assert_eq!(config.api_url(), "http://127.0.0.1:9000/v2");
        unsafe { std::env::remove_var(API_URL_ENV) };
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    #[serial]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var(paths::DEX_ROOT_ENV, dir.path()) };

        let mut config = Config::default();
        config.set("list.page_size", "12").unwrap();
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.page_size(), 12);

        unsafe { std::env::remove_var(paths::DEX_ROOT_ENV) };
    }
}
