//! Configuration commands for managing dex settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV, Config, VALID_KEYS};
use crate::error::{DexError, Result};

/// Reject underscore keys with a dot-notation suggestion.
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(DexError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }
    Ok(key)
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let env_override = std::env::var(API_URL_ENV).ok().filter(|v| !v.is_empty());

    let json_output = json!({
        "api": {
            "url": config.api.url,
            "effective_url": config.api_url(),
            "timeout": config.api.timeout,
        },
        "list": {
            "page_size": config.list.page_size,
        },
        "search": {
            "debounce_ms": config.search.debounce_ms,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  url: {}\n", config.api.url));
    if env_override.is_some() {
        text_output.push_str(&format!(
            "  {}\n",
            format!("(overridden by {API_URL_ENV}: {})", config.api_url()).yellow()
        ));
    }
    text_output.push_str(&format!("  timeout: {}s\n\n", config.api.timeout));

    text_output.push_str(&format!("{}:\n", "list".cyan()));
    text_output.push_str(&format!("  page_size: {}\n\n", config.list.page_size));

    text_output.push_str(&format!("{}:\n", "search".cyan()));
    text_output.push_str(&format!("  debounce_ms: {}\n\n", config.search.debounce_ms));

    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;
    let value = Config::load()?.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": config.get(key)?,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(json)
}
