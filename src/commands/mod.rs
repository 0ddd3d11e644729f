//! Command implementations for the `dex` binary.
//!
//! Every command either prints human-readable text or, with `--json`, a
//! single JSON document, through [`CommandOutput`].

mod config;
mod favorites;
mod list;
mod navigation;
mod note;
mod show;
mod theme;
mod types;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use favorites::{cmd_fav, cmd_favs};
pub use list::{ListOptions, cmd_list, cmd_search};
pub use navigation::{cmd_back, cmd_forward, cmd_open, cmd_url};
pub use note::cmd_note;
pub use show::cmd_show;
pub use theme::cmd_theme;
pub use types::cmd_types;

use std::sync::Arc;

use crate::catalog::PokeApiClient;
use crate::config::Config;
use crate::display::Palette;
use crate::error::{DexError, Result};
use crate::paths;
use crate::prefs::{FileStore, Preferences};
use crate::view_state::{FileHistory, UrlState};

/// Output of a command in both of its forms.
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when `json` is set, the text form otherwise. Falls back to
    /// JSON when no text form was given.
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Preferences backed by the on-disk store under the data root.
pub(crate) fn open_prefs() -> Preferences<FileStore> {
    Preferences::new(FileStore::open_default())
}

/// View state restored from the persisted history.
pub(crate) fn open_url_state() -> UrlState<FileHistory> {
    UrlState::new(FileHistory::open(paths::history_path()))
}

pub(crate) fn open_client(config: &Config) -> Result<Arc<PokeApiClient>> {
    Ok(Arc::new(PokeApiClient::from_config(config)?))
}

pub(crate) fn palette(prefs: &Preferences<FileStore>) -> Palette {
    Palette::for_theme(prefs.theme())
}

/// Turn a failed load into the error shown to the user, with the command
/// that re-issues the request when retrying could help.
pub(crate) fn load_failure(error: &DexError, retry_with: &str) -> DexError {
    match error {
        DexError::NotFound(what) => DexError::NotFound(what.clone()),
        other if other.is_retryable() => {
            DexError::Other(format!("{other}\nRetry with: {retry_with}"))
        }
        other => DexError::Other(other.to_string()),
    }
}
