//! Durable per-device preferences: favorites, notes and theme.
//!
//! The [`PreferenceStore`] contract mirrors browser local storage: values
//! are JSON, keys are independent, reads of a missing or unreadable key
//! yield the caller's default. [`Preferences`] is the typed layer on top.

mod favorites;
mod file;
mod memory;
mod theme;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

pub use favorites::FavoriteSet;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use theme::Theme;

pub const FAVORITES_KEY: &str = "pokemon-favorites";
pub const NOTES_KEY: &str = "pokemon-notes";
pub const DARK_MODE_KEY: &str = "dark-mode";

/// Mapping from entry id to the user's note.
pub type NoteMap = BTreeMap<u32, String>;

/// Key-value storage that survives restarts.
pub trait PreferenceStore {
    /// Raw JSON value for `key`, or `None` when it was never written.
    fn get_raw(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Overwrite the value for `key`.
    fn set_raw(&self, key: &str, value: serde_json::Value) -> Result<()>;

    /// Typed read. Missing, unreadable or mistyped values yield `default`.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        match self.get_raw(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Preference '{key}' has an unexpected shape, using default: {e}");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                tracing::warn!("Failed to read preference '{key}', using default: {e}");
                default
            }
        }
    }

    /// Typed write.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        self.set_raw(key, serde_json::to_value(value)?)
    }
}

/// Typed access to the three preference keys.
pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn favorites(&self) -> FavoriteSet {
        self.store.get(FAVORITES_KEY, FavoriteSet::default())
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites().contains(id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now a favorite.
    pub fn toggle_favorite(&self, id: u32) -> Result<bool> {
        let mut favorites = self.favorites();
        let now_favorite = favorites.toggle(id);
        self.store.set(FAVORITES_KEY, &favorites)?;
        Ok(now_favorite)
    }

    pub fn notes(&self) -> NoteMap {
        self.store.get(NOTES_KEY, NoteMap::new())
    }

    pub fn note(&self, id: u32) -> Option<String> {
        self.notes().remove(&id)
    }

    /// Save the note for `id`. Saving blank text removes the note.
    pub fn save_note(&self, id: u32, text: &str) -> Result<()> {
        let mut notes = self.notes();
        if text.trim().is_empty() {
            notes.remove(&id);
        } else {
            notes.insert(id, text.to_string());
        }
        self.store.set(NOTES_KEY, &notes)
    }

    /// Remove the note for `id`. Returns whether one existed.
    pub fn remove_note(&self, id: u32) -> Result<bool> {
        let mut notes = self.notes();
        let existed = notes.remove(&id).is_some();
        if existed {
            self.store.set(NOTES_KEY, &notes)?;
        }
        Ok(existed)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.store.get(DARK_MODE_KEY, false))
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(DARK_MODE_KEY, &theme.is_dark())
    }
}
