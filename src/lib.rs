#[macro_use]
mod macros;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod paths;
pub mod prefs;
pub mod session;
pub mod view_state;

pub use catalog::{CatalogEntry, CatalogSource, PageResult, PokeApiClient, TypeName};
pub use config::Config;
pub use engine::{VisibleListCache, compute_visible_list};
pub use error::{DexError, Result};
pub use prefs::{FavoriteSet, PreferenceStore, Preferences};
pub use session::{DetailLoader, ListLoader, LoadOutcome, SearchDebouncer, TypeVocabulary};
pub use view_state::{SortKey, UrlState, ViewMode, ViewState, ViewStatePatch, decode, encode};
