//! Filtering predicates for the visible list.
//!
//! Each predicate is applied in turn; an empty criterion matches everything.

use crate::catalog::CatalogEntry;
use crate::prefs::FavoriteSet;
use crate::view_state::{ViewMode, ViewState};

/// Case-insensitive substring of the name, or substring of the decimal id.
pub fn matches_search(entry: &CatalogEntry, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&search.to_lowercase())
        || entry.id.to_string().contains(search)
}

pub fn matches_type(entry: &CatalogEntry, type_filter: &str) -> bool {
    type_filter.is_empty() || entry.has_type(type_filter)
}

pub fn matches_view(entry: &CatalogEntry, view: ViewMode, favorites: &FavoriteSet) -> bool {
    match view {
        ViewMode::All => true,
        ViewMode::Favorites => favorites.contains(entry.id),
    }
}

/// Keep the entries that pass every predicate, in input order.
pub fn filter_entries(
    entries: &[CatalogEntry],
    state: &ViewState,
    favorites: &FavoriteSet,
) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|e| matches_search(e, &state.search))
        .filter(|e| matches_type(e, &state.type_filter))
        .filter(|e| matches_view(e, state.view, favorites))
        .cloned()
        .collect()
}
