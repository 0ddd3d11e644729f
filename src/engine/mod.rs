//! Derived list computation.
//!
//! The visible list is a pure function of the fetched page, the current
//! [`ViewState`] and the favorite set. [`VisibleListCache`] memoizes it so
//! repeated renders of an unchanged state do no work.

pub mod filter;
pub mod pagination;
pub mod sort;

use crate::catalog::CatalogEntry;
use crate::prefs::FavoriteSet;
use crate::view_state::ViewState;

pub use filter::filter_entries;
pub use pagination::{
    PageLink, empty_message, has_next, has_previous, pagination_enabled, total_pages,
    visible_pages,
};
pub use sort::sort_entries_by;

/// Filter then sort `entries` for display.
///
/// The text filter, type filter and favorites filter are applied in that
/// order, followed by a stable sort on `state.sort`.
pub fn compute_visible_list(
    entries: &[CatalogEntry],
    state: &ViewState,
    favorites: &FavoriteSet,
) -> Vec<CatalogEntry> {
    let mut visible = filter_entries(entries, state, favorites);
    sort_entries_by(&mut visible, state.sort);
    visible
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    state: ViewState,
    favorites: FavoriteSet,
}

/// Memoized [`compute_visible_list`].
///
/// `generation` identifies the page the entries came from; callers pass the
/// generation of the list fetch that produced them, so entries are never
/// compared element-by-element.
#[derive(Debug, Default)]
pub struct VisibleListCache {
    key: Option<CacheKey>,
    value: Vec<CatalogEntry>,
    computations: u64,
}

impl VisibleListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        generation: u64,
        entries: &[CatalogEntry],
        state: &ViewState,
        favorites: &FavoriteSet,
    ) -> &[CatalogEntry] {
        let fresh = self.key.as_ref().is_some_and(|k| {
            k.generation == generation && k.state == *state && k.favorites == *favorites
        });

        if !fresh {
            self.value = compute_visible_list(entries, state, favorites);
            self.key = Some(CacheKey {
                generation,
                state: state.clone(),
                favorites: favorites.clone(),
            });
            self.computations += 1;
        }

        &self.value
    }

    /// How many times the list was actually recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{SortKey, ViewMode};

    fn starters() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(1, "bulbasaur")
                .with_types(&["grass", "poison"])
                .with_size(7, 69),
            CatalogEntry::new(4, "charmander")
                .with_types(&["fire"])
                .with_size(6, 85),
            CatalogEntry::new(7, "squirtle")
                .with_types(&["water"])
                .with_size(5, 90),
            CatalogEntry::new(25, "Pikachu")
                .with_types(&["electric"])
                .with_size(4, 60),
        ]
    }

    fn ids(entries: &[CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_type_filter_scenario() {
        let entries = vec![
            CatalogEntry::new(1, "bulbasaur").with_types(&["grass", "poison"]),
            CatalogEntry::new(4, "charmander").with_types(&["fire"]),
        ];
        let state = ViewState {
            type_filter: "poison".to_string(),
            ..ViewState::default()
        };

        let visible = compute_visible_list(&entries, &state, &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_type_filter_fire_scenario() {
        let entries = vec![
            CatalogEntry::new(1, "bulbasaur").with_types(&["grass", "poison"]),
            CatalogEntry::new(4, "charmander").with_types(&["fire"]),
        ];
        let state = ViewState {
            type_filter: "fire".to_string(),
            ..ViewState::default()
        };

        let visible = compute_visible_list(&entries, &state, &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![4]);
    }

    #[test]
    fn test_favorites_view_with_no_favorites_is_empty() {
        let state = ViewState {
            view: ViewMode::Favorites,
            ..ViewState::default()
        };
        assert!(compute_visible_list(&starters(), &state, &FavoriteSet::new()).is_empty());
    }

    #[test]
    fn test_filters_compose() {
        let favorites: FavoriteSet = [4, 7, 25].into_iter().collect();
        let state = ViewState {
            search: "r".to_string(),
            view: ViewMode::Favorites,
            sort: SortKey::Weight,
            ..ViewState::default()
        };

        // "r" matches bulbasaur, charmander and squirtle; bulbasaur is not a favorite.
        let visible = compute_visible_list(&starters(), &state, &favorites);
        assert_eq!(ids(&visible), vec![7, 4]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let state = ViewState {
            sort: SortKey::Name,
            ..ViewState::default()
        };
        let visible = compute_visible_list(&starters(), &state, &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![1, 4, 25, 7]);
    }

    #[test]
    fn test_deterministic() {
        let state = ViewState {
            sort: SortKey::Height,
            search: "a".to_string(),
            ..ViewState::default()
        };
        let favorites = FavoriteSet::new();
        let first = compute_visible_list(&starters(), &state, &favorites);
        let second = compute_visible_list(&starters(), &state, &favorites);
        assert_eq!(first, second);
    }

    #[test]
    fn test_does_not_mutate_input_order() {
        let entries = starters();
        let state = ViewState {
            sort: SortKey::Weight,
            ..ViewState::default()
        };
        compute_visible_list(&entries, &state, &FavoriteSet::new());
        assert_eq!(ids(&entries), vec![1, 4, 7, 25]);
    }

    #[test]
    fn test_cache_recomputes_only_on_change() {
        let entries = starters();
        let mut cache = VisibleListCache::new();
        let mut favorites = FavoriteSet::new();
        let state = ViewState::default();

        assert_eq!(cache.get(1, &entries, &state, &favorites).len(), 4);
        cache.get(1, &entries, &state, &favorites);
        assert_eq!(cache.computations(), 1);

        favorites.toggle(4);
        cache.get(1, &entries, &state, &favorites);
        assert_eq!(cache.computations(), 2);

        let sorted = ViewState {
            sort: SortKey::Name,
            ..state.clone()
        };
        cache.get(1, &entries, &sorted, &favorites);
        assert_eq!(cache.computations(), 3);

        cache.get(2, &entries, &sorted, &favorites);
        assert_eq!(cache.computations(), 4);

        cache.invalidate();
        cache.get(2, &entries, &sorted, &favorites);
        assert_eq!(cache.computations(), 5);
    }
}
