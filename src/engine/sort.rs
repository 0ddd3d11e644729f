//! Sort functions for the visible list.
//!
//! All sorts are stable: entries that compare equal keep their input order.

use unicase::UniCase;

use crate::catalog::CatalogEntry;
use crate::view_state::SortKey;

/// Sort by id (ascending)
pub fn sort_by_id(entries: &mut [CatalogEntry]) {
    entries.sort_by_key(|e| e.id);
}

/// Sort by name (ascending, case-insensitive)
pub fn sort_by_name(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| UniCase::new(a.name.as_str()).cmp(&UniCase::new(b.name.as_str())));
}

/// Sort by height (tallest first)
pub fn sort_by_height(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| b.height_dm.cmp(&a.height_dm));
}

/// Sort by weight (heaviest first)
pub fn sort_by_weight(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| b.weight_hg.cmp(&a.weight_hg));
}

/// Sort entries by the specified key
pub fn sort_entries_by(entries: &mut [CatalogEntry], key: SortKey) {
    match key {
        SortKey::Id => sort_by_id(entries),
        SortKey::Name => sort_by_name(entries),
        SortKey::Height => sort_by_height(entries),
        SortKey::Weight => sort_by_weight(entries),
    }
}
