//! Page arithmetic and the page-link window shown under the list.

use serde::{Serialize, Serializer};

use crate::view_state::{ViewMode, ViewState};

/// Pages shown on each side of the current one.
const WINDOW: u32 = 2;

/// One slot of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(page) => serializer.serialize_u32(*page),
            PageLink::Gap => serializer.serialize_str("..."),
        }
    }
}

pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// First page, a window around `current`, and the last page, with gaps
/// wherever pages are skipped. Always starts with page 1.
pub fn visible_pages(current: u32, total: u32) -> Vec<PageLink> {
    let mut links = vec![PageLink::Page(1)];

    if current.saturating_sub(WINDOW) > 2 {
        links.push(PageLink::Gap);
    }

    let start = current.saturating_sub(WINDOW).max(2);
    let end = current.saturating_add(WINDOW).min(total.saturating_sub(1));
    links.extend((start..=end).map(PageLink::Page));

    if current.saturating_add(WINDOW) < total.saturating_sub(1) {
        links.push(PageLink::Gap);
        links.push(PageLink::Page(total));
    } else if total > 1 {
        links.push(PageLink::Page(total));
    }

    links
}

/// Pagination only applies to the raw remote ordering: any local narrowing
/// (search, type or favorites) hides it.
pub fn pagination_enabled(state: &ViewState) -> bool {
    state.is_unfiltered() && state.view == ViewMode::All
}

pub fn has_previous(current: u32) -> bool {
    current > 1
}

pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}

/// Text shown when the visible list is empty.
pub fn empty_message(state: &ViewState) -> &'static str {
    if state.view == ViewMode::Favorites {
        "You haven't added any favorites yet. Run `dex fav <ID>` to add one!"
    } else if !state.is_unfiltered() {
        "Try adjusting your search or filters to find more Pokémon."
    } else {
        "No Pokémon found."
    }
}
