//! Query-string encoding of [`ViewState`].
//!
//! Parameters: `q` (search), `type`, `sort`, `page`, `view`. Fields equal
//! to their default are omitted, so the default state encodes to `""`.

use url::form_urlencoded;

use super::{SortKey, ViewMode, ViewState};

const SEARCH_KEY: &str = "q";
const TYPE_KEY: &str = "type";
const SORT_KEY: &str = "sort";
const PAGE_KEY: &str = "page";
const VIEW_KEY: &str = "view";

/// Decode a query string (with or without a leading `?`) into a view state.
///
/// Absent fields take their defaults. A page that is not a positive integer
/// becomes 1; an unrecognized sort or view value falls back to the default.
/// When a key repeats, the first occurrence wins.
pub fn decode(query: &str) -> ViewState {
    let query = query.trim().trim_start_matches('?');
    let mut state = ViewState::default();
    let mut seen = [false; 5];

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            SEARCH_KEY => 0,
            TYPE_KEY => 1,
            SORT_KEY => 2,
            PAGE_KEY => 3,
            VIEW_KEY => 4,
            _ => continue,
        };
        if seen[slot] {
            continue;
        }
        seen[slot] = true;

        match slot {
            0 => state.search = value.into_owned(),
            1 => state.type_filter = value.into_owned(),
            2 => state.sort = value.parse::<SortKey>().unwrap_or_default(),
            3 => state.page = parse_page(&value),
            _ => state.view = value.parse::<ViewMode>().unwrap_or_default(),
        }
    }

    state
}

fn parse_page(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}

/// Encode a view state, omitting every field equal to its default.
pub fn encode(state: &ViewState) -> String {
    let defaults = ViewState::default();
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if state.search != defaults.search {
        serializer.append_pair(SEARCH_KEY, &state.search);
    }
    if state.type_filter != defaults.type_filter {
        serializer.append_pair(TYPE_KEY, &state.type_filter);
    }
    if state.sort != defaults.sort {
        serializer.append_pair(SORT_KEY, state.sort.as_str());
    }
    if state.page > defaults.page {
        serializer.append_pair(PAGE_KEY, &state.page.to_string());
    }
    if state.view != defaults.view {
        serializer.append_pair(VIEW_KEY, state.view.as_str());
    }

    serializer.finish()
}
