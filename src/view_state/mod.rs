//! User-chosen display parameters and their query-string form.
//!
//! A [`ViewState`] is the single source of truth for what the list shows.
//! It is decoded from the current history location, replaced wholesale on
//! navigation and re-encoded after every change (see [`UrlState`]).

pub mod codec;
pub mod history;
pub mod url_state;

use serde::{Deserialize, Serialize};

use crate::error::DexError;

pub use codec::{decode, encode};
pub use history::{FileHistory, HistoryBackend, MemoryHistory};
pub use url_state::UrlState;

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Height,
    Weight,
}

impl SortKey {
    pub const ALL_STRINGS: &[&str] = &["id", "name", "height", "weight"];
}

enum_display_fromstr!(
    SortKey,
    DexError::InvalidSortKey,
    {
        Id => "id",
        Name => "name",
        Height => "height",
        Weight => "weight",
    }
);

/// Whether the list shows every entry or only favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Favorites,
}

impl ViewMode {
    pub const ALL_STRINGS: &[&str] = &["all", "favorites"];
}

enum_display_fromstr!(
    ViewMode,
    DexError::InvalidViewMode,
    {
        All => "all",
        Favorites => "favorites",
    }
);

/// The complete set of display parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub type_filter: String,
    pub sort: SortKey,
    /// 1-based page number
    pub page: u32,
    pub view: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            type_filter: String::new(),
            sort: SortKey::Id,
            page: 1,
            view: ViewMode::All,
        }
    }
}

impl ViewState {
    /// Clamp out-of-range values so the state satisfies `page >= 1`.
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self
    }

    /// Offset of the first entry of the current page.
    pub fn offset(&self, page_size: u32) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(page_size)
    }

    /// True when no search text or type filter narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.type_filter.is_empty()
    }
}

/// Partial update merged over the current [`ViewState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStatePatch {
    pub search: Option<String>,
    pub type_filter: Option<String>,
    pub sort: Option<SortKey>,
    pub page: Option<u32>,
    pub view: Option<ViewMode>,
}

impl ViewStatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn type_filter(mut self, type_filter: impl Into<String>) -> Self {
        self.type_filter = Some(type_filter.into());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn view(mut self, view: ViewMode) -> Self {
        self.view = Some(view);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.type_filter.is_none()
            && self.sort.is_none()
            && self.page.is_none()
            && self.view.is_none()
    }

    /// Go back to page 1 when the patch changes which entries are listed,
    /// unless it names a page explicitly.
    pub fn resetting_page(mut self) -> Self {
        let narrows = self.search.is_some() || self.type_filter.is_some() || self.view.is_some();
        if narrows && self.page.is_none() {
            self.page = Some(1);
        }
        self
    }

    /// Merge this patch over `current`, producing the next state.
    pub fn apply_to(&self, current: &ViewState) -> ViewState {
        ViewState {
            search: self.search.clone().unwrap_or_else(|| current.search.clone()),
            type_filter: self
                .type_filter
                .clone()
                .unwrap_or_else(|| current.type_filter.clone()),
            sort: self.sort.unwrap_or(current.sort),
            page: self.page.unwrap_or(current.page),
            view: self.view.unwrap_or(current.view),
        }
        .normalized()
    }
}
