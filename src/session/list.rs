use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{CatalogEntry, CatalogSource, PageResult};
use crate::error::DexError;

use super::LoadOutcome;
use super::generation::FetchGeneration;

/// What the list area currently shows.
#[derive(Debug, Clone, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading {
        page: u32,
    },
    Ready {
        page: u32,
        result: PageResult,
        /// Generation of the fetch that produced `result`
        generation: u64,
    },
    Failed {
        page: u32,
        error: Arc<DexError>,
    },
}

impl ListState {
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            ListState::Ready { result, .. } => &result.entries,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading { .. })
    }
}

/// Loads list pages, applying only the most recently requested one.
pub struct ListLoader<C> {
    source: C,
    page_size: u32,
    generation: FetchGeneration,
    state: Mutex<ListState>,
    last_page: Mutex<Option<u32>>,
}

impl<C: CatalogSource> ListLoader<C> {
    pub fn new(source: C, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            generation: FetchGeneration::new(),
            state: Mutex::new(ListState::Idle),
            last_page: Mutex::new(None),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> ListState {
        self.state.lock().clone()
    }

    /// Fetch the given 1-based page.
    ///
    /// Any earlier call still in flight is superseded: its completion,
    /// success or failure, is discarded and reported as
    /// [`LoadOutcome::Superseded`].
    pub async fn load_page(&self, page: u32) -> LoadOutcome {
        let page = page.max(1);
        let ticket = self.generation.begin();
        *self.last_page.lock() = Some(page);
        *self.state.lock() = ListState::Loading { page };

        let offset = u64::from(page - 1) * u64::from(self.page_size);
        let result = self.source.fetch_page(offset, self.page_size).await;

        if !self.generation.is_current(ticket) {
            tracing::debug!(
                page,
                generation = ticket.generation(),
                "discarding superseded list fetch"
            );
            return LoadOutcome::Superseded;
        }

        *self.state.lock() = match result {
            Ok(result) => ListState::Ready {
                page,
                result,
                generation: ticket.generation(),
            },
            Err(error) => ListState::Failed {
                page,
                error: Arc::new(error),
            },
        };
        LoadOutcome::Applied
    }

    /// Re-issue the last requested page. `None` if nothing was requested yet.
    pub async fn retry(&self) -> Option<LoadOutcome> {
        let page = (*self.last_page.lock())?;
        Some(self.load_page(page).await)
    }
}
