use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{CatalogEntry, CatalogSource};
use crate::error::DexError;

use super::LoadOutcome;
use super::generation::FetchGeneration;

/// State of the detail view.
#[derive(Debug, Clone, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        id: u32,
    },
    Ready(Box<CatalogEntry>),
    Failed {
        id: u32,
        error: Arc<DexError>,
    },
}

/// Loads single entries for the detail view.
///
/// Has its own generation counter, so detail fetches never supersede list
/// fetches or the other way round.
pub struct DetailLoader<C> {
    source: C,
    generation: FetchGeneration,
    state: Mutex<DetailState>,
    last_id: Mutex<Option<u32>>,
}

impl<C: CatalogSource> DetailLoader<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            generation: FetchGeneration::new(),
            state: Mutex::new(DetailState::Closed),
            last_id: Mutex::new(None),
        }
    }

    pub fn state(&self) -> DetailState {
        self.state.lock().clone()
    }

    pub async fn open(&self, id: u32) -> LoadOutcome {
        let ticket = self.generation.begin();
        *self.last_id.lock() = Some(id);
        *self.state.lock() = DetailState::Loading { id };

        let result = self.source.fetch_entry_by_id(id).await;

        if !self.generation.is_current(ticket) {
            tracing::debug!(id, "discarding superseded detail fetch");
            return LoadOutcome::Superseded;
        }

        *self.state.lock() = match result {
            Ok(entry) => DetailState::Ready(Box::new(entry)),
            Err(error) => DetailState::Failed {
                id,
                error: Arc::new(error),
            },
        };
        LoadOutcome::Applied
    }

    /// Re-open the last requested entry, unless the view was dismissed.
    pub async fn retry(&self) -> Option<LoadOutcome> {
        let id = (*self.last_id.lock())?;
        Some(self.open(id).await)
    }

    /// Close the detail view. A fetch still in flight will not reopen it.
    pub fn dismiss(&self) {
        self.generation.begin();
        *self.last_id.lock() = None;
        *self.state.lock() = DetailState::Closed;
    }
}
