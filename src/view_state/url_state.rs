//! View state mirrored into navigation history.

use tokio::sync::watch;

use crate::error::Result;

use super::codec::{decode, encode};
use super::history::HistoryBackend;
use super::{ViewState, ViewStatePatch};

/// Owns the current [`ViewState`] and keeps it in step with a history backend.
///
/// - [`UrlState::update`] merges a patch, pushes a new history entry and
///   notifies subscribers.
/// - [`UrlState::back`] / [`UrlState::forward`] re-decode the live location
///   and notify, but never push.
pub struct UrlState<H: HistoryBackend> {
    history: H,
    state: ViewState,
    sender: watch::Sender<ViewState>,
}

impl<H: HistoryBackend> UrlState<H> {
    /// Initialize from the history's current location.
    pub fn new(history: H) -> Self {
        let state = decode(&history.location());
        let (sender, _) = watch::channel(state.clone());
        Self {
            history,
            state,
            sender,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Canonical query string for the current state.
    pub fn query(&self) -> String {
        encode(&self.state)
    }

    /// Observe the latest state; wakes on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sender.subscribe()
    }

    /// Merge `patch` over the current state and push the result.
    ///
    /// An empty patch changes nothing and pushes nothing.
    pub fn update(&mut self, patch: ViewStatePatch) -> Result<&ViewState> {
        if patch.is_empty() {
            return Ok(&self.state);
        }

        let next = patch.apply_to(&self.state);
        self.history.push(&encode(&next))?;
        tracing::debug!("view state pushed: {:?}", encode(&next));
        self.replace(next);
        Ok(&self.state)
    }

    /// Merge `patch` over the default state and push the result as one entry.
    pub fn reset(&mut self, patch: ViewStatePatch) -> Result<&ViewState> {
        let next = patch.apply_to(&ViewState::default());
        self.history.push(&encode(&next))?;
        self.replace(next);
        Ok(&self.state)
    }

    /// Replace the whole state with the one encoded by `query`, pushing it.
    pub fn navigate(&mut self, query: &str) -> Result<&ViewState> {
        let next = decode(query);
        self.history.push(&encode(&next))?;
        self.replace(next);
        Ok(&self.state)
    }

    /// Step back in history. Returns false when already at the oldest entry.
    pub fn back(&mut self) -> Result<bool> {
        if !self.history.back()? {
            return Ok(false);
        }
        self.sync_from_history();
        Ok(true)
    }

    /// Step forward in history. Returns false when already at the newest entry.
    pub fn forward(&mut self) -> Result<bool> {
        if !self.history.forward()? {
            return Ok(false);
        }
        self.sync_from_history();
        Ok(true)
    }

    /// Re-read the live location after an external navigation.
    pub fn sync_from_history(&mut self) {
        let state = decode(&self.history.location());
        self.replace(state);
    }

    fn replace(&mut self, state: ViewState) {
        self.state = state.clone();
        self.sender.send_replace(state);
    }
}
