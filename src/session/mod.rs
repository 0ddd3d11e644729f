//! Fetch coordination between the catalog and the visible state.
//!
//! Everything runs on a single logical thread of control; network fetches
//! are the only suspension points. Each loader tracks a fetch generation and
//! drops completions that arrive after a newer request has started.

pub mod debounce;
pub mod detail;
pub mod generation;
pub mod list;
pub mod vocabulary;

pub use debounce::SearchDebouncer;
pub use detail::{DetailLoader, DetailState};
pub use generation::{FetchGeneration, FetchTicket};
pub use list::{ListLoader, ListState};
pub use vocabulary::TypeVocabulary;

/// Result of a load as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The completion was applied to state (as data or as a failure).
    Applied,
    /// A newer request started first; the completion was discarded.
    Superseded,
}
