//! Navigation history of encoded view states.
//!
//! [`HistoryBackend`] is the seam between [`super::UrlState`] and wherever
//! the "current location" lives: an in-memory stack for embedding and tests,
//! or a JSON file so history survives between `dex` invocations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Oldest entries are dropped beyond this many.
const MAX_ENTRIES: usize = 200;

/// Browser-style history of query strings.
pub trait HistoryBackend {
    /// Query string at the current cursor position.
    fn location(&self) -> String;

    /// Add a new entry after the cursor, discarding any forward entries.
    fn push(&mut self, query: &str) -> Result<()>;

    /// Move the cursor one entry back. Returns false at the oldest entry.
    fn back(&mut self) -> Result<bool>;

    /// Move the cursor one entry forward. Returns false at the newest entry.
    fn forward(&mut self) -> Result<bool>;
}

/// In-memory history stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryHistory {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn repair(&mut self) {
        if self.entries.is_empty() {
            self.entries.push(String::new());
        }
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len() - 1;
        }
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }

    fn push(&mut self, query: &str) -> Result<()> {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());

        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        Ok(())
    }

    fn back(&mut self) -> Result<bool> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.cursor -= 1;
        Ok(true)
    }

    fn forward(&mut self) -> Result<bool> {
        if self.cursor + 1 >= self.entries.len() {
            return Ok(false);
        }
        self.cursor += 1;
        Ok(true)
    }
}

/// History persisted as JSON, written after every change.
#[derive(Debug)]
pub struct FileHistory {
    path: PathBuf,
    inner: MemoryHistory,
}

impl FileHistory {
    /// Open the history at `path`, starting fresh if it is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let inner = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<MemoryHistory>(&content) {
                Ok(mut history) => {
                    history.repair();
                    history
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable history at {}: {e}", path.display());
                    MemoryHistory::default()
                }
            },
            Err(_) => MemoryHistory::default(),
        };
        Self { path, inner }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, history: &MemoryHistory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(history)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Apply `change` to a copy, and keep it only once it is on disk.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryHistory) -> Result<T>,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T> {
        let mut next = self.inner.clone();
        let outcome = change(&mut next)?;
        if changed(&outcome) {
            self.persist(&next)?;
            self.inner = next;
        }
        Ok(outcome)
    }
}

impl HistoryBackend for FileHistory {
    fn location(&self) -> String {
        self.inner.location()
    }

    fn push(&mut self, query: &str) -> Result<()> {
        self.commit(|history| history.push(query), |_| true)
    }

    fn back(&mut self) -> Result<bool> {
        self.commit(|history| history.back(), |moved| *moved)
    }

    fn forward(&mut self) -> Result<bool> {
        self.commit(|history| history.forward(), |moved| *moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new("");
        history.push("page=2").unwrap();
        history.push("page=3").unwrap();
        assert_eq!(history.location(), "page=3");

        assert!(history.back().unwrap());
        assert_eq!(history.location(), "page=2");
        assert!(history.back().unwrap());
        assert_eq!(history.location(), "");
        assert!(!history.back().unwrap());

        assert!(history.forward().unwrap());
        assert_eq!(history.location(), "page=2");
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("");
        history.push("page=2").unwrap();
        history.push("page=3").unwrap();
        history.back().unwrap();
        history.push("type=fire").unwrap();

        assert_eq!(history.entries(), &["", "page=2", "type=fire"]);
        assert!(!history.forward().unwrap());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = MemoryHistory::new("");
        for page in 0..(MAX_ENTRIES + 25) {
            history.push(&format!("page={page}")).unwrap();
        }
        assert_eq!(history.len(), MAX_ENTRIES);
        assert_eq!(history.location(), format!("page={}", MAX_ENTRIES + 24));
    }

    #[test]
    fn test_file_history_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut history = FileHistory::open(&path);
        assert_eq!(history.location(), "");
        history.push("sort=name").unwrap();
        history.push("sort=name&page=2").unwrap();
        history.back().unwrap();

        let reopened = FileHistory::open(&path);
        assert_eq!(reopened.location(), "sort=name");
    }

    #[test]
    fn test_file_history_recovers_from_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let history = FileHistory::open(&path);
        assert_eq!(history.location(), "");
    }

    #[test]
    fn test_file_history_repairs_out_of_range_cursor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"entries":["","page=2"],"cursor":9}"#).unwrap();

        let history = FileHistory::open(&path);
        assert_eq!(history.location(), "page=2");
    }

    #[test]
    fn test_failed_write_leaves_history_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut history = FileHistory::open(blocker.join("history.json"));
        assert!(history.push("page=2").is_err());
        assert_eq!(history.location(), "");
        assert!(!history.back().unwrap());
    }
}
