use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

/// Holds back search text until input has been quiet for an interval.
#[derive(Debug)]
pub struct SearchDebouncer {
    quiet: Duration,
    latest: AtomicU64,
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            latest: AtomicU64::new(0),
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Wait out the quiet interval, then yield `text` only if no later
    /// submission arrived in the meantime.
    pub async fn submit(&self, text: impl Into<String>) -> Option<String> {
        let text = text.into();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.quiet).await;

        (self.latest.load(Ordering::SeqCst) == seq).then_some(text)
    }

    /// Receive the next burst of input and return its last value.
    ///
    /// A burst ends when nothing arrives for the quiet interval, or when the
    /// channel closes. Returns `None` once the channel is closed and drained.
    pub async fn next_burst(&self, rx: &mut UnboundedReceiver<String>) -> Option<String> {
        let mut last = rx.recv().await?;

        loop {
            match tokio::time::timeout(self.quiet, rx.recv()).await {
                Ok(Some(text)) => last = text,
                Ok(None) | Err(_) => return Some(last),
            }
        }
    }
}
