//! Transient status line
//!
//! Holds the one-line message shown under the form. A flashed message is
//! cleared by a tokio task after a delay. Every update aborts the pending
//! clear, and a generation counter makes sure a clear that already woke up
//! cannot wipe a newer message.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay before a flashed message disappears
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(3);

pub struct StatusLine {
    tx: Arc<watch::Sender<String>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    clear_after: Duration,
}

impl StatusLine {
    pub fn new(clear_after: Duration) -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self {
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            clear_after,
        }
    }

    /// Current message; empty when nothing is shown
    pub fn message(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Watch the message as it changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn clear_after(&self) -> Duration {
        self.clear_after
    }

    /// Show a message until the next update
    pub fn set(&mut self, message: impl Into<String>) {
        self.cancel_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.tx.send_replace(message.into());
    }

    /// Show a message and clear it after the configured delay
    ///
    /// Without a tokio runtime the message stays until the next update.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.set(message);

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No async runtime; status message will not auto-clear");
                return;
            }
        };

        let scheduled = self.generation.load(Ordering::SeqCst);
        let generation = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);
        let delay = self.clear_after;

        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let cleared = tx.send_if_modified(|message| {
                if generation.load(Ordering::SeqCst) != scheduled || message.is_empty() {
                    return false;
                }
                message.clear();
                true
            });
            if cleared {
                tracing::debug!("Status message cleared");
            }
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAR_AFTER)
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusLine")
            .field("message", &*self.tx.borrow())
            .field("pending", &self.pending.is_some())
            .field("clear_after", &self.clear_after)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_flash_clears_after_delay() {
        let mut status = StatusLine::default();
        status.flash("Entry added!");
        assert_eq!(status.message(), "Entry added!");

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(status.message(), "Entry added!");

        sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(status.message(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_does_not_clear() {
        let mut status = StatusLine::default();
        status.set("Please enter both weight and date.");

        sleep(Duration::from_secs(10)).await;
        assert_eq!(status.message(), "Please enter both weight and date.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_flash_restarts_window() {
        let mut status = StatusLine::default();
        status.flash("first");

        sleep(Duration::from_secs(2)).await;
        status.flash("second");

        // Past the first deadline; the first clear was cancelled
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(status.message(), "second");

        sleep(Duration::from_millis(1600)).await;
        tokio::task::yield_now().await;
        assert_eq!(status.message(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_cancels_pending_clear() {
        let mut status = StatusLine::new(Duration::from_secs(1));
        status.flash("Entry added!");
        status.set("Please enter a valid weight.");

        sleep(Duration::from_secs(5)).await;
        assert_eq!(status.message(), "Please enter a valid weight.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_clear() {
        let mut status = StatusLine::default();
        let rx = status.subscribe();
        status.flash("Entry added!");
        drop(status);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), "Entry added!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_clear() {
        let mut status = StatusLine::new(Duration::from_millis(500));
        let mut rx = status.subscribe();
        status.flash("Entry added!");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "Entry added!");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "");
    }

    #[test]
    fn test_flash_without_runtime_keeps_message() {
        let mut status = StatusLine::default();
        status.flash("Entry added!");
        assert_eq!(status.message(), "Entry added!");
    }
}
