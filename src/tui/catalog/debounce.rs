//! Trailing debounce for a single input field.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Runs an update once the input has been quiet for `delay`.
///
/// Each call to [`Debouncer::schedule`] aborts the pending timer, if any, and
/// starts a new one. Only the update from the last call within the window runs.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Restart the quiet period; `update` runs when it elapses.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, update: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            update();
        }));
    }

    /// Drop the pending update without running it
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Whether an update is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
