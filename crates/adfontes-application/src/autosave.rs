//! Debounced autosave.
//!
//! Coalesces rapid edits to the scratchpad into a single save: each
//! `schedule` call cancels the previous pending save and arms a new one
//! that fires after the delay. `flush` forces the pending save to run
//! immediately (used on shutdown so the last edit is never lost).

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

struct Pending {
    handle: JoinHandle<()>,
    fire_now: Arc<Notify>,
}

/// Trailing-edge debouncer for fire-and-forget save tasks.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<Pending>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arms `action` to run after the delay, dropping any armed action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let fire_now = Arc::new(Notify::new());
        let notified = fire_now.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = notified.notified() => {}
            }
            action.await;
        });

        let mut pending = self.pending.lock().expect("debouncer lock");
        if let Some(previous) = pending.replace(Pending { handle, fire_now }) {
            previous.handle.abort();
        }
    }

    /// Drops the armed action without running it.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().expect("debouncer lock").take() {
            pending.handle.abort();
        }
    }

    /// Runs the armed action immediately, if any, and waits for it.
    pub async fn flush(&self) {
        let pending = self.pending.lock().expect("debouncer lock").take();
        if let Some(pending) = pending {
            pending.fire_now.notify_one();
            // An aborted task is the only join failure here.
            let _ = pending.handle.await;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
