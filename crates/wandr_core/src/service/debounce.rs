//! Single-slot cancellable deferred task.
//!
//! # Invariants
//! - At most one task is pending per writer.
//! - Scheduling cancels the pending task before arming a new one.
//! - Cancellation only affects tasks still waiting out the quiet period; a
//!   write that has started runs to completion.
//! - Dropping the writer cancels its pending task.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct PendingTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Runs the most recently scheduled write after a quiet period.
///
/// Must be used from within a tokio runtime.
pub struct DebouncedWriter {
    quiet_period: Duration,
    pending: Option<PendingTask>,
}

impl DebouncedWriter {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Replaces any pending write with `write`, run after the quiet period.
    pub fn schedule<F>(&mut self, write: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let quiet_period = self.quiet_period;
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(quiet_period) => write.await,
            }
        });

        self.pending = Some(PendingTask { token, handle });
    }

    /// Cancels the pending write. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => {
                let was_waiting = !task.handle.is_finished();
                task.token.cancel();
                was_waiting
            }
            None => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }
}

impl Drop for DebouncedWriter {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::DebouncedWriter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const QUIET: Duration = Duration::from_millis(1000);

    #[tokio::test(start_paused = true)]
    async fn only_last_scheduled_write_runs() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let mut writer = DebouncedWriter::new(QUIET);

        for value in ["A", "Al", "Alex"] {
            let writes = writes.clone();
            writer.schedule(async move {
                writes.lock().unwrap().push(value);
            });
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        assert!(writer.has_pending());

        tokio::time::sleep(QUIET).await;
        assert_eq!(*writes.lock().unwrap(), ["Alex"]);
        assert!(!writer.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_pending_write() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut writer = DebouncedWriter::new(QUIET);

        let counter = runs.clone();
        writer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(writer.cancel());
        assert!(!writer.cancel());

        tokio::time::sleep(QUIET * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_writer_cancels_pending_write() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut writer = DebouncedWriter::new(QUIET);

        let counter = runs.clone();
        writer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(writer);

        tokio::time::sleep(QUIET * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
