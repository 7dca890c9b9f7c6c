//! Deferred report completion.
//!
//! Every generated report gets one timer task keyed by its id. When the
//! timer fires the task asks the repository to complete the report, which
//! re-checks the current store, so a deleted report is never recreated.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use domain::services::reports::CompletionOutcome;
use shared::id::RecordId;
use storage::repositories::ReportRepository;
use tokio::sync::{watch, Mutex};
use tokio::task::AbortHandle;
use tracing::{debug, info};

/// One-shot completion timers for Processing reports.
pub struct CompletionScheduler {
    reports: ReportRepository,
    delay: Duration,
    pending: Arc<Mutex<HashMap<RecordId, AbortHandle>>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl CompletionScheduler {
    pub fn new(reports: ReportRepository, delay: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            reports,
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules completion of report `id` after the configured delay.
    ///
    /// Rescheduling an id replaces its previous timer. Returns `false`
    /// once the scheduler has shut down.
    pub async fn schedule(&self, id: RecordId) -> bool {
        if *self.shutdown_rx.borrow() {
            return false;
        }

        // The map stays locked until the handle is stored, so a timer that
        // fires immediately still finds its own entry to remove.
        let mut pending = self.pending.lock().await;

        let reports = self.reports.clone();
        let delay = self.delay;
        let registry = Arc::clone(&self.pending);
        let mut shutdown_rx = self.shutdown_rx.clone();
        let task_id = id.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown_rx.wait_for(|stopped| *stopped) => {
                    debug!(report_id = %task_id, "Report completion dropped on shutdown");
                    return;
                }
            }

            registry.lock().await.remove(&task_id);

            match reports.complete(&task_id).await {
                CompletionOutcome::Completed => {
                    info!(report_id = %task_id, "Report generated");
                }
                CompletionOutcome::AlreadyFinished => {
                    debug!(report_id = %task_id, "Report no longer processing");
                }
                CompletionOutcome::Missing => {
                    debug!(report_id = %task_id, "Report deleted before completion");
                }
            }
        });

        if let Some(previous) = pending.insert(id, handle.abort_handle()) {
            previous.abort();
        }
        true
    }

    /// Cancels the pending completion of report `id`.
    ///
    /// Returns whether a timer was pending.
    pub async fn cancel(&self, id: &RecordId) -> bool {
        match self.pending.lock().await.remove(id) {
            Some(handle) => {
                handle.abort();
                debug!(report_id = %id, "Report completion cancelled");
                true
            }
            None => false,
        }
    }

    pub async fn is_pending(&self, id: &RecordId) -> bool {
        self.pending.lock().await.contains_key(id)
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Cancels every pending completion and refuses new ones.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
        let mut pending = self.pending.lock().await;
        let count = pending.len();
        for (_, handle) in pending.drain() {
            handle.abort();
        }
        info!(cancelled = count, "Report completion scheduler stopped");
    }
}
