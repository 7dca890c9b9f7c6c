//! Periodic background jobs.
//!
//! Each job gets its own interval task. The first run happens one interval
//! after the job is spawned, and ticks missed while a run is slow are
//! skipped rather than replayed.

use std::time::Duration;

use metrics::counter;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// A task run repeatedly on a fixed interval.
#[async_trait::async_trait]
pub trait Job: Send + Sync {
    /// Name used in logs and the failure counter.
    fn name(&self) -> &'static str;

    fn interval(&self) -> Duration;

    async fn execute(&self) -> Result<(), String>;
}

/// Runs periodic jobs until shutdown.
pub struct JobScheduler {
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl JobScheduler {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            shutdown_tx,
            handles: Vec::new(),
        }
    }

    /// Starts running `job` on its interval.
    pub fn spawn<J: Job + 'static>(&mut self, job: J) {
        let shutdown_rx = self.shutdown_tx.subscribe();
        info!(job = job.name(), interval_secs = job.interval().as_secs(), "Job scheduled");
        self.handles.push(tokio::spawn(run(job, shutdown_rx)));
    }

    pub fn job_count(&self) -> usize {
        self.handles.len()
    }

    /// Signals every job to stop and waits up to `timeout` for them to exit.
    pub async fn shutdown(self, timeout: Duration) {
        info!(jobs = self.handles.len(), "Stopping background jobs");
        self.shutdown_tx.send_replace(true);

        let handles = self.handles;
        let joined = async {
            for handle in handles {
                if let Err(e) = handle.await {
                    warn!("Job task panicked: {}", e);
                }
            }
        };

        match tokio::time::timeout(timeout, joined).await {
            Ok(()) => info!("Background jobs stopped"),
            Err(_) => warn!("Job shutdown timed out after {:?}", timeout),
        }
    }
}

impl Default for JobScheduler {
    fn default() -> Self {
        Self::new()
    }
}

async fn run<J: Job>(job: J, mut shutdown_rx: watch::Receiver<bool>) {
    let period = job.interval();
    let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = async { shutdown_rx.wait_for(|stopped| *stopped).await.map(|_| ()) } => break,
            _ = ticks.tick() => run_once(&job).await,
        }
    }

    debug!(job = job.name(), "Job stopped");
}

async fn run_once<J: Job>(job: &J) {
    let start = std::time::Instant::now();
    match job.execute().await {
        Ok(()) => debug!(job = job.name(), elapsed_ms = start.elapsed().as_millis(), "Job ran"),
        Err(e) => {
            counter!("background_job_failures_total", "job" => job.name()).increment(1);
            error!(job = job.name(), error = %e, "Job failed");
        }
    }
}
