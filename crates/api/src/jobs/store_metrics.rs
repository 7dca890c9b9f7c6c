//! Background job to record store size metrics.

use std::time::Duration;

use storage::{metrics::record_store_sizes, Database};

use super::scheduler::Job;

/// Job that periodically samples how many records each store holds.
pub struct StoreMetricsJob {
    db: Database,
    interval: Duration,
}

impl StoreMetricsJob {
    pub fn new(db: Database, interval: Duration) -> Self {
        Self { db, interval }
    }
}

#[async_trait::async_trait]
impl Job for StoreMetricsJob {
    fn name(&self) -> &'static str {
        "store_metrics"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> Result<(), String> {
        record_store_sizes(&self.db.counts().await);
        Ok(())
    }
}
