//! Background job scheduler and job implementations.

mod report_completion;
mod scheduler;
mod store_metrics;

pub use report_completion::CompletionScheduler;
pub use scheduler::{Job, JobScheduler};
pub use store_metrics::StoreMetricsJob;
