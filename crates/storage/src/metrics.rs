//! Store metrics collection.
//!
//! Provides functions for recording storage and business metrics.

use metrics::{counter, gauge, histogram};
use std::time::Instant;

use crate::db::RecordCounts;

/// Record the duration of a store operation.
pub fn record_operation_duration(operation: &str, duration_secs: f64) {
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record the number of records held by each store.
pub fn record_store_sizes(counts: &RecordCounts) {
    gauge!("store_records", "store" => "donations").set(counts.donations as f64);
    gauge!("store_records", "store" => "inventory").set(counts.inventory as f64);
    gauge!("store_records", "store" => "partners").set(counts.partners as f64);
    gauge!("store_records", "store" => "messages").set(counts.messages as f64);
    gauge!("store_records", "store" => "notifications").set(counts.notifications as f64);
    gauge!("store_records", "store" => "reports").set(counts.reports as f64);
}

/// Count a newly recorded donation.
pub fn record_donation_recorded(donation_type: &str) {
    counter!("donations_recorded_total", "type" => donation_type.to_string()).increment(1);
}

/// Count units added through the restock action.
pub fn record_stock_added(units: u32) {
    counter!("inventory_units_restocked_total").increment(u64::from(units));
}

pub fn record_report_generated(report_type: &str) {
    counter!("reports_generated_total", "type" => report_type.to_string()).increment(1);
}

pub fn record_report_completed() {
    counter!("reports_completed_total").increment(1);
}

/// A helper to time store operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = OpTimer::new("list_donations");
/// let result = table.list(&filter).await;
/// timer.record();
/// result
/// ```
pub struct OpTimer {
    operation: String,
    start: Instant,
}

impl OpTimer {
    /// Create a new timer for the given operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_operation_duration(&self.operation, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_timer_creation() {
        let timer = OpTimer::new("list_donations");
        assert_eq!(timer.operation, "list_donations");
    }

    #[test]
    fn test_recording_without_recorder_is_harmless() {
        OpTimer::new("find_report").record();
        record_stock_added(10);
        record_store_sizes(&RecordCounts::default());
    }
}
