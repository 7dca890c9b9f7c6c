//! Report repository.

use domain::models::report::{Report, ReportDraft, ReportFilter, ReportStats};
use domain::services::reports::{self, CompletionOutcome};
use domain::store::{FormError, SubmitContext};
use shared::id::RecordId;

use crate::metrics::{record_report_completed, record_report_generated, OpTimer};
use crate::table::Table;

/// Repository for reports.
#[derive(Clone)]
pub struct ReportRepository {
    table: Table<Report>,
}

impl ReportRepository {
    pub fn new(table: Table<Report>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &ReportFilter) -> Vec<Report> {
        let timer = OpTimer::new("list_reports");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn find(&self, id: &RecordId) -> Option<Report> {
        let timer = OpTimer::new("find_report");
        let result = self.table.find(id).await;
        timer.record();
        result
    }

    /// Insert a new Processing report.
    pub async fn generate(&self, draft: ReportDraft, ctx: &SubmitContext) -> Result<Report, FormError> {
        let timer = OpTimer::new("generate_report");
        let result = self
            .table
            .write(|store| reports::generate(store, draft, ctx))
            .await;
        timer.record();
        if let Ok(report) = &result {
            record_report_generated(report.report_type.as_str());
        }
        result
    }

    /// Complete a report if it is still present and processing.
    pub async fn complete(&self, id: &RecordId) -> CompletionOutcome {
        let timer = OpTimer::new("complete_report");
        let outcome = self.table.write(|store| reports::complete(store, id)).await;
        timer.record();
        if outcome == CompletionOutcome::Completed {
            record_report_completed();
        }
        outcome
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_report");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }

    pub async fn stats(&self) -> ReportStats {
        self.table.read(|store| ReportStats::from_records(store)).await
    }
}
