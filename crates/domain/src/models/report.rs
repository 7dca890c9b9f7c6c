//! Report domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;
use validator::Validate;

use crate::store::{Draft, Record, RecordFilter, SearchTerm, Selection, SubmitContext};

/// Download link attached to generated reports.
pub const GENERATED_DOWNLOAD_URL: &str = "#";

labeled_enum! {
    pub enum ReportType {
        Donations => "Donations",
        Inventory => "Inventory",
        Partners => "Partners",
        Distribution => "Distribution",
    }
}

labeled_enum! {
    /// Generation state. Reports move from Processing to Generated, never back.
    pub enum ReportStatus {
        Processing => "Processing",
        Generated => "Generated",
        Failed => "Failed",
    }
}

labeled_enum! {
    /// Period a report covers.
    pub enum DateRange {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::Donations
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::Monthly
    }
}

/// A generated (or generating) report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date: NaiveDate,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl Report {
    /// Finishes a processing report.
    ///
    /// Returns `false` for reports that are not processing.
    pub fn complete(&mut self) -> bool {
        if self.status != ReportStatus::Processing {
            return false;
        }
        self.status = ReportStatus::Generated;
        self.download_url = Some(GENERATED_DOWNLOAD_URL.to_string());
        true
    }
}

impl Record for Report {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Fields of the generate-report form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportDraft {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[serde(rename = "type")]
    pub report_type: ReportType,

    pub date_range: DateRange,
}

impl Draft for ReportDraft {
    type Record = Report;

    fn from_record(record: &Report) -> Self {
        Self {
            title: record.title.clone(),
            report_type: record.report_type,
            date_range: record.date_range.unwrap_or_default(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.title.is_empty()
    }

    fn into_record(self, ctx: &SubmitContext) -> Report {
        Report {
            id: RecordId::unassigned(),
            title: self.title,
            report_type: self.report_type,
            date: ctx.today(),
            status: ReportStatus::Processing,
            download_url: None,
            date_range: Some(self.date_range),
        }
    }

    fn merge_into(self, record: &mut Report) {
        record.title = self.title;
        record.report_type = self.report_type;
        record.date_range = Some(self.date_range);
    }
}

/// Report list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportFilter {
    #[serde(rename = "type")]
    pub report_type: Selection<ReportType>,
    pub status: Selection<ReportStatus>,
    pub search: SearchTerm,
}

impl RecordFilter<Report> for ReportFilter {
    fn matches(&self, report: &Report) -> bool {
        self.report_type.matches(&report.report_type)
            && self.status.matches(&report.status)
            && self.search.matches_any(&[&report.title])
    }
}

/// Stat cards for the reports page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_reports: usize,
    pub processing_reports: usize,
    pub generated_reports: usize,
    pub failed_reports: usize,
}

impl ReportStats {
    pub fn from_records<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        reports.into_iter().fold(Self::default(), |mut stats, r| {
            stats.total_reports += 1;
            match r.status {
                ReportStatus::Processing => stats.processing_reports += 1,
                ReportStatus::Generated => stats.generated_reports += 1,
                ReportStatus::Failed => stats.failed_reports += 1,
            }
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{filter_view, InsertPosition, RecordStore, UpsertForm};

    fn report(id: &str, title: &str, report_type: ReportType, status: ReportStatus) -> Report {
        Report {
            id: RecordId::new(id),
            title: title.to_string(),
            report_type,
            date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            status,
            download_url: None,
            date_range: None,
        }
    }

    fn store() -> RecordStore<Report> {
        RecordStore::with_records(
            InsertPosition::Front,
            vec![
                report("1", "Monthly Donations Report", ReportType::Donations, ReportStatus::Generated),
                report("3", "Partner Performance Report", ReportType::Partners, ReportStatus::Processing),
                report("4", "Distribution Analysis", ReportType::Distribution, ReportStatus::Failed),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_generate_starts_processing() {
        let mut store = store();
        let mut form = UpsertForm::<ReportDraft>::new();
        form.open_new();
        *form.draft_mut() = ReportDraft {
            title: "X".to_string(),
            report_type: ReportType::Partners,
            ..Default::default()
        };
        let ctx = SubmitContext::current();
        let outcome = form.submit(&mut store, &ctx).unwrap();

        let created = store.iter().next().unwrap();
        assert_eq!(&created.id, outcome.id());
        assert_eq!(created.status, ReportStatus::Processing);
        assert_eq!(created.date, ctx.today());
        assert_eq!(created.download_url, None);
        assert_eq!(created.date_range, Some(DateRange::Monthly));
    }

    #[test]
    fn test_complete_processing_report() {
        let mut r = report("3", "Partner Performance Report", ReportType::Partners, ReportStatus::Processing);
        assert!(r.complete());
        assert_eq!(r.status, ReportStatus::Generated);
        assert_eq!(r.download_url.as_deref(), Some("#"));
    }

    #[test]
    fn test_complete_never_changes_finished_report() {
        let mut failed = report("4", "Distribution Analysis", ReportType::Distribution, ReportStatus::Failed);
        assert!(!failed.complete());
        assert_eq!(failed.status, ReportStatus::Failed);
        assert_eq!(failed.download_url, None);
    }

    #[test]
    fn test_draft_requires_title() {
        assert!(!ReportDraft::default().is_complete());
    }

    #[test]
    fn test_draft_deserializes_with_defaults() {
        let draft: ReportDraft = serde_json::from_str(r#"{"title":"Q1","dateRange":"quarterly"}"#).unwrap();
        assert_eq!(draft.report_type, ReportType::Donations);
        assert_eq!(draft.date_range, DateRange::Quarterly);
    }

    #[test]
    fn test_filter_by_type_status_and_title() {
        let store = store();
        let filter: ReportFilter = serde_json::from_value(serde_json::json!({
            "status": "Processing",
            "search": "partner"
        }))
        .unwrap();
        assert_eq!(filter_view(&store, &filter)[0].id, RecordId::new("3"));

        let none = ReportFilter {
            report_type: Selection::Only(ReportType::Inventory),
            ..Default::default()
        };
        assert!(filter_view(&store, &none).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = ReportStats::from_records(store().iter());
        assert_eq!(stats.total_reports, 3);
        assert_eq!(stats.processing_reports, 1);
        assert_eq!(stats.generated_reports, 1);
        assert_eq!(stats.failed_reports, 1);
    }
}
