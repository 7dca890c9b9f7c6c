//! Report generation and completion.

use shared::id::RecordId;

use crate::models::report::{Report, ReportDraft};
use crate::store::{FormError, RecordStore, SubmitContext, UpsertForm};

/// Delay before a generated report finishes, in milliseconds.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 3_000;

/// What happened when a scheduled completion fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The report moved from Processing to Generated.
    Completed,
    /// The report exists but had already left Processing.
    AlreadyFinished,
    /// The report was deleted before completion.
    Missing,
}

/// Inserts a new Processing report.
///
/// The caller is responsible for scheduling [`complete`].
pub fn generate(
    store: &mut RecordStore<Report>,
    draft: ReportDraft,
    ctx: &SubmitContext,
) -> Result<Report, FormError> {
    UpsertForm::submit_new(store, draft, ctx)
}

/// Completes a report if it still exists and is still processing.
pub fn complete(store: &mut RecordStore<Report>, id: &RecordId) -> CompletionOutcome {
    let mut completed = false;
    match store.update(id, |report: &mut Report| completed = report.complete()) {
        None => CompletionOutcome::Missing,
        Some(_) if completed => CompletionOutcome::Completed,
        Some(_) => CompletionOutcome::AlreadyFinished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{ReportStatus, ReportType};
    use crate::store::InsertPosition;

    fn partners_draft() -> ReportDraft {
        ReportDraft {
            title: "X".to_string(),
            report_type: ReportType::Partners,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_then_complete() {
        let mut store = RecordStore::new(InsertPosition::Front);
        let id = generate(&mut store, partners_draft(), &SubmitContext::current())
            .unwrap()
            .id;
        assert_eq!(store.get(&id).unwrap().status, ReportStatus::Processing);

        assert_eq!(complete(&mut store, &id), CompletionOutcome::Completed);
        let report = store.get(&id).unwrap();
        assert_eq!(report.status, ReportStatus::Generated);
        assert_eq!(report.download_url.as_deref(), Some("#"));

        assert_eq!(complete(&mut store, &id), CompletionOutcome::AlreadyFinished);
    }

    #[test]
    fn test_complete_after_delete_does_nothing() {
        let mut store = RecordStore::new(InsertPosition::Front);
        let id = generate(&mut store, partners_draft(), &SubmitContext::current())
            .unwrap()
            .id;
        store.remove(&id);

        assert_eq!(complete(&mut store, &id), CompletionOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn test_generate_requires_title() {
        let mut store = RecordStore::new(InsertPosition::Front);
        let result = generate(&mut store, ReportDraft::default(), &SubmitContext::current());
        assert_eq!(result, Err(FormError::Incomplete));
        assert!(store.is_empty());
    }
}
