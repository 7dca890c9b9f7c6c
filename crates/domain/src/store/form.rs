//! Add-or-edit form bound to a record store.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use shared::id::RecordId;
use thiserror::Error;

use super::{Record, RecordStore};

/// Errors raised when submitting a form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Required fields are missing")]
    Incomplete,
}

/// Clock reading shared by everything a single submit creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitContext {
    pub now: NaiveDateTime,
}

impl SubmitContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Context for the current instant.
    pub fn current() -> Self {
        Self::new(Utc::now().naive_utc())
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

/// The editable fields of a record, bound to form inputs.
pub trait Draft: Clone + Default {
    type Record: Record;

    /// Loads the editable fields of an existing record.
    fn from_record(record: &Self::Record) -> Self;

    /// Whether every required field is filled in.
    fn is_complete(&self) -> bool;

    /// Builds a new record, filling defaults from `ctx`.
    fn into_record(self, ctx: &SubmitContext) -> Self::Record;

    /// Overwrites the editable fields of `record`.
    fn merge_into(self, record: &mut Self::Record);
}

/// Result of a successful submit, carrying a copy of the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    Added(T),
    Updated(T),
    /// The record being edited no longer exists; nothing changed.
    Missing(RecordId),
}

impl<T: Record> SubmitOutcome<T> {
    pub fn id(&self) -> &RecordId {
        match self {
            SubmitOutcome::Added(record) | SubmitOutcome::Updated(record) => record.id(),
            SubmitOutcome::Missing(id) => id,
        }
    }

    /// The stored record, unless the edited record had disappeared.
    pub fn into_record(self) -> Option<T> {
        match self {
            SubmitOutcome::Added(record) | SubmitOutcome::Updated(record) => Some(record),
            SubmitOutcome::Missing(_) => None,
        }
    }
}

/// Form state: a draft, the record being edited (if any) and visibility.
#[derive(Debug, Clone, Default)]
pub struct UpsertForm<D> {
    draft: D,
    editing: Option<RecordId>,
    open: bool,
}

impl<D: Draft> UpsertForm<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            editing: None,
            open: false,
        }
    }

    /// Opens the form for a new record with default values.
    pub fn open_new(&mut self) {
        self.draft = D::default();
        self.editing = None;
        self.open = true;
    }

    /// Opens the form on an existing record.
    pub fn open_edit(&mut self, record: &D::Record) {
        self.draft = D::from_record(record);
        self.editing = Some(record.id().clone());
        self.open = true;
    }

    /// Hides the form, keeping the draft.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_complete()
    }

    /// Submits a freshly opened form holding `draft`.
    ///
    /// Equivalent to `open_new`, filling in the draft and `submit`.
    pub fn submit_new(
        store: &mut RecordStore<D::Record>,
        draft: D,
        ctx: &SubmitContext,
    ) -> Result<D::Record, FormError> {
        if !draft.is_complete() {
            return Err(FormError::Incomplete);
        }
        Ok(store.add(draft.into_record(ctx)).clone())
    }

    /// Adds or updates a record from the draft.
    ///
    /// On success the draft is reset and the form closes. An incomplete
    /// draft leaves both the form and the store untouched.
    pub fn submit(
        &mut self,
        store: &mut RecordStore<D::Record>,
        ctx: &SubmitContext,
    ) -> Result<SubmitOutcome<D::Record>, FormError> {
        if !self.can_submit() {
            return Err(FormError::Incomplete);
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match self.editing.take() {
            Some(id) => match store.update(&id, |record: &mut D::Record| draft.merge_into(record)) {
                Some(updated) => SubmitOutcome::Updated(updated.clone()),
                None => SubmitOutcome::Missing(id),
            },
            None => SubmitOutcome::Added(store.add(draft.into_record(ctx)).clone()),
        };

        self.open = false;
        Ok(outcome)
    }
}
