//! Shared handle to one record store.
//!
//! Every operation takes the store lock for exactly one domain call, so
//! concurrent requests observe each mutation as a single step.

use std::sync::Arc;

use domain::store::{
    filter_view, Draft, FormError, Record, RecordFilter, RecordStore, SubmitContext, UpsertForm,
};
use shared::id::RecordId;
use tokio::sync::RwLock;

/// Cloneable, lock-protected record store.
#[derive(Debug)]
pub struct Table<T> {
    store: Arc<RwLock<RecordStore<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T> Table<T>
where
    T: Record + Send + Sync,
{
    pub fn new(store: RecordStore<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` with shared access to the store.
    pub async fn read<R>(&self, f: impl FnOnce(&RecordStore<T>) -> R) -> R {
        let store = self.store.read().await;
        f(&store)
    }

    /// Runs `f` with exclusive access to the store.
    pub async fn write<R>(&self, f: impl FnOnce(&mut RecordStore<T>) -> R) -> R {
        let mut store = self.store.write().await;
        f(&mut store)
    }

    /// Returns the records matching `filter`, in store order.
    pub async fn list<F: RecordFilter<T>>(&self, filter: &F) -> Vec<T> {
        self.read(|store| filter_view(store, filter).into_iter().cloned().collect())
            .await
    }

    pub async fn find(&self, id: &RecordId) -> Option<T> {
        self.read(|store| store.get(id).cloned()).await
    }

    pub async fn len(&self) -> usize {
        self.read(|store| store.len()).await
    }

    pub async fn is_empty(&self) -> bool {
        self.read(|store| store.is_empty()).await
    }

    pub async fn remove(&self, id: &RecordId) -> Option<T> {
        self.write(|store| store.remove(id)).await
    }

    /// Submits a new-record form with `draft`.
    ///
    /// Returns the stored record.
    pub async fn submit_new<D>(
        &self,
        draft: D,
        ctx: &SubmitContext,
    ) -> Result<T, FormError>
    where
        D: Draft<Record = T>,
    {
        self.write(|store| UpsertForm::submit_new(store, draft, ctx))
            .await
    }

    /// Opens an edit form on record `id`, lets `edit` change the draft and
    /// submits it.
    ///
    /// Returns `Ok(None)` when the record does not exist.
    pub async fn submit_edit<D>(
        &self,
        id: &RecordId,
        edit: impl FnOnce(&mut D),
        ctx: &SubmitContext,
    ) -> Result<Option<T>, FormError>
    where
        D: Draft<Record = T>,
    {
        self.write(|store| {
            let Some(record) = store.get(id) else {
                return Ok(None);
            };
            let mut form = UpsertForm::<D>::new();
            form.open_edit(record);
            edit(form.draft_mut());
            form.submit(store, ctx).map(|outcome| outcome.into_record())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::models::donation::{Donation, DonationDraft, DonationStatus, DonationType};
    use domain::store::{InsertPosition, NoFilter};

    fn donation(id: &str) -> Donation {
        Donation {
            id: RecordId::new(id),
            donor: "Food Bank".to_string(),
            amount: 1000.0,
            date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            status: DonationStatus::Completed,
            donation_type: DonationType::Food,
        }
    }

    fn table() -> Table<Donation> {
        Table::new(RecordStore::with_records(InsertPosition::Front, vec![donation("1")]).unwrap())
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let a = table();
        let b = a.clone();
        b.remove(&RecordId::new("1")).await;
        assert!(a.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_new_returns_created_record() {
        let table = table();
        let draft = DonationDraft {
            donor: "Acme".to_string(),
            amount: 300.0,
            ..Default::default()
        };
        let created = table
            .submit_new(draft, &SubmitContext::current())
            .await
            .unwrap();

        assert_eq!(created.donor, "Acme");
        assert_eq!(table.len().await, 2);
        assert_eq!(table.list(&NoFilter).await[0].id, created.id);
    }

    #[tokio::test]
    async fn test_submit_new_incomplete() {
        let table = table();
        let result = table
            .submit_new(DonationDraft::default(), &SubmitContext::current())
            .await;
        assert_eq!(result, Err(FormError::Incomplete));
        assert_eq!(table.len().await, 1);
    }

    #[tokio::test]
    async fn test_submit_edit() {
        let table = table();
        let updated = table
            .submit_edit(
                &RecordId::new("1"),
                |draft: &mut DonationDraft| draft.amount = 50.0,
                &SubmitContext::current(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.amount, 50.0);
        assert_eq!(updated.donor, "Food Bank");
    }

    #[tokio::test]
    async fn test_submit_edit_missing() {
        let table = table();
        let result = table
            .submit_edit(
                &RecordId::new("7"),
                |draft: &mut DonationDraft| draft.amount = 50.0,
                &SubmitContext::current(),
            )
            .await;
        assert_eq!(result, Ok(None));
    }
}
