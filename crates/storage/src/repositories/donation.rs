//! Donation repository.

use domain::models::donation::{
    Donation, DonationDraft, DonationFilter, DonationStats, UpdateDonationRequest,
};
use domain::store::{FormError, SubmitContext};
use shared::id::RecordId;

use crate::metrics::{record_donation_recorded, OpTimer};
use crate::table::Table;

/// Repository for donation records.
#[derive(Clone)]
pub struct DonationRepository {
    table: Table<Donation>,
}

impl DonationRepository {
    pub fn new(table: Table<Donation>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &DonationFilter) -> Vec<Donation> {
        let timer = OpTimer::new("list_donations");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn find(&self, id: &RecordId) -> Option<Donation> {
        let timer = OpTimer::new("find_donation");
        let result = self.table.find(id).await;
        timer.record();
        result
    }

    /// Record a new donation dated `ctx.today()`.
    pub async fn create(&self, draft: DonationDraft, ctx: &SubmitContext) -> Result<Donation, FormError> {
        let timer = OpTimer::new("create_donation");
        let result = self.table.submit_new(draft, ctx).await;
        timer.record();
        if let Ok(donation) = &result {
            record_donation_recorded(donation.donation_type.as_str());
        }
        result
    }

    /// Merge the supplied fields into an existing donation.
    pub async fn update(
        &self,
        id: &RecordId,
        changes: UpdateDonationRequest,
        ctx: &SubmitContext,
    ) -> Result<Option<Donation>, FormError> {
        let timer = OpTimer::new("update_donation");
        let result = self
            .table
            .submit_edit(id, |draft: &mut DonationDraft| changes.apply_to(draft), ctx)
            .await;
        timer.record();
        result
    }

    /// Returns whether a record was removed.
    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_donation");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }

    pub async fn stats(&self) -> DonationStats {
        self.table.read(|store| DonationStats::from_records(store)).await
    }
}
