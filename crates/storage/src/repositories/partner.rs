//! NGO partner repository.

use domain::models::partner::{
    distinct_types, NgoPartner, PartnerDraft, PartnerFilter, PartnerStats, UpdatePartnerRequest,
};
use domain::store::{FormError, SubmitContext};
use shared::id::RecordId;

use crate::metrics::OpTimer;
use crate::table::Table;

/// Repository for partner organizations.
#[derive(Clone)]
pub struct PartnerRepository {
    table: Table<NgoPartner>,
}

impl PartnerRepository {
    pub fn new(table: Table<NgoPartner>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &PartnerFilter) -> Vec<NgoPartner> {
        let timer = OpTimer::new("list_partners");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn find(&self, id: &RecordId) -> Option<NgoPartner> {
        let timer = OpTimer::new("find_partner");
        let result = self.table.find(id).await;
        timer.record();
        result
    }

    /// Add a partner whose partnership starts `ctx.today()`.
    pub async fn create(&self, draft: PartnerDraft, ctx: &SubmitContext) -> Result<NgoPartner, FormError> {
        let timer = OpTimer::new("create_partner");
        let result = self.table.submit_new(draft, ctx).await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: &RecordId,
        changes: UpdatePartnerRequest,
        ctx: &SubmitContext,
    ) -> Result<Option<NgoPartner>, FormError> {
        let timer = OpTimer::new("update_partner");
        let result = self
            .table
            .submit_edit(id, |draft: &mut PartnerDraft| changes.apply_to(draft), ctx)
            .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_partner");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }

    pub async fn types(&self) -> Vec<String> {
        self.table.read(|store| distinct_types(store)).await
    }

    pub async fn stats(&self) -> PartnerStats {
        self.table.read(|store| PartnerStats::from_records(store)).await
    }
}
