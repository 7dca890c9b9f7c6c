//! Food inventory repository.

use domain::models::food_item::{
    distinct_categories, FoodItem, FoodItemDraft, FoodItemFilter, InventoryStats,
    UpdateFoodItemRequest,
};
use domain::services::inventory;
use domain::store::{FormError, SubmitContext};
use shared::id::RecordId;

use crate::metrics::{record_stock_added, OpTimer};
use crate::table::Table;

/// Repository for inventory items.
#[derive(Clone)]
pub struct FoodItemRepository {
    table: Table<FoodItem>,
}

impl FoodItemRepository {
    pub fn new(table: Table<FoodItem>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &FoodItemFilter) -> Vec<FoodItem> {
        let timer = OpTimer::new("list_food_items");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn find(&self, id: &RecordId) -> Option<FoodItem> {
        let timer = OpTimer::new("find_food_item");
        let result = self.table.find(id).await;
        timer.record();
        result
    }

    pub async fn create(&self, draft: FoodItemDraft, ctx: &SubmitContext) -> Result<FoodItem, FormError> {
        let timer = OpTimer::new("create_food_item");
        let result = self.table.submit_new(draft, ctx).await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: &RecordId,
        changes: UpdateFoodItemRequest,
        ctx: &SubmitContext,
    ) -> Result<Option<FoodItem>, FormError> {
        let timer = OpTimer::new("update_food_item");
        let result = self
            .table
            .submit_edit(id, |draft: &mut FoodItemDraft| changes.apply_to(draft), ctx)
            .await;
        timer.record();
        result
    }

    /// Restock an item by `amount` units.
    pub async fn add_stock(&self, id: &RecordId, amount: u32) -> Option<FoodItem> {
        let timer = OpTimer::new("add_stock");
        let result = self
            .table
            .write(|store| inventory::add_stock(store, id, amount).cloned())
            .await;
        timer.record();
        if result.is_some() {
            record_stock_added(amount);
        }
        result
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_food_item");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }

    pub async fn categories(&self) -> Vec<String> {
        self.table.read(|store| distinct_categories(store)).await
    }

    pub async fn stats(&self) -> InventoryStats {
        self.table.read(|store| InventoryStats::from_records(store)).await
    }
}
