//! Inventory operations.

use shared::id::RecordId;

use crate::models::food_item::FoodItem;
use crate::store::RecordStore;

/// Units added by the restock quick action unless configured otherwise.
pub const DEFAULT_RESTOCK_INCREMENT: u32 = 10;

/// Adds `amount` units to an item, re-deriving its status.
///
/// Returns `None` without changes when the item does not exist.
pub fn add_stock<'a>(
    store: &'a mut RecordStore<FoodItem>,
    id: &RecordId,
    amount: u32,
) -> Option<&'a FoodItem> {
    store.update(id, |item: &mut FoodItem| item.add_stock(amount))
}
