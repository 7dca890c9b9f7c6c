//! Food inventory domain model.
//!
//! Stock status is derived from quantity and minimum stock and is never set
//! directly; every path that changes a quantity re-derives it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;
use validator::Validate;

use crate::store::{Draft, Record, RecordFilter, SearchTerm, Selection, SubmitContext};

/// Image shown for items without their own picture.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

labeled_enum! {
    /// Stock level of an inventory item relative to its minimum.
    pub enum StockStatus {
        InStock => "In Stock",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
    }
}

impl StockStatus {
    /// Applies the stock threshold rule.
    pub fn derive(quantity: u32, min_stock: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity < min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// An item held in the food inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub min_stock: u32,
    pub expiry_date: Option<NaiveDate>,
    pub location: String,
    pub status: StockStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodItem {
    pub fn refresh_status(&mut self) {
        self.status = StockStatus::derive(self.quantity, self.min_stock);
    }

    /// Increases the quantity by `amount` units and re-derives the status.
    pub fn add_stock(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
        self.refresh_status();
    }
}

impl Record for FoodItem {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Editable inventory item fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub min_stock: u32,
    pub expiry_date: Option<NaiveDate>,
    pub location: String,
    pub sku: String,
    pub image: String,
}

impl Default for FoodItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            quantity: 0,
            unit: String::new(),
            min_stock: 0,
            expiry_date: None,
            location: String::new(),
            sku: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Draft for FoodItemDraft {
    type Record = FoodItem;

    fn from_record(record: &FoodItem) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            quantity: record.quantity,
            unit: record.unit.clone(),
            min_stock: record.min_stock,
            expiry_date: record.expiry_date,
            location: record.location.clone(),
            sku: record.sku.clone().unwrap_or_default(),
            image: record
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.category.is_empty()
    }

    fn into_record(self, _ctx: &SubmitContext) -> FoodItem {
        FoodItem {
            id: RecordId::unassigned(),
            status: StockStatus::derive(self.quantity, self.min_stock),
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            min_stock: self.min_stock,
            expiry_date: self.expiry_date,
            location: self.location,
            sku: non_empty(self.sku),
            image: non_empty(self.image),
        }
    }

    fn merge_into(self, record: &mut FoodItem) {
        record.name = self.name;
        record.category = self.category;
        record.quantity = self.quantity;
        record.unit = self.unit;
        record.min_stock = self.min_stock;
        record.expiry_date = self.expiry_date;
        record.location = self.location;
        record.sku = non_empty(self.sku);
        record.image = non_empty(self.image);
        record.refresh_status();
    }
}

/// Request payload for adding an inventory item.
///
/// Any `status` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodItemRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: String,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub min_stock: u32,

    pub expiry_date: Option<NaiveDate>,

    #[serde(default)]
    pub location: String,

    #[validate(length(max = 64, message = "SKU must be at most 64 characters"))]
    pub sku: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl CreateFoodItemRequest {
    pub fn into_draft(self) -> FoodItemDraft {
        let defaults = FoodItemDraft::default();
        FoodItemDraft {
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            min_stock: self.min_stock,
            expiry_date: self.expiry_date,
            location: self.location,
            sku: self.sku.unwrap_or_default(),
            image: self.image.unwrap_or(defaults.image),
        }
    }
}

/// Request payload for updating an inventory item (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodItemRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub quantity: Option<u32>,

    pub unit: Option<String>,

    pub min_stock: Option<u32>,

    /// `null` clears the expiry date.
    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub expiry_date: Option<Option<NaiveDate>>,

    pub location: Option<String>,

    #[validate(length(max = 64, message = "SKU must be at most 64 characters"))]
    pub sku: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl UpdateFoodItemRequest {
    pub fn apply_to(self, draft: &mut FoodItemDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            draft.unit = unit;
        }
        if let Some(min_stock) = self.min_stock {
            draft.min_stock = min_stock;
        }
        if let Some(expiry_date) = self.expiry_date {
            draft.expiry_date = expiry_date;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(sku) = self.sku {
            draft.sku = sku;
        }
        if let Some(image) = self.image {
            draft.image = image;
        }
    }
}

/// Request payload for the restock quick action.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStockRequest {
    #[validate(range(min = 1, max = 100000, message = "Amount must be between 1 and 100000"))]
    pub amount: Option<u32>,
}

/// Inventory list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FoodItemFilter {
    pub category: Selection<String>,
    pub status: Selection<StockStatus>,
    pub search: SearchTerm,
}

impl RecordFilter<FoodItem> for FoodItemFilter {
    fn matches(&self, item: &FoodItem) -> bool {
        self.category.matches(&item.category)
            && self.status.matches(&item.status)
            && self.search.matches_any(&[&item.name, &item.category])
    }
}

/// Distinct categories in first-seen order.
pub fn distinct_categories<'a>(items: impl IntoIterator<Item = &'a FoodItem>) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Stat cards for the inventory page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub categories: usize,
}

impl InventoryStats {
    pub fn from_records<'a>(items: impl IntoIterator<Item = &'a FoodItem> + Clone) -> Self {
        let mut stats = items.clone().into_iter().fold(Self::default(), |mut stats, item| {
            stats.total_items += 1;
            match item.status {
                StockStatus::LowStock => stats.low_stock_items += 1,
                StockStatus::OutOfStock => stats.out_of_stock_items += 1,
                StockStatus::InStock => {}
            }
            stats
        });
        stats.categories = distinct_categories(items).len();
        stats
    }
}
