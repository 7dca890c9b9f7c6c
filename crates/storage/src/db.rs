//! In-memory database: one record store per entity plus the map view.

use std::sync::Arc;

use domain::models::{Donation, FoodItem, MapView, Message, NgoPartner, Notification, Report};
use domain::store::{InsertPosition, RecordStore, StoreError};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::seed;
use crate::table::Table;

// New donations, messages and reports show up first; everything else is
// appended.
const DONATIONS: InsertPosition = InsertPosition::Front;
const INVENTORY: InsertPosition = InsertPosition::Back;
const PARTNERS: InsertPosition = InsertPosition::Back;
const MESSAGES: InsertPosition = InsertPosition::Front;
const NOTIFICATIONS: InsertPosition = InsertPosition::Back;
const REPORTS: InsertPosition = InsertPosition::Front;

/// Shared handle to all dashboard state.
#[derive(Debug, Clone)]
pub struct Database {
    pub donations: Table<Donation>,
    pub inventory: Table<FoodItem>,
    pub partners: Table<NgoPartner>,
    pub messages: Table<Message>,
    pub notifications: Table<Notification>,
    pub reports: Table<Report>,
    pub map: Arc<RwLock<MapView>>,
}

/// Number of records per store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub donations: usize,
    pub inventory: usize,
    pub partners: usize,
    pub messages: usize,
    pub notifications: usize,
    pub reports: usize,
}

impl Database {
    /// Creates a database with empty stores.
    pub fn empty(map: MapView) -> Self {
        Self {
            donations: Table::new(RecordStore::new(DONATIONS)),
            inventory: Table::new(RecordStore::new(INVENTORY)),
            partners: Table::new(RecordStore::new(PARTNERS)),
            messages: Table::new(RecordStore::new(MESSAGES)),
            notifications: Table::new(RecordStore::new(NOTIFICATIONS)),
            reports: Table::new(RecordStore::new(REPORTS)),
            map: Arc::new(RwLock::new(map)),
        }
    }

    /// Creates a database holding the sample records.
    pub fn seeded(map: MapView) -> Result<Self, StoreError> {
        Ok(Self {
            donations: Table::new(RecordStore::with_records(DONATIONS, seed::donations())?),
            inventory: Table::new(RecordStore::with_records(INVENTORY, seed::food_items())?),
            partners: Table::new(RecordStore::with_records(PARTNERS, seed::partners())?),
            messages: Table::new(RecordStore::with_records(MESSAGES, seed::messages())?),
            notifications: Table::new(RecordStore::with_records(
                NOTIFICATIONS,
                seed::notifications(),
            )?),
            reports: Table::new(RecordStore::with_records(REPORTS, seed::reports())?),
            map: Arc::new(RwLock::new(map)),
        })
    }

    pub async fn counts(&self) -> RecordCounts {
        RecordCounts {
            donations: self.donations.len().await,
            inventory: self.inventory.len().await,
            partners: self.partners.len().await,
            messages: self.messages.len().await,
            notifications: self.notifications.len().await,
            reports: self.reports.len().await,
        }
    }
}
