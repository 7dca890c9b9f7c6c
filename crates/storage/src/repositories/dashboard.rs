//! Aggregate queries spanning several stores.

use domain::models::{
    CommunicationStats, DashboardOverview, DonationStats, InventoryStats, Notification,
    PartnerStats, ReportStats,
};

use crate::db::Database;
use crate::metrics::{record_store_sizes, OpTimer};

/// Repository for cross-store summaries.
#[derive(Clone)]
pub struct DashboardRepository {
    db: Database,
}

impl DashboardRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn communication_stats(&self) -> CommunicationStats {
        let mut stats = self
            .db
            .messages
            .read(|messages| CommunicationStats::from_records(messages, std::iter::empty::<&Notification>()))
            .await;
        stats.unread_notifications = self
            .db
            .notifications
            .read(|notifications| notifications.iter().filter(|n| !n.read).count())
            .await;
        stats
    }

    /// Stat cards of every page.
    pub async fn overview(&self) -> DashboardOverview {
        let timer = OpTimer::new("dashboard_overview");
        let overview = DashboardOverview {
            donations: self.db.donations.read(|s| DonationStats::from_records(s)).await,
            inventory: self.db.inventory.read(|s| InventoryStats::from_records(s)).await,
            partners: self.db.partners.read(|s| PartnerStats::from_records(s)).await,
            communication: self.communication_stats().await,
            reports: self.db.reports.read(|s| ReportStats::from_records(s)).await,
        };
        timer.record();
        record_store_sizes(&self.db.counts().await);
        overview
    }
}
