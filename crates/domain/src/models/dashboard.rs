//! Dashboard overview model.

use serde::Serialize;

use super::donation::DonationStats;
use super::food_item::InventoryStats;
use super::notification::CommunicationStats;
use super::partner::PartnerStats;
use super::report::ReportStats;

/// Stat cards of every page, shown together on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub donations: DonationStats,
    pub inventory: InventoryStats,
    pub partners: PartnerStats,
    pub communication: CommunicationStats,
    pub reports: ReportStats,
}
