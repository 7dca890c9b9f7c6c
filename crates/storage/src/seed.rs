//! Sample records loaded at start-up.

use chrono::{NaiveDate, NaiveDateTime};
use domain::models::donation::{Donation, DonationStatus, DonationType};
use domain::models::food_item::{FoodItem, StockStatus, PLACEHOLDER_IMAGE};
use domain::models::message::{Message, MessagePriority, MessageStatus};
use domain::models::notification::{Notification, NotificationType};
use domain::models::partner::{NgoPartner, PartnerStatus};
use domain::models::report::{Report, ReportStatus, ReportType, GENERATED_DOWNLOAD_URL};
use shared::id::RecordId;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

pub fn donations() -> Vec<Donation> {
    vec![
        Donation {
            id: RecordId::new("1"),
            donor: "Food Bank".to_string(),
            amount: 1000.0,
            date: date(2024, 3, 31),
            status: DonationStatus::Completed,
            donation_type: DonationType::Food,
        },
        Donation {
            id: RecordId::new("2"),
            donor: "Local Restaurant".to_string(),
            amount: 500.0,
            date: date(2024, 3, 30),
            status: DonationStatus::Pending,
            donation_type: DonationType::Food,
        },
        Donation {
            id: RecordId::new("3"),
            donor: "Individual".to_string(),
            amount: 200.0,
            date: date(2024, 3, 29),
            status: DonationStatus::Failed,
            donation_type: DonationType::Money,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn food_item(
    id: &str,
    name: &str,
    category: &str,
    quantity: u32,
    unit: &str,
    min_stock: u32,
    expiry_date: NaiveDate,
    location: &str,
    sku: &str,
) -> FoodItem {
    FoodItem {
        id: RecordId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit: unit.to_string(),
        min_stock,
        expiry_date: Some(expiry_date),
        location: location.to_string(),
        status: StockStatus::derive(quantity, min_stock),
        sku: Some(sku.to_string()),
        image: Some(PLACEHOLDER_IMAGE.to_string()),
    }
}

pub fn food_items() -> Vec<FoodItem> {
    vec![
        food_item("1", "Rice", "Grains", 100, "kg", 20, date(2024, 12, 31), "Storage A", "GR-RICE-001"),
        food_item(
            "2",
            "Canned Beans",
            "Canned Goods",
            15,
            "cans",
            30,
            date(2025, 6, 30),
            "Storage B",
            "CG-BEAN-002",
        ),
        food_item("3", "Pasta", "Grains", 0, "kg", 10, date(2025, 1, 15), "Storage A", "GR-PASTA-003"),
    ]
}

pub fn partners() -> Vec<NgoPartner> {
    vec![
        NgoPartner {
            id: RecordId::new("1"),
            name: "Food for All Foundation".to_string(),
            partner_type: "Food Bank".to_string(),
            contact_person: "Sarah Johnson".to_string(),
            email: "sarah@foodforall.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            status: PartnerStatus::Active,
            partnership_date: date(2023, 1, 15),
            last_interaction: date(2024, 3, 28),
            total_donations: 1500,
            logo: None,
        },
        NgoPartner {
            id: RecordId::new("2"),
            name: "Community Care Initiative".to_string(),
            partner_type: "Local NGO".to_string(),
            contact_person: "Michael Chen".to_string(),
            email: "michael@communitycare.org".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            location: "Los Angeles, CA".to_string(),
            status: PartnerStatus::Active,
            partnership_date: date(2023, 6, 20),
            last_interaction: date(2024, 3, 25),
            total_donations: 800,
            logo: None,
        },
        NgoPartner {
            id: RecordId::new("3"),
            name: "Global Hunger Relief".to_string(),
            partner_type: "International NGO".to_string(),
            contact_person: "Emma Wilson".to_string(),
            email: "emma@globalhunger.org".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            location: "Chicago, IL".to_string(),
            status: PartnerStatus::Pending,
            partnership_date: date(2024, 2, 10),
            last_interaction: date(2024, 3, 20),
            total_donations: 0,
            logo: None,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: RecordId::new("1"),
            sender: "Sarah Johnson".to_string(),
            recipient: "You".to_string(),
            subject: "New Donation Available".to_string(),
            content: "We have a large donation of fresh vegetables available for pickup.".to_string(),
            date: timestamp(2024, 3, 31, 10, 30),
            status: MessageStatus::Unread,
            priority: MessagePriority::High,
        },
        Message {
            id: RecordId::new("2"),
            sender: "You".to_string(),
            recipient: "Michael Chen".to_string(),
            subject: "Partnership Agreement".to_string(),
            content: "Thank you for your interest in partnering with us. Please review the attached agreement."
                .to_string(),
            date: timestamp(2024, 3, 30, 14, 45),
            status: MessageStatus::Read,
            priority: MessagePriority::Medium,
        },
        Message {
            id: RecordId::new("3"),
            sender: "System".to_string(),
            recipient: "You".to_string(),
            subject: "Inventory Alert".to_string(),
            content: "Low stock alert for canned goods.".to_string(),
            date: timestamp(2024, 3, 29, 9, 15),
            status: MessageStatus::Read,
            priority: MessagePriority::High,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: RecordId::new("1"),
            notification_type: NotificationType::Donation,
            title: "New Donation Received".to_string(),
            message: "Food for All Foundation has made a new donation of 100kg rice.".to_string(),
            date: timestamp(2024, 3, 31, 11, 0),
            read: false,
        },
        Notification {
            id: RecordId::new("2"),
            notification_type: NotificationType::Partner,
            title: "New Partner Registration".to_string(),
            message: "Global Hunger Relief has registered as a new partner.".to_string(),
            date: timestamp(2024, 3, 30, 15, 30),
            read: true,
        },
        Notification {
            id: RecordId::new("3"),
            notification_type: NotificationType::Inventory,
            title: "Low Stock Alert".to_string(),
            message: "Canned beans are running low on stock.".to_string(),
            date: timestamp(2024, 3, 29, 10, 0),
            read: true,
        },
    ]
}

/// The seeded Processing report has no scheduled completion and stays
/// Processing until deleted.
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: RecordId::new("1"),
            title: "Monthly Donations Report".to_string(),
            report_type: ReportType::Donations,
            date: date(2024, 3, 31),
            status: ReportStatus::Generated,
            download_url: Some(GENERATED_DOWNLOAD_URL.to_string()),
            date_range: None,
        },
        Report {
            id: RecordId::new("2"),
            title: "Inventory Status Report".to_string(),
            report_type: ReportType::Inventory,
            date: date(2024, 3, 30),
            status: ReportStatus::Generated,
            download_url: Some(GENERATED_DOWNLOAD_URL.to_string()),
            date_range: None,
        },
        Report {
            id: RecordId::new("3"),
            title: "Partner Performance Report".to_string(),
            report_type: ReportType::Partners,
            date: date(2024, 3, 29),
            status: ReportStatus::Processing,
            download_url: None,
            date_range: None,
        },
        Report {
            id: RecordId::new("4"),
            title: "Distribution Analysis".to_string(),
            report_type: ReportType::Distribution,
            date: date(2024, 3, 28),
            status: ReportStatus::Failed,
            download_url: None,
            date_range: None,
        },
    ]
}
