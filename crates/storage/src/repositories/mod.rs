//! Repository implementations.

pub mod dashboard;
pub mod donation;
pub mod food_item;
pub mod map;
pub mod message;
pub mod partner;
pub mod report;

pub use dashboard::DashboardRepository;
pub use donation::DonationRepository;
pub use food_item::FoodItemRepository;
pub use map::{MapRepository, SearchOutcome};
pub use message::{MessageRepository, NotificationRepository};
pub use partner::PartnerRepository;
pub use report::ReportRepository;
