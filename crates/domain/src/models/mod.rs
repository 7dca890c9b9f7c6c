//! Domain models for the food donation dashboard.

use thiserror::Error;

/// Error returned when parsing an enumerated value from its display label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares an enum that serializes, displays and parses as its label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err($crate::models::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod dashboard;
pub mod donation;
pub mod food_item;
pub mod map;
pub mod message;
pub mod notification;
pub mod partner;
pub mod report;

pub use dashboard::DashboardOverview;
pub use donation::{Donation, DonationDraft, DonationFilter, DonationStats};
pub use food_item::{FoodItem, FoodItemDraft, FoodItemFilter, InventoryStats, StockStatus};
pub use map::{Coordinate, LocationDetails, MapError, MapView};
pub use message::{ComposeDraft, Message, MessageFilter};
pub use notification::{CommunicationStats, Notification, NotificationFilter};
pub use partner::{NgoPartner, PartnerDraft, PartnerFilter, PartnerStats};
pub use report::{Report, ReportDraft, ReportFilter, ReportStats};
