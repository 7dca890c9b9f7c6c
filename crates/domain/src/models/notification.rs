//! Notification domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;

use super::message::{Message, MessagePriority, MessageStatus};
use crate::store::{Record, RecordFilter, SearchTerm, Selection};

labeled_enum! {
    /// Area of the dashboard a notification concerns.
    pub enum NotificationType {
        Donation => "Donation",
        Partner => "Partner",
        Inventory => "Inventory",
        System => "System",
    }
}

/// A system notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub date: NaiveDateTime,
    pub read: bool,
}

impl Notification {
    /// Marks the notification as read. Reading is never undone.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

impl Record for Notification {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Notification list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationFilter {
    #[serde(rename = "type")]
    pub notification_type: Selection<NotificationType>,
    pub read: Selection<bool>,
    pub search: SearchTerm,
}

impl RecordFilter<Notification> for NotificationFilter {
    fn matches(&self, notification: &Notification) -> bool {
        self.notification_type.matches(&notification.notification_type)
            && self.read.matches(&notification.read)
            && self
                .search
                .matches_any(&[&notification.title, &notification.message])
    }
}

/// Stat cards for the communication page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationStats {
    pub total_messages: usize,
    pub unread_messages: usize,
    pub high_priority_messages: usize,
    pub unread_notifications: usize,
}

impl CommunicationStats {
    pub fn from_records<'a, 'b>(
        messages: impl IntoIterator<Item = &'a Message>,
        notifications: impl IntoIterator<Item = &'b Notification>,
    ) -> Self {
        let mut stats = messages.into_iter().fold(Self::default(), |mut stats, m| {
            stats.total_messages += 1;
            if m.status == MessageStatus::Unread {
                stats.unread_messages += 1;
            }
            if m.priority == MessagePriority::High {
                stats.high_priority_messages += 1;
            }
            stats
        });
        stats.unread_notifications = notifications.into_iter().filter(|n| !n.read).count();
        stats
    }
}
