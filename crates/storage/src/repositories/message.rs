//! Message and notification repositories.

use domain::models::message::{ComposeDraft, Message, MessageFilter};
use domain::models::notification::{Notification, NotificationFilter};
use domain::store::{FormError, SubmitContext};
use shared::id::RecordId;

use crate::metrics::OpTimer;
use crate::table::Table;

/// Repository for inbox messages.
#[derive(Clone)]
pub struct MessageRepository {
    table: Table<Message>,
}

impl MessageRepository {
    pub fn new(table: Table<Message>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &MessageFilter) -> Vec<Message> {
        let timer = OpTimer::new("list_messages");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn find(&self, id: &RecordId) -> Option<Message> {
        self.table.find(id).await
    }

    /// Send a message composed on the dashboard.
    pub async fn send(&self, draft: ComposeDraft, ctx: &SubmitContext) -> Result<Message, FormError> {
        let timer = OpTimer::new("send_message");
        let result = self.table.submit_new(draft, ctx).await;
        timer.record();
        result
    }

    /// Mark a message as read. Read and archived messages are left alone.
    pub async fn mark_read(&self, id: &RecordId) -> Option<Message> {
        let timer = OpTimer::new("mark_message_read");
        let result = self
            .table
            .write(|store| {
                store
                    .update(id, |message: &mut Message| {
                        message.mark_read();
                    })
                    .cloned()
            })
            .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_message");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }
}

/// Repository for system notifications.
#[derive(Clone)]
pub struct NotificationRepository {
    table: Table<Notification>,
}

impl NotificationRepository {
    pub fn new(table: Table<Notification>) -> Self {
        Self { table }
    }

    pub async fn list(&self, filter: &NotificationFilter) -> Vec<Notification> {
        let timer = OpTimer::new("list_notifications");
        let result = self.table.list(filter).await;
        timer.record();
        result
    }

    pub async fn mark_read(&self, id: &RecordId) -> Option<Notification> {
        let timer = OpTimer::new("mark_notification_read");
        let result = self
            .table
            .write(|store| store.update(id, Notification::mark_read).cloned())
            .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: &RecordId) -> bool {
        let timer = OpTimer::new("delete_notification");
        let removed = self.table.remove(id).await.is_some();
        timer.record();
        removed
    }

    pub async fn unread_count(&self) -> usize {
        self.table.read(|store| store.iter().filter(|n| !n.read).count()).await
    }
}
