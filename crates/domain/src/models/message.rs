//! Message domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::id::RecordId;
use validator::Validate;

use crate::store::{Draft, Record, RecordFilter, SearchTerm, Selection, SubmitContext};

/// Sender recorded on messages composed from the dashboard.
pub const OUTGOING_SENDER: &str = "You";

labeled_enum! {
    pub enum MessageStatus {
        Unread => "Unread",
        Read => "Read",
        Archived => "Archived",
    }
}

labeled_enum! {
    pub enum MessagePriority {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

impl Default for MessagePriority {
    fn default() -> Self {
        MessagePriority::Medium
    }
}

/// A message in the communication inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: RecordId,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub date: NaiveDateTime,
    pub status: MessageStatus,
    pub priority: MessagePriority,
}

impl Message {
    /// Marks an unread message as read.
    ///
    /// Returns `false` and leaves the status alone for read or archived
    /// messages.
    pub fn mark_read(&mut self) -> bool {
        if self.status == MessageStatus::Unread {
            self.status = MessageStatus::Read;
            true
        } else {
            false
        }
    }
}

impl Record for Message {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// Fields of the compose form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ComposeDraft {
    #[validate(length(max = 200, message = "Recipient must be at most 200 characters"))]
    pub recipient: String,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: String,

    #[validate(length(max = 10000, message = "Content must be at most 10000 characters"))]
    pub content: String,

    pub priority: MessagePriority,
}

impl Draft for ComposeDraft {
    type Record = Message;

    fn from_record(record: &Message) -> Self {
        Self {
            recipient: record.recipient.clone(),
            subject: record.subject.clone(),
            content: record.content.clone(),
            priority: record.priority,
        }
    }

    fn is_complete(&self) -> bool {
        !self.recipient.is_empty() && !self.subject.is_empty()
    }

    /// Outgoing messages are sent by the dashboard user and start out read.
    fn into_record(self, ctx: &SubmitContext) -> Message {
        Message {
            id: RecordId::unassigned(),
            sender: OUTGOING_SENDER.to_string(),
            recipient: self.recipient,
            subject: self.subject,
            content: self.content,
            date: ctx.now,
            status: MessageStatus::Read,
            priority: self.priority,
        }
    }

    fn merge_into(self, record: &mut Message) {
        record.recipient = self.recipient;
        record.subject = self.subject;
        record.content = self.content;
        record.priority = self.priority;
    }
}

/// Message list filters, read from query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageFilter {
    pub status: Selection<MessageStatus>,
    pub priority: Selection<MessagePriority>,
    pub search: SearchTerm,
}

impl RecordFilter<Message> for MessageFilter {
    fn matches(&self, message: &Message) -> bool {
        self.status.matches(&message.status)
            && self.priority.matches(&message.priority)
            && self.search.matches_any(&[&message.subject, &message.content])
    }
}
