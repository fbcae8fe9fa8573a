//! Communication domain model.
//!
//! Messages are append-only: once sent they are never edited. The
//! outbox lists most recent first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageChannel {
    Sms,
    Email,
    WhatsApp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub channel: MessageChannel,
    pub content: String,
    /// Members the message was addressed to.
    pub recipient_ids: Vec<Uuid>,
    pub sent_at: DateTime<Utc>,
    pub status: MessageStatus,
}

/// Input for sending a message; the store stamps id, time and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub channel: MessageChannel,
    pub content: String,
    pub recipient_ids: Vec<Uuid>,
}
