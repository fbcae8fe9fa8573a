//! In-memory implementation of the message outbox.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::message::{Message, MessageStatus, SendMessage};
use ecclesia_core::repository::{MessageOutbox, PaginatedResult, Pagination};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl MessageOutbox for MemoryStore {
    async fn send(&self, tenant_id: Uuid, input: SendMessage) -> EcclesiaResult<Message> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.content, "content")?;
        if input.recipient_ids.is_empty() {
            return Err(EcclesiaError::validation(
                "a message needs at least one recipient",
            ));
        }
        self.inner
            .require_members(tenant_id, &input.recipient_ids, "recipient_ids")?;

        // Prepend so the outbox lists most recent first.
        Ok(self.inner.messages.insert_front(Message {
            id: Uuid::new_v4(),
            tenant_id,
            channel: input.channel,
            content: input.content,
            recipient_ids: input.recipient_ids,
            sent_at: Utc::now(),
            status: MessageStatus::Sent,
        }))
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Message>> {
        Ok(self.inner.messages.list(tenant_id, pagination))
    }
}
