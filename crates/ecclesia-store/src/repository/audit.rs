//! In-memory implementation of the audit trail. Append-only, listed
//! most recent first.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::audit::{AuditLogEntry, RecordAuditEntry};
use ecclesia_core::repository::{AuditTrail, PaginatedResult, Pagination};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty};

impl AuditTrail for MemoryStore {
    async fn record(
        &self,
        tenant_id: Uuid,
        input: RecordAuditEntry,
    ) -> EcclesiaResult<AuditLogEntry> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.action, "action")?;
        self.inner
            .require_user(tenant_id, input.actor_id, "actor_id")?;

        Ok(self.inner.audit_logs.insert_front(AuditLogEntry {
            id: Uuid::new_v4(),
            tenant_id,
            actor_id: input.actor_id,
            action: input.action,
            entity: input.entity,
            entity_id: input.entity_id,
            ip_address: input.ip_address,
            recorded_at: Utc::now(),
        }))
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<AuditLogEntry>> {
        Ok(self.inner.audit_logs.list(tenant_id, pagination))
    }
}
