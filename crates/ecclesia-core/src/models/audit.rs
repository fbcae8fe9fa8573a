//! Audit log domain model. Append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// The user who performed the action.
    pub actor_id: Uuid,
    /// Action label (e.g., `DELETE_USER`).
    pub action: String,
    /// Entity kind the action touched (e.g., `user`).
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAuditEntry {
    pub actor_id: Uuid,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<Uuid>,
    pub ip_address: Option<String>,
}
