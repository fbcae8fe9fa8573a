//! Group domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::member::Member;

/// A ministry or activity group (youth, choir, intercession, ...).
///
/// The leader and the participants are member references; the resolved
/// form is [`GroupView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: String,
    /// Free-form category (e.g., `Jeunesse`, `Louange`).
    pub kind: String,
    pub leader_id: Uuid,
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub leader_id: Uuid,
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateGroup {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub leader_id: Option<Uuid>,
    pub member_ids: Option<Vec<Uuid>>,
}

/// A group with leader and participants resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    #[serde(flatten)]
    pub group: Group,
    pub leader: Member,
    pub members: Vec<Member>,
}
