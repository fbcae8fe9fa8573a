//! Newcomer follow-up domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FollowUpStatus {
    New,
    Contacted,
    Integrated,
    Lost,
}

/// A first-time visitor being followed up before (possibly) becoming a
/// member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Newcomer {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub first_visit_date: NaiveDate,
    /// How the person heard about the church (e.g., `Ami`).
    pub came_from: String,
    pub status: FollowUpStatus,
    /// The user responsible for the follow-up.
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewcomer {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub first_visit_date: NaiveDate,
    pub came_from: String,
    pub status: FollowUpStatus,
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateNewcomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub first_visit_date: Option<NaiveDate>,
    pub came_from: Option<String>,
    pub status: Option<FollowUpStatus>,
    /// `Some(Some(id))` = assign, `Some(None)` = unassign, `None` = no change.
    pub assigned_to: Option<Option<Uuid>>,
}

/// A contact made with a newcomer (call, visit, ...). Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub newcomer_id: Uuid,
    pub date: NaiveDate,
    /// Free-form contact kind (e.g., `Appel`, `Visite`).
    pub kind: String,
    pub notes: String,
    /// The user who made the contact.
    pub interactor_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInteraction {
    pub date: NaiveDate,
    pub kind: String,
    pub notes: String,
    pub interactor_id: Uuid,
}
