//! Planning event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar entry (service, rehearsal, concert, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningEvent {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    /// Free-form category (e.g., `Service`, `Répétition`).
    pub category: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    pub attendee_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanningEvent {
    pub title: String,
    pub category: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub attendee_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePlanningEvent {
    pub title: Option<String>,
    pub category: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub attendee_ids: Option<Vec<Uuid>>,
}
