//! Volunteer domain model.
//!
//! Like staff, a volunteer record extends a member by reference. One
//! volunteer record per member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub member_id: Uuid,
    pub skills: Vec<String>,
    /// Free-form availability description (e.g., `Weekends`).
    pub availability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteer {
    pub member_id: Uuid,
    #[serde(default)]
    pub skills: Vec<String>,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateVolunteer {
    pub skills: Option<Vec<String>>,
    pub availability: Option<String>,
}

/// A volunteer record with its member resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerView {
    #[serde(flatten)]
    pub volunteer: Volunteer,
    pub member: Member,
}
