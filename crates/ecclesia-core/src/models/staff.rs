//! Staff domain model.
//!
//! A staff record extends a member with employment fields. Exactly one
//! staff record may exist per member.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StaffStatus {
    Employee,
    Volunteer,
    Contractor,
}

/// A ministry assignment carried by a staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffAssignment {
    pub ministry: String,
    pub since: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// The member this staff record extends.
    pub member_id: Uuid,
    pub position: String,
    pub department: String,
    pub hired_at: NaiveDate,
    pub status: StaffStatus,
    pub assignments: Vec<StaffAssignment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaffMember {
    pub member_id: Uuid,
    pub position: String,
    pub department: String,
    pub hired_at: NaiveDate,
    pub status: StaffStatus,
    #[serde(default)]
    pub assignments: Vec<StaffAssignment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateStaffMember {
    pub position: Option<String>,
    pub department: Option<String>,
    pub hired_at: Option<NaiveDate>,
    pub status: Option<StaffStatus>,
    pub assignments: Option<Vec<StaffAssignment>>,
}

/// A staff record with its member resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffView {
    #[serde(flatten)]
    pub staff: StaffMember,
    pub member: Member,
}
