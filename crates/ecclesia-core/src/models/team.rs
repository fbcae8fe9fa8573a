//! Project team domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamStatus {
    Active,
    OnHold,
    Completed,
}

/// A project team (welcome desk, building works, ...). Same reference
/// shape as [`crate::models::group::Group`] but with a lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTeam {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: String,
    pub leader_id: Uuid,
    pub member_ids: Vec<Uuid>,
    pub status: TeamStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectTeam {
    pub name: String,
    pub description: String,
    pub leader_id: Uuid,
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
    pub status: TeamStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProjectTeam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub leader_id: Option<Uuid>,
    pub member_ids: Option<Vec<Uuid>>,
    pub status: Option<TeamStatus>,
}

/// A team with leader and participants resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamView {
    #[serde(flatten)]
    pub team: ProjectTeam,
    pub leader: Member,
    pub members: Vec<Member>,
}
