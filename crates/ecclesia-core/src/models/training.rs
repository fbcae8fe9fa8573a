//! Training session domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::member::Member;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParticipationStatus {
    Registered,
    Completed,
    Dropped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingParticipant {
    pub member_id: Uuid,
    pub status: ParticipationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub participants: Vec<TrainingParticipant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrainingSession {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub participants: Vec<TrainingParticipant>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTrainingSession {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub participants: Option<Vec<TrainingParticipant>>,
}

/// A participant with the member resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantView {
    pub member: Member,
    pub status: ParticipationStatus,
}

/// A training session with its roster resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingView {
    #[serde(flatten)]
    pub session: TrainingSession,
    pub roster: Vec<ParticipantView>,
}
