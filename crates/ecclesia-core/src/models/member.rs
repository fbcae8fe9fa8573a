//! Member domain model.
//!
//! Members are the base entity of the congregation registry. Staff and
//! volunteer records reference a member by id rather than duplicating
//! its fields, so a member edit is visible everywhere.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CivilStatus {
    Single,
    Married,
    Widowed,
    Divorced,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Inactive,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpiritualStatus {
    Visitor,
    NewConvert,
    Baptized,
    ActiveMember,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo_url: Option<String>,
    pub civil_status: CivilStatus,
    pub status: MemberStatus,
    pub spiritual_status: SpiritualStatus,
    /// Date the person joined the congregation.
    pub joined_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo_url: Option<String>,
    pub civil_status: CivilStatus,
    pub status: MemberStatus,
    pub spiritual_status: SpiritualStatus,
    pub joined_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMember {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// `Some(Some(url))` = set, `Some(None)` = clear, `None` = no change.
    pub photo_url: Option<Option<String>>,
    pub civil_status: Option<CivilStatus>,
    pub status: Option<MemberStatus>,
    pub spiritual_status: Option<SpiritualStatus>,
    pub joined_at: Option<NaiveDate>,
}
