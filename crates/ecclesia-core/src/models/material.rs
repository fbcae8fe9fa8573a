//! Logistics domain models: materials and material requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaterialKind {
    Sound,
    Video,
    Furniture,
    Vehicle,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaterialCondition {
    Good,
    Damaged,
    InRepair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub kind: MaterialKind,
    pub total_quantity: u32,
    /// Units not currently loaned out. Never exceeds `total_quantity`.
    pub available_quantity: u32,
    pub condition: MaterialCondition,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaterial {
    pub name: String,
    pub kind: MaterialKind,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub condition: MaterialCondition,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMaterial {
    pub name: Option<String>,
    pub kind: Option<MaterialKind>,
    pub total_quantity: Option<u32>,
    pub available_quantity: Option<u32>,
    pub condition: Option<MaterialCondition>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Returned,
}

/// One line of a material request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestItem {
    pub material_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// The user who filed the request.
    pub requester_id: Uuid,
    pub event_name: String,
    pub request_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub items: Vec<RequestItem>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaterialRequest {
    pub requester_id: Uuid,
    pub event_name: String,
    pub request_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub items: Vec<RequestItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMaterialRequest {
    pub event_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub items: Option<Vec<RequestItem>>,
    pub status: Option<RequestStatus>,
}
