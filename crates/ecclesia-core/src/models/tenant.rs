//! Tenant domain model.
//!
//! A tenant is an isolated church organization instance. All other
//! domain entities (users, members, groups, etc.) are scoped to a
//! tenant; the tenant collection itself is global.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Trial,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    /// Human-readable name (e.g., `Église Centrale`).
    pub name: String,
    /// URL-safe unique identifier (e.g., `eglise-centrale`).
    pub slug: String,
    /// Custom domain the tenant is served under.
    pub domain: String,
    pub status: TenantStatus,
    /// Subscription plan label (e.g., `Premium`).
    pub plan: String,
    /// The user administering this tenant, if one is designated.
    pub admin_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub slug: String,
    pub domain: String,
    pub status: Option<TenantStatus>,
    pub plan: String,
    pub admin_id: Option<Uuid>,
}

/// Fields that can be updated on an existing tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub domain: Option<String>,
    pub status: Option<TenantStatus>,
    pub plan: Option<String>,
    /// `Some(Some(id))` = set, `Some(None)` = clear, `None` = no change.
    pub admin_id: Option<Option<Uuid>>,
}

/// A tenant with its admin user resolved at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantView {
    #[serde(flatten)]
    pub tenant: Tenant,
    pub admin: Option<User>,
}
