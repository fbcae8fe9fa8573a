//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Tenant-scoped repositories
//! require a `tenant_id` parameter to enforce data isolation: a lookup
//! for a record that exists under another tenant fails with
//! [`crate::EcclesiaError::TenantMismatch`], never with silent success.
//!
//! The uniform CRUD contract is the generic [`Repository`] trait; one
//! implementation per entity type lives in `ecclesia-store`. Entities
//! with narrower lifecycles (messages, interactions, audit entries) get
//! dedicated append-only traits instead.

use uuid::Uuid;

use crate::error::EcclesiaResult;
use crate::models::{
    audit::{AuditLogEntry, RecordAuditEntry},
    event::PlanningEvent,
    finance::{Expense, Revenue},
    group::{Group, GroupView},
    material::{Material, MaterialRequest},
    media::MediaItem,
    member::Member,
    message::{Message, SendMessage},
    newcomer::{CreateInteraction, Interaction, Newcomer},
    role::{Permission, Role, RoleView},
    staff::{StaffMember, StaffView},
    team::{ProjectTeam, TeamView},
    tenant::{CreateTenant, Tenant, TenantView, UpdateTenant},
    training::{TrainingSession, TrainingView},
    user::User,
    volunteer::{Volunteer, VolunteerView},
};

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "Pagination::default_limit")]
    pub limit: u64,
}

impl Pagination {
    fn default_limit() -> u64 {
        50
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::default_limit(),
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl<T> PaginatedResult<T> {
    /// Maps the item type, keeping the paging envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// A stored record: uniquely identified, scoped to a tenant.
///
/// Tenants implement this too, with `tenant_id() == id()`, so the same
/// storage machinery applies to the global tenant collection.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in error messages and audit entries.
    const ENTITY: &'static str;

    fn id(&self) -> Uuid;
    fn tenant_id(&self) -> Uuid;
}

// ---------------------------------------------------------------------------
// Tenant (global scope)
// ---------------------------------------------------------------------------

pub trait TenantRepository: Send + Sync {
    fn create(&self, input: CreateTenant) -> impl Future<Output = EcclesiaResult<Tenant>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = EcclesiaResult<Tenant>> + Send;
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = EcclesiaResult<Tenant>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateTenant,
    ) -> impl Future<Output = EcclesiaResult<Tenant>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = EcclesiaResult<()>> + Send;
    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<Tenant>>> + Send;
}

// ---------------------------------------------------------------------------
// Uniform tenant-scoped CRUD
// ---------------------------------------------------------------------------

/// The uniform CRUD contract for a tenant-scoped entity type.
///
/// `create` validates the input (including that every referenced id
/// exists in the same tenant), assigns a fresh id and timestamps, and
/// appends the record in insertion order. `update` patches the matching
/// record; `delete` removes it. Both fail with `NotFound` on missing
/// ids — the silent no-op of a naive mock layer is deliberately not
/// part of this contract.
pub trait Repository<T: Record>: Send + Sync {
    type Create: Send;
    type Update: Send;

    fn create(
        &self,
        tenant_id: Uuid,
        input: Self::Create,
    ) -> impl Future<Output = EcclesiaResult<T>> + Send;
    fn get(&self, tenant_id: Uuid, id: Uuid) -> impl Future<Output = EcclesiaResult<T>> + Send;
    fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: Self::Update,
    ) -> impl Future<Output = EcclesiaResult<T>> + Send;
    fn delete(&self, tenant_id: Uuid, id: Uuid) -> impl Future<Output = EcclesiaResult<()>> + Send;
    fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<T>>> + Send;
}

// ---------------------------------------------------------------------------
// Append-only collections
// ---------------------------------------------------------------------------

/// Message outbox: send and list, most recent first. Sent messages are
/// never edited or deleted.
pub trait MessageOutbox: Send + Sync {
    fn send(
        &self,
        tenant_id: Uuid,
        input: SendMessage,
    ) -> impl Future<Output = EcclesiaResult<Message>> + Send;
    fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<Message>>> + Send;
}

/// Follow-up interactions, recorded per newcomer.
pub trait InteractionLog: Send + Sync {
    fn record(
        &self,
        tenant_id: Uuid,
        newcomer_id: Uuid,
        input: CreateInteraction,
    ) -> impl Future<Output = EcclesiaResult<Interaction>> + Send;
    /// All interactions for one newcomer, oldest first.
    fn list_for(
        &self,
        tenant_id: Uuid,
        newcomer_id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<Vec<Interaction>>> + Send;
}

/// Tenant-scoped audit trail.
pub trait AuditTrail: Send + Sync {
    fn record(
        &self,
        tenant_id: Uuid,
        input: RecordAuditEntry,
    ) -> impl Future<Output = EcclesiaResult<AuditLogEntry>> + Send;
    fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<AuditLogEntry>>> + Send;
}

/// The global permission catalog. Read-only; seeded at store creation.
pub trait PermissionCatalog: Send + Sync {
    fn list_permissions(&self) -> impl Future<Output = EcclesiaResult<Vec<Permission>>> + Send;
}

// ---------------------------------------------------------------------------
// Read-time projections
// ---------------------------------------------------------------------------

/// Read-time joins over the id references kept in storage.
///
/// Views always reflect the current state of the referenced records: an
/// edit to a member is visible through every group, team, staff and
/// volunteer view that references it.
pub trait ProjectionReader: Send + Sync {
    fn tenant_view(&self, id: Uuid) -> impl Future<Output = EcclesiaResult<TenantView>> + Send;

    fn role_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<RoleView>> + Send;
    fn list_role_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<RoleView>>> + Send;

    fn group_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<GroupView>> + Send;
    fn list_group_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<GroupView>>> + Send;

    fn team_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<TeamView>> + Send;
    fn list_team_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<TeamView>>> + Send;

    fn staff_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<StaffView>> + Send;
    fn list_staff_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<StaffView>>> + Send;

    fn volunteer_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<VolunteerView>> + Send;
    fn list_volunteer_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<VolunteerView>>> + Send;

    fn training_view(
        &self,
        tenant_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = EcclesiaResult<TrainingView>> + Send;
    fn list_training_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> impl Future<Output = EcclesiaResult<PaginatedResult<TrainingView>>> + Send;
}

// ---------------------------------------------------------------------------
// Record impls
// ---------------------------------------------------------------------------

macro_rules! impl_record {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const ENTITY: &'static str = $name;

                fn id(&self) -> Uuid {
                    self.id
                }

                fn tenant_id(&self) -> Uuid {
                    self.tenant_id
                }
            }
        )*
    };
}

impl_record! {
    User => "user",
    Role => "role",
    Member => "member",
    Group => "group",
    StaffMember => "staff_member",
    Volunteer => "volunteer",
    ProjectTeam => "project_team",
    PlanningEvent => "planning_event",
    TrainingSession => "training_session",
    Revenue => "revenue",
    Expense => "expense",
    Material => "material",
    MaterialRequest => "material_request",
    Message => "message",
    Newcomer => "newcomer",
    Interaction => "interaction",
    MediaItem => "media_item",
    AuditLogEntry => "audit_log_entry",
}

// The tenant collection is global; a tenant scopes itself.
impl Record for Tenant {
    const ENTITY: &'static str = "tenant";

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> Uuid {
        self.id
    }
}
