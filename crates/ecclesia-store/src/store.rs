//! The in-memory entity store.

use std::sync::Arc;

use uuid::Uuid;

use ecclesia_core::models::{
    audit::AuditLogEntry,
    event::PlanningEvent,
    finance::{Expense, Revenue},
    group::Group,
    material::{Material, MaterialRequest},
    media::MediaItem,
    member::Member,
    message::Message,
    newcomer::{Interaction, Newcomer},
    role::{Permission, Role},
    staff::StaffMember,
    team::ProjectTeam,
    tenant::Tenant,
    training::TrainingSession,
    user::User,
    volunteer::Volunteer,
};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::table::Table;

pub(crate) struct StoreInner {
    pub(crate) tenants: Table<Tenant>,
    pub(crate) users: Table<User>,
    pub(crate) roles: Table<Role>,
    /// Global, read-only permission catalog seeded at construction.
    pub(crate) permissions: Vec<Permission>,
    pub(crate) members: Table<Member>,
    pub(crate) groups: Table<Group>,
    pub(crate) staff: Table<StaffMember>,
    pub(crate) volunteers: Table<Volunteer>,
    pub(crate) teams: Table<ProjectTeam>,
    pub(crate) events: Table<PlanningEvent>,
    pub(crate) trainings: Table<TrainingSession>,
    pub(crate) revenues: Table<Revenue>,
    pub(crate) expenses: Table<Expense>,
    pub(crate) materials: Table<Material>,
    pub(crate) material_requests: Table<MaterialRequest>,
    pub(crate) messages: Table<Message>,
    pub(crate) newcomers: Table<Newcomer>,
    pub(crate) interactions: Table<Interaction>,
    pub(crate) media: Table<MediaItem>,
    pub(crate) audit_logs: Table<AuditLogEntry>,
}

/// The process-wide entity store. Cheap to clone; all clones share the
/// same collections.
#[derive(Clone)]
pub struct MemoryStore {
    pub(crate) inner: Arc<StoreInner>,
}

impl MemoryStore {
    /// An empty store with the default permission catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                tenants: Table::new(),
                users: Table::new(),
                roles: Table::new(),
                permissions: default_permission_catalog(),
                members: Table::new(),
                groups: Table::new(),
                staff: Table::new(),
                volunteers: Table::new(),
                teams: Table::new(),
                events: Table::new(),
                trainings: Table::new(),
                revenues: Table::new(),
                expenses: Table::new(),
                materials: Table::new(),
                material_requests: Table::new(),
                messages: Table::new(),
                newcomers: Table::new(),
                interactions: Table::new(),
                media: Table::new(),
                audit_logs: Table::new(),
            }),
        }
    }

    /// A store pre-populated with the demo tenant and its fixtures.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        crate::seed::seed_demo_tenant(&store);
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The `{module, action}` pairs grantable through roles.
fn default_permission_catalog() -> Vec<Permission> {
    let pairs = [
        ("members", "create"),
        ("members", "read"),
        ("members", "update"),
        ("members", "delete"),
        ("finances", "read"),
        ("finances", "manage"),
    ];
    pairs
        .into_iter()
        .map(|(module, action)| Permission {
            id: Uuid::new_v4(),
            module: module.into(),
            action: action.into(),
        })
        .collect()
}

// Cross-entity reference checks shared by the repository impls.
impl StoreInner {
    /// Creates under a tenant require the tenant to exist.
    pub(crate) fn require_tenant(&self, tenant_id: Uuid) -> EcclesiaResult<()> {
        if self.tenants.exists(tenant_id, tenant_id) {
            Ok(())
        } else {
            Err(EcclesiaError::not_found("tenant", tenant_id))
        }
    }

    pub(crate) fn require_member(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        field: &str,
    ) -> EcclesiaResult<()> {
        if self.members.exists(tenant_id, id) {
            Ok(())
        } else {
            Err(EcclesiaError::validation(format!(
                "{field} references unknown member {id}"
            )))
        }
    }

    pub(crate) fn require_members(
        &self,
        tenant_id: Uuid,
        ids: &[Uuid],
        field: &str,
    ) -> EcclesiaResult<()> {
        for id in ids {
            self.require_member(tenant_id, *id, field)?;
        }
        Ok(())
    }

    pub(crate) fn require_user(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        field: &str,
    ) -> EcclesiaResult<()> {
        if self.users.exists(tenant_id, id) {
            Ok(())
        } else {
            Err(EcclesiaError::validation(format!(
                "{field} references unknown user {id}"
            )))
        }
    }

    pub(crate) fn require_material(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        field: &str,
    ) -> EcclesiaResult<()> {
        if self.materials.exists(tenant_id, id) {
            Ok(())
        } else {
            Err(EcclesiaError::validation(format!(
                "{field} references unknown material {id}"
            )))
        }
    }

    /// Names the first collection still referencing a member, if any.
    /// Historical records (messages, audit entries) do not count.
    pub(crate) fn member_referenced_by(&self, tenant_id: Uuid, id: Uuid) -> Option<&'static str> {
        if self
            .groups
            .any(tenant_id, |g| g.leader_id == id || g.member_ids.contains(&id))
        {
            return Some("group");
        }
        if self
            .teams
            .any(tenant_id, |t| t.leader_id == id || t.member_ids.contains(&id))
        {
            return Some("project_team");
        }
        if self.staff.any(tenant_id, |s| s.member_id == id) {
            return Some("staff_member");
        }
        if self.volunteers.any(tenant_id, |v| v.member_id == id) {
            return Some("volunteer");
        }
        if self.events.any(tenant_id, |e| e.attendee_ids.contains(&id)) {
            return Some("planning_event");
        }
        if self
            .trainings
            .any(tenant_id, |t| t.participants.iter().any(|p| p.member_id == id))
        {
            return Some("training_session");
        }
        None
    }
}

pub(crate) fn require_non_empty(value: &str, field: &str) -> EcclesiaResult<()> {
    if value.trim().is_empty() {
        Err(EcclesiaError::validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

pub(crate) fn require_positive_amount(amount: i64) -> EcclesiaResult<()> {
    if amount <= 0 {
        Err(EcclesiaError::validation("amount must be positive"))
    } else {
        Ok(())
    }
}
