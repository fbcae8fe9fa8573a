//! In-memory implementation of the tenant repository.
//!
//! Tenant deletion cascades: every record scoped to the tenant is
//! removed with it, so no orphaned data survives.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::tenant::{CreateTenant, Tenant, TenantStatus, UpdateTenant};
use ecclesia_core::repository::{PaginatedResult, Pagination, TenantRepository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl TenantRepository for MemoryStore {
    async fn create(&self, input: CreateTenant) -> EcclesiaResult<Tenant> {
        require_non_empty(&input.name, "name")?;
        require_non_empty(&input.slug, "slug")?;
        if self.inner.tenants.find(|t| t.slug == input.slug).is_some() {
            return Err(EcclesiaError::AlreadyExists {
                entity: "tenant".into(),
                reason: format!("slug {} is taken", input.slug),
            });
        }
        // A brand-new tenant has no users yet, so an admin can only be
        // designated later via update.
        if input.admin_id.is_some() {
            return Err(EcclesiaError::validation(
                "admin_id cannot be set at creation; assign it once the user exists",
            ));
        }

        let now = Utc::now();
        Ok(self.inner.tenants.insert(Tenant {
            id: Uuid::new_v4(),
            name: input.name,
            slug: input.slug,
            domain: input.domain,
            status: input.status.unwrap_or(TenantStatus::Active),
            plan: input.plan,
            admin_id: None,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get_by_id(&self, id: Uuid) -> EcclesiaResult<Tenant> {
        self.inner.tenants.get(id, id)
    }

    async fn get_by_slug(&self, slug: &str) -> EcclesiaResult<Tenant> {
        self.inner
            .tenants
            .find(|t| t.slug == slug)
            .ok_or_else(|| EcclesiaError::not_found("tenant", slug))
    }

    async fn update(&self, id: Uuid, input: UpdateTenant) -> EcclesiaResult<Tenant> {
        if let Some(name) = &input.name {
            require_non_empty(name, "name")?;
        }
        if let Some(slug) = &input.slug {
            require_non_empty(slug, "slug")?;
            if self
                .inner
                .tenants
                .find(|t| t.slug == *slug && t.id != id)
                .is_some()
            {
                return Err(EcclesiaError::AlreadyExists {
                    entity: "tenant".into(),
                    reason: format!("slug {slug} is taken"),
                });
            }
        }
        if let Some(Some(admin_id)) = input.admin_id {
            self.inner.require_user(id, admin_id, "admin_id")?;
        }

        self.inner.tenants.update_with(id, id, |tenant| {
            if let Some(name) = input.name {
                tenant.name = name;
            }
            if let Some(slug) = input.slug {
                tenant.slug = slug;
            }
            if let Some(domain) = input.domain {
                tenant.domain = domain;
            }
            if let Some(status) = input.status {
                tenant.status = status;
            }
            if let Some(plan) = input.plan {
                tenant.plan = plan;
            }
            if let Some(admin_id) = input.admin_id {
                tenant.admin_id = admin_id;
            }
            tenant.updated_at = Utc::now();
        })
    }

    async fn delete(&self, id: Uuid) -> EcclesiaResult<()> {
        self.inner.tenants.remove(id, id)?;

        let inner = &self.inner;
        inner.users.remove_tenant(id);
        inner.roles.remove_tenant(id);
        inner.members.remove_tenant(id);
        inner.groups.remove_tenant(id);
        inner.staff.remove_tenant(id);
        inner.volunteers.remove_tenant(id);
        inner.teams.remove_tenant(id);
        inner.events.remove_tenant(id);
        inner.trainings.remove_tenant(id);
        inner.revenues.remove_tenant(id);
        inner.expenses.remove_tenant(id);
        inner.materials.remove_tenant(id);
        inner.material_requests.remove_tenant(id);
        inner.messages.remove_tenant(id);
        inner.newcomers.remove_tenant(id);
        inner.interactions.remove_tenant(id);
        inner.media.remove_tenant(id);
        inner.audit_logs.remove_tenant(id);
        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> EcclesiaResult<PaginatedResult<Tenant>> {
        Ok(self.inner.tenants.list_all(pagination))
    }
}
