//! In-memory implementations of the role repository and the global
//! permission catalog.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::role::{CreateRole, Permission, Role, UpdateRole};
use ecclesia_core::repository::{PaginatedResult, Pagination, PermissionCatalog, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl MemoryStore {
    fn require_permissions(&self, ids: &[Uuid]) -> EcclesiaResult<()> {
        for id in ids {
            if !self.inner.permissions.iter().any(|p| p.id == *id) {
                return Err(EcclesiaError::validation(format!(
                    "permission_ids references unknown permission {id}"
                )));
            }
        }
        Ok(())
    }
}

impl Repository<Role> for MemoryStore {
    type Create = CreateRole;
    type Update = UpdateRole;

    async fn create(&self, tenant_id: Uuid, input: CreateRole) -> EcclesiaResult<Role> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.name, "name")?;
        self.require_permissions(&input.permission_ids)?;
        if self.inner.roles.any(tenant_id, |r| r.name == input.name) {
            return Err(EcclesiaError::AlreadyExists {
                entity: "role".into(),
                reason: format!("role {} already defined", input.name),
            });
        }

        let now = Utc::now();
        Ok(self.inner.roles.insert(Role {
            id: Uuid::new_v4(),
            tenant_id,
            name: input.name,
            description: input.description,
            permission_ids: input.permission_ids,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Role> {
        self.inner.roles.get(tenant_id, id)
    }

    async fn update(&self, tenant_id: Uuid, id: Uuid, input: UpdateRole) -> EcclesiaResult<Role> {
        if let Some(name) = &input.name {
            require_non_empty(name, "name")?;
            if self
                .inner
                .roles
                .any(tenant_id, |r| r.name == *name && r.id != id)
            {
                return Err(EcclesiaError::AlreadyExists {
                    entity: "role".into(),
                    reason: format!("role {name} already defined"),
                });
            }
        }
        if let Some(ids) = &input.permission_ids {
            self.require_permissions(ids)?;
        }

        self.inner.roles.update_with(tenant_id, id, |role| {
            if let Some(name) = input.name {
                role.name = name;
            }
            if let Some(description) = input.description {
                role.description = description;
            }
            if let Some(permission_ids) = input.permission_ids {
                role.permission_ids = permission_ids;
            }
            role.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.roles.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Role>> {
        Ok(self.inner.roles.list(tenant_id, pagination))
    }
}

impl PermissionCatalog for MemoryStore {
    async fn list_permissions(&self) -> EcclesiaResult<Vec<Permission>> {
        Ok(self.inner.permissions.clone())
    }
}
