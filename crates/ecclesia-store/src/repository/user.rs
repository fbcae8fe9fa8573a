//! In-memory implementation of the user repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::user::{CreateUser, UpdateUser, User};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl Repository<User> for MemoryStore {
    type Create = CreateUser;
    type Update = UpdateUser;

    async fn create(&self, tenant_id: Uuid, input: CreateUser) -> EcclesiaResult<User> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.first_name, "first_name")?;
        require_non_empty(&input.last_name, "last_name")?;
        require_non_empty(&input.email, "email")?;
        if self.inner.users.any(tenant_id, |u| u.email == input.email) {
            return Err(EcclesiaError::AlreadyExists {
                entity: "user".into(),
                reason: format!("email {} is taken", input.email),
            });
        }

        let now = Utc::now();
        Ok(self.inner.users.insert(User {
            id: Uuid::new_v4(),
            tenant_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            role: input.role,
            active: input.active,
            multi_site: input.multi_site,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<User> {
        self.inner.users.get(tenant_id, id)
    }

    async fn update(&self, tenant_id: Uuid, id: Uuid, input: UpdateUser) -> EcclesiaResult<User> {
        if let Some(email) = &input.email {
            require_non_empty(email, "email")?;
            if self
                .inner
                .users
                .any(tenant_id, |u| u.email == *email && u.id != id)
            {
                return Err(EcclesiaError::AlreadyExists {
                    entity: "user".into(),
                    reason: format!("email {email} is taken"),
                });
            }
        }

        self.inner.users.update_with(tenant_id, id, |user| {
            if let Some(first_name) = input.first_name {
                user.first_name = first_name;
            }
            if let Some(last_name) = input.last_name {
                user.last_name = last_name;
            }
            if let Some(email) = input.email {
                user.email = email;
            }
            if let Some(role) = input.role {
                user.role = role;
            }
            if let Some(active) = input.active {
                user.active = active;
            }
            if let Some(multi_site) = input.multi_site {
                user.multi_site = multi_site;
            }
            user.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        // Active responsibilities block deletion; historical references
        // (sent messages, audit entries, uploads) do not.
        if self
            .inner
            .tenants
            .find(|t| t.id == tenant_id && t.admin_id == Some(id))
            .is_some()
        {
            return Err(EcclesiaError::Conflict {
                entity: "user".into(),
                reason: "user is the tenant admin".into(),
            });
        }
        if self
            .inner
            .newcomers
            .any(tenant_id, |n| n.assigned_to == Some(id))
        {
            return Err(EcclesiaError::Conflict {
                entity: "user".into(),
                reason: "user is assigned to newcomer follow-ups".into(),
            });
        }
        if self
            .inner
            .material_requests
            .any(tenant_id, |r| r.requester_id == id)
        {
            return Err(EcclesiaError::Conflict {
                entity: "user".into(),
                reason: "user has material requests on file".into(),
            });
        }

        self.inner.users.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<User>> {
        Ok(self.inner.users.list(tenant_id, pagination))
    }
}
