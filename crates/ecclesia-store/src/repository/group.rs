//! In-memory implementation of the group repository.
//!
//! Groups keep member references, never snapshots: the leader and the
//! participant list are validated ids, resolved at read time by the
//! projection layer.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::group::{CreateGroup, Group, UpdateGroup};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty};

impl Repository<Group> for MemoryStore {
    type Create = CreateGroup;
    type Update = UpdateGroup;

    async fn create(&self, tenant_id: Uuid, input: CreateGroup) -> EcclesiaResult<Group> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.name, "name")?;
        self.inner
            .require_member(tenant_id, input.leader_id, "leader_id")?;
        self.inner
            .require_members(tenant_id, &input.member_ids, "member_ids")?;

        let now = Utc::now();
        Ok(self.inner.groups.insert(Group {
            id: Uuid::new_v4(),
            tenant_id,
            name: input.name,
            description: input.description,
            kind: input.kind,
            leader_id: input.leader_id,
            member_ids: input.member_ids,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Group> {
        self.inner.groups.get(tenant_id, id)
    }

    async fn update(&self, tenant_id: Uuid, id: Uuid, input: UpdateGroup) -> EcclesiaResult<Group> {
        if let Some(name) = &input.name {
            require_non_empty(name, "name")?;
        }
        if let Some(leader_id) = input.leader_id {
            self.inner.require_member(tenant_id, leader_id, "leader_id")?;
        }
        if let Some(member_ids) = &input.member_ids {
            self.inner.require_members(tenant_id, member_ids, "member_ids")?;
        }

        self.inner.groups.update_with(tenant_id, id, |group| {
            if let Some(name) = input.name {
                group.name = name;
            }
            if let Some(description) = input.description {
                group.description = description;
            }
            if let Some(kind) = input.kind {
                group.kind = kind;
            }
            if let Some(leader_id) = input.leader_id {
                group.leader_id = leader_id;
            }
            if let Some(member_ids) = input.member_ids {
                group.member_ids = member_ids;
            }
            group.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.groups.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Group>> {
        Ok(self.inner.groups.list(tenant_id, pagination))
    }
}
