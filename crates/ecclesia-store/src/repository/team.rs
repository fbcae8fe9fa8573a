//! In-memory implementation of the project team repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::team::{CreateProjectTeam, ProjectTeam, UpdateProjectTeam};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty};

impl Repository<ProjectTeam> for MemoryStore {
    type Create = CreateProjectTeam;
    type Update = UpdateProjectTeam;

    async fn create(&self, tenant_id: Uuid, input: CreateProjectTeam) -> EcclesiaResult<ProjectTeam> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.name, "name")?;
        self.inner
            .require_member(tenant_id, input.leader_id, "leader_id")?;
        self.inner
            .require_members(tenant_id, &input.member_ids, "member_ids")?;

        let now = Utc::now();
        Ok(self.inner.teams.insert(ProjectTeam {
            id: Uuid::new_v4(),
            tenant_id,
            name: input.name,
            description: input.description,
            leader_id: input.leader_id,
            member_ids: input.member_ids,
            status: input.status,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<ProjectTeam> {
        self.inner.teams.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateProjectTeam,
    ) -> EcclesiaResult<ProjectTeam> {
        if let Some(name) = &input.name {
            require_non_empty(name, "name")?;
        }
        if let Some(leader_id) = input.leader_id {
            self.inner.require_member(tenant_id, leader_id, "leader_id")?;
        }
        if let Some(member_ids) = &input.member_ids {
            self.inner.require_members(tenant_id, member_ids, "member_ids")?;
        }

        self.inner.teams.update_with(tenant_id, id, |team| {
            if let Some(name) = input.name {
                team.name = name;
            }
            if let Some(description) = input.description {
                team.description = description;
            }
            if let Some(leader_id) = input.leader_id {
                team.leader_id = leader_id;
            }
            if let Some(member_ids) = input.member_ids {
                team.member_ids = member_ids;
            }
            if let Some(status) = input.status {
                team.status = status;
            }
            team.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.teams.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<ProjectTeam>> {
        Ok(self.inner.teams.list(tenant_id, pagination))
    }
}
