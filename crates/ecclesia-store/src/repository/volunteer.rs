//! In-memory implementation of the volunteer repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::MemoryStore;

impl Repository<Volunteer> for MemoryStore {
    type Create = CreateVolunteer;
    type Update = UpdateVolunteer;

    async fn create(&self, tenant_id: Uuid, input: CreateVolunteer) -> EcclesiaResult<Volunteer> {
        self.inner.require_tenant(tenant_id)?;
        self.inner
            .require_member(tenant_id, input.member_id, "member_id")?;
        if self
            .inner
            .volunteers
            .any(tenant_id, |v| v.member_id == input.member_id)
        {
            return Err(EcclesiaError::AlreadyExists {
                entity: "volunteer".into(),
                reason: format!("member {} is already a volunteer", input.member_id),
            });
        }

        let now = Utc::now();
        Ok(self.inner.volunteers.insert(Volunteer {
            id: Uuid::new_v4(),
            tenant_id,
            member_id: input.member_id,
            skills: input.skills,
            availability: input.availability,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Volunteer> {
        self.inner.volunteers.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateVolunteer,
    ) -> EcclesiaResult<Volunteer> {
        self.inner.volunteers.update_with(tenant_id, id, |volunteer| {
            if let Some(skills) = input.skills {
                volunteer.skills = skills;
            }
            if let Some(availability) = input.availability {
                volunteer.availability = availability;
            }
            volunteer.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.volunteers.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Volunteer>> {
        Ok(self.inner.volunteers.list(tenant_id, pagination))
    }
}
