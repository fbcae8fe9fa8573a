//! In-memory implementation of the staff repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::staff::{CreateStaffMember, StaffMember, UpdateStaffMember};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl Repository<StaffMember> for MemoryStore {
    type Create = CreateStaffMember;
    type Update = UpdateStaffMember;

    async fn create(&self, tenant_id: Uuid, input: CreateStaffMember) -> EcclesiaResult<StaffMember> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.position, "position")?;
        self.inner
            .require_member(tenant_id, input.member_id, "member_id")?;
        if self
            .inner
            .staff
            .any(tenant_id, |s| s.member_id == input.member_id)
        {
            return Err(EcclesiaError::AlreadyExists {
                entity: "staff_member".into(),
                reason: format!("member {} already has a staff record", input.member_id),
            });
        }

        let now = Utc::now();
        Ok(self.inner.staff.insert(StaffMember {
            id: Uuid::new_v4(),
            tenant_id,
            member_id: input.member_id,
            position: input.position,
            department: input.department,
            hired_at: input.hired_at,
            status: input.status,
            assignments: input.assignments,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<StaffMember> {
        self.inner.staff.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateStaffMember,
    ) -> EcclesiaResult<StaffMember> {
        if let Some(position) = &input.position {
            require_non_empty(position, "position")?;
        }

        self.inner.staff.update_with(tenant_id, id, |staff| {
            if let Some(position) = input.position {
                staff.position = position;
            }
            if let Some(department) = input.department {
                staff.department = department;
            }
            if let Some(hired_at) = input.hired_at {
                staff.hired_at = hired_at;
            }
            if let Some(status) = input.status {
                staff.status = status;
            }
            if let Some(assignments) = input.assignments {
                staff.assignments = assignments;
            }
            staff.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.staff.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<StaffMember>> {
        Ok(self.inner.staff.list(tenant_id, pagination))
    }
}
