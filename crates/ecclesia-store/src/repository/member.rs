//! In-memory implementation of the member repository.
//!
//! Members are the most-referenced entity; deleting one that is still
//! referenced by a group, team, staff record, volunteer record, event
//! or training session is blocked with a `Conflict`.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::member::{CreateMember, Member, UpdateMember};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl Repository<Member> for MemoryStore {
    type Create = CreateMember;
    type Update = UpdateMember;

    async fn create(&self, tenant_id: Uuid, input: CreateMember) -> EcclesiaResult<Member> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.first_name, "first_name")?;
        require_non_empty(&input.last_name, "last_name")?;

        let now = Utc::now();
        Ok(self.inner.members.insert(Member {
            id: Uuid::new_v4(),
            tenant_id,
            first_name: input.first_name,
            last_name: input.last_name,
            gender: input.gender,
            birthdate: input.birthdate,
            email: input.email,
            phone: input.phone,
            address: input.address,
            photo_url: input.photo_url,
            civil_status: input.civil_status,
            status: input.status,
            spiritual_status: input.spiritual_status,
            joined_at: input.joined_at,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Member> {
        self.inner.members.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateMember,
    ) -> EcclesiaResult<Member> {
        if let Some(first_name) = &input.first_name {
            require_non_empty(first_name, "first_name")?;
        }
        if let Some(last_name) = &input.last_name {
            require_non_empty(last_name, "last_name")?;
        }

        self.inner.members.update_with(tenant_id, id, |member| {
            if let Some(first_name) = input.first_name {
                member.first_name = first_name;
            }
            if let Some(last_name) = input.last_name {
                member.last_name = last_name;
            }
            if let Some(gender) = input.gender {
                member.gender = gender;
            }
            if let Some(birthdate) = input.birthdate {
                member.birthdate = birthdate;
            }
            if let Some(email) = input.email {
                member.email = email;
            }
            if let Some(phone) = input.phone {
                member.phone = phone;
            }
            if let Some(address) = input.address {
                member.address = address;
            }
            if let Some(photo_url) = input.photo_url {
                member.photo_url = photo_url;
            }
            if let Some(civil_status) = input.civil_status {
                member.civil_status = civil_status;
            }
            if let Some(status) = input.status {
                member.status = status;
            }
            if let Some(spiritual_status) = input.spiritual_status {
                member.spiritual_status = spiritual_status;
            }
            if let Some(joined_at) = input.joined_at {
                member.joined_at = joined_at;
            }
            member.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        if let Some(referencing) = self.inner.member_referenced_by(tenant_id, id) {
            return Err(EcclesiaError::Conflict {
                entity: "member".into(),
                reason: format!("member is still referenced by a {referencing}"),
            });
        }
        self.inner.members.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Member>> {
        Ok(self.inner.members.list(tenant_id, pagination))
    }
}
