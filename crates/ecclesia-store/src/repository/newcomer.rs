//! In-memory implementations of the newcomer repository and the
//! follow-up interaction log.
//!
//! Interactions belong to their newcomer: deleting a newcomer removes
//! its interactions with it.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::newcomer::{
    CreateInteraction, CreateNewcomer, Interaction, Newcomer, UpdateNewcomer,
};
use ecclesia_core::repository::{InteractionLog, PaginatedResult, Pagination, Repository};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty};

impl Repository<Newcomer> for MemoryStore {
    type Create = CreateNewcomer;
    type Update = UpdateNewcomer;

    async fn create(&self, tenant_id: Uuid, input: CreateNewcomer) -> EcclesiaResult<Newcomer> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.first_name, "first_name")?;
        require_non_empty(&input.last_name, "last_name")?;
        if let Some(user_id) = input.assigned_to {
            self.inner.require_user(tenant_id, user_id, "assigned_to")?;
        }

        let now = Utc::now();
        Ok(self.inner.newcomers.insert(Newcomer {
            id: Uuid::new_v4(),
            tenant_id,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            first_visit_date: input.first_visit_date,
            came_from: input.came_from,
            status: input.status,
            assigned_to: input.assigned_to,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Newcomer> {
        self.inner.newcomers.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateNewcomer,
    ) -> EcclesiaResult<Newcomer> {
        if let Some(first_name) = &input.first_name {
            require_non_empty(first_name, "first_name")?;
        }
        if let Some(last_name) = &input.last_name {
            require_non_empty(last_name, "last_name")?;
        }
        if let Some(Some(user_id)) = input.assigned_to {
            self.inner.require_user(tenant_id, user_id, "assigned_to")?;
        }

        self.inner.newcomers.update_with(tenant_id, id, |newcomer| {
            if let Some(first_name) = input.first_name {
                newcomer.first_name = first_name;
            }
            if let Some(last_name) = input.last_name {
                newcomer.last_name = last_name;
            }
            if let Some(phone) = input.phone {
                newcomer.phone = phone;
            }
            if let Some(first_visit_date) = input.first_visit_date {
                newcomer.first_visit_date = first_visit_date;
            }
            if let Some(came_from) = input.came_from {
                newcomer.came_from = came_from;
            }
            if let Some(status) = input.status {
                newcomer.status = status;
            }
            if let Some(assigned_to) = input.assigned_to {
                newcomer.assigned_to = assigned_to;
            }
            newcomer.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.newcomers.remove(tenant_id, id)?;
        self.inner
            .interactions
            .remove_where(tenant_id, |i| i.newcomer_id == id);
        Ok(())
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Newcomer>> {
        Ok(self.inner.newcomers.list(tenant_id, pagination))
    }
}

impl InteractionLog for MemoryStore {
    async fn record(
        &self,
        tenant_id: Uuid,
        newcomer_id: Uuid,
        input: CreateInteraction,
    ) -> EcclesiaResult<Interaction> {
        // Also enforces tenant scope on the parent.
        self.inner.newcomers.get(tenant_id, newcomer_id)?;
        self.inner
            .require_user(tenant_id, input.interactor_id, "interactor_id")?;

        Ok(self.inner.interactions.insert(Interaction {
            id: Uuid::new_v4(),
            tenant_id,
            newcomer_id,
            date: input.date,
            kind: input.kind,
            notes: input.notes,
            interactor_id: input.interactor_id,
            recorded_at: Utc::now(),
        }))
    }

    async fn list_for(
        &self,
        tenant_id: Uuid,
        newcomer_id: Uuid,
    ) -> EcclesiaResult<Vec<Interaction>> {
        self.inner.newcomers.get(tenant_id, newcomer_id)?;
        Ok(self
            .inner
            .interactions
            .filter(tenant_id, |i| i.newcomer_id == newcomer_id))
    }
}
