//! In-memory implementation of the planning event repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::event::{CreatePlanningEvent, PlanningEvent, UpdatePlanningEvent};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl Repository<PlanningEvent> for MemoryStore {
    type Create = CreatePlanningEvent;
    type Update = UpdatePlanningEvent;

    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreatePlanningEvent,
    ) -> EcclesiaResult<PlanningEvent> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.title, "title")?;
        if input.end <= input.start {
            return Err(EcclesiaError::validation("event must end after it starts"));
        }
        self.inner
            .require_members(tenant_id, &input.attendee_ids, "attendee_ids")?;

        let now = Utc::now();
        Ok(self.inner.events.insert(PlanningEvent {
            id: Uuid::new_v4(),
            tenant_id,
            title: input.title,
            category: input.category,
            start: input.start,
            end: input.end,
            location: input.location,
            attendee_ids: input.attendee_ids,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<PlanningEvent> {
        self.inner.events.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdatePlanningEvent,
    ) -> EcclesiaResult<PlanningEvent> {
        if let Some(title) = &input.title {
            require_non_empty(title, "title")?;
        }
        if let Some(attendee_ids) = &input.attendee_ids {
            self.inner
                .require_members(tenant_id, attendee_ids, "attendee_ids")?;
        }
        // Time-window validity is checked against the merged state.
        if input.start.is_some() || input.end.is_some() {
            let current = self.inner.events.get(tenant_id, id)?;
            let start = input.start.unwrap_or(current.start);
            let end = input.end.unwrap_or(current.end);
            if end <= start {
                return Err(EcclesiaError::validation("event must end after it starts"));
            }
        }

        self.inner.events.update_with(tenant_id, id, |event| {
            if let Some(title) = input.title {
                event.title = title;
            }
            if let Some(category) = input.category {
                event.category = category;
            }
            if let Some(start) = input.start {
                event.start = start;
            }
            if let Some(end) = input.end {
                event.end = end;
            }
            if let Some(location) = input.location {
                event.location = location;
            }
            if let Some(attendee_ids) = input.attendee_ids {
                event.attendee_ids = attendee_ids;
            }
            event.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.events.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<PlanningEvent>> {
        Ok(self.inner.events.list(tenant_id, pagination))
    }
}
