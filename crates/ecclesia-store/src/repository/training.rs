//! In-memory implementation of the training session repository.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::training::{
    CreateTrainingSession, TrainingParticipant, TrainingSession, UpdateTrainingSession,
};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl MemoryStore {
    fn require_participants(
        &self,
        tenant_id: Uuid,
        participants: &[TrainingParticipant],
    ) -> EcclesiaResult<()> {
        for participant in participants {
            self.inner
                .require_member(tenant_id, participant.member_id, "participants")?;
        }
        Ok(())
    }
}

impl Repository<TrainingSession> for MemoryStore {
    type Create = CreateTrainingSession;
    type Update = UpdateTrainingSession;

    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateTrainingSession,
    ) -> EcclesiaResult<TrainingSession> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.title, "title")?;
        if input.end_date < input.start_date {
            return Err(EcclesiaError::validation(
                "session cannot end before it starts",
            ));
        }
        self.require_participants(tenant_id, &input.participants)?;

        let now = Utc::now();
        Ok(self.inner.trainings.insert(TrainingSession {
            id: Uuid::new_v4(),
            tenant_id,
            title: input.title,
            description: input.description,
            instructor: input.instructor,
            start_date: input.start_date,
            end_date: input.end_date,
            location: input.location,
            participants: input.participants,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<TrainingSession> {
        self.inner.trainings.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateTrainingSession,
    ) -> EcclesiaResult<TrainingSession> {
        if let Some(title) = &input.title {
            require_non_empty(title, "title")?;
        }
        if let Some(participants) = &input.participants {
            self.require_participants(tenant_id, participants)?;
        }
        if input.start_date.is_some() || input.end_date.is_some() {
            let current = self.inner.trainings.get(tenant_id, id)?;
            let start = input.start_date.unwrap_or(current.start_date);
            let end = input.end_date.unwrap_or(current.end_date);
            if end < start {
                return Err(EcclesiaError::validation(
                    "session cannot end before it starts",
                ));
            }
        }

        self.inner.trainings.update_with(tenant_id, id, |session| {
            if let Some(title) = input.title {
                session.title = title;
            }
            if let Some(description) = input.description {
                session.description = description;
            }
            if let Some(instructor) = input.instructor {
                session.instructor = instructor;
            }
            if let Some(start_date) = input.start_date {
                session.start_date = start_date;
            }
            if let Some(end_date) = input.end_date {
                session.end_date = end_date;
            }
            if let Some(location) = input.location {
                session.location = location;
            }
            if let Some(participants) = input.participants {
                session.participants = participants;
            }
            session.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.trainings.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<TrainingSession>> {
        Ok(self.inner.trainings.list(tenant_id, pagination))
    }
}
