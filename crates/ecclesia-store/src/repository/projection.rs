//! Read-time joins over stored id references.
//!
//! Storage never embeds snapshots of referenced records, so a view is
//! always assembled from current state: editing a member changes what
//! every group, team, staff and volunteer view returns from then on.
//!
//! Reference checks at write time plus delete blocking mean a dangling
//! id can only appear through a store bug; resolution therefore treats
//! one as an internal error rather than a `NotFound`.

use uuid::Uuid;

use ecclesia_core::models::{
    group::{Group, GroupView},
    member::Member,
    role::{Role, RoleView},
    staff::{StaffMember, StaffView},
    team::{ProjectTeam, TeamView},
    tenant::TenantView,
    training::{ParticipantView, TrainingSession, TrainingView},
    volunteer::{Volunteer, VolunteerView},
};
use ecclesia_core::repository::{PaginatedResult, Pagination, ProjectionReader, Record};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::MemoryStore;

impl MemoryStore {
    fn resolve_member(
        &self,
        tenant_id: Uuid,
        member_id: Uuid,
        referencing: &str,
        referencing_id: Uuid,
    ) -> EcclesiaResult<Member> {
        self.inner.members.get(tenant_id, member_id).map_err(|_| {
            EcclesiaError::Internal(format!(
                "{referencing} {referencing_id} references missing member {member_id}"
            ))
        })
    }

    fn group_to_view(&self, group: Group) -> EcclesiaResult<GroupView> {
        let tenant_id = group.tenant_id;
        let leader = self.resolve_member(tenant_id, group.leader_id, Group::ENTITY, group.id)?;
        let members = group
            .member_ids
            .iter()
            .map(|id| self.resolve_member(tenant_id, *id, Group::ENTITY, group.id))
            .collect::<EcclesiaResult<Vec<_>>>()?;
        Ok(GroupView {
            group,
            leader,
            members,
        })
    }

    fn team_to_view(&self, team: ProjectTeam) -> EcclesiaResult<TeamView> {
        let tenant_id = team.tenant_id;
        let leader = self.resolve_member(tenant_id, team.leader_id, ProjectTeam::ENTITY, team.id)?;
        let members = team
            .member_ids
            .iter()
            .map(|id| self.resolve_member(tenant_id, *id, ProjectTeam::ENTITY, team.id))
            .collect::<EcclesiaResult<Vec<_>>>()?;
        Ok(TeamView {
            team,
            leader,
            members,
        })
    }

    fn staff_to_view(&self, staff: StaffMember) -> EcclesiaResult<StaffView> {
        let member =
            self.resolve_member(staff.tenant_id, staff.member_id, StaffMember::ENTITY, staff.id)?;
        Ok(StaffView { staff, member })
    }

    fn volunteer_to_view(&self, volunteer: Volunteer) -> EcclesiaResult<VolunteerView> {
        let member = self.resolve_member(
            volunteer.tenant_id,
            volunteer.member_id,
            Volunteer::ENTITY,
            volunteer.id,
        )?;
        Ok(VolunteerView { volunteer, member })
    }

    fn training_to_view(&self, session: TrainingSession) -> EcclesiaResult<TrainingView> {
        let roster = session
            .participants
            .iter()
            .map(|p| {
                let member = self.resolve_member(
                    session.tenant_id,
                    p.member_id,
                    TrainingSession::ENTITY,
                    session.id,
                )?;
                Ok(ParticipantView {
                    member,
                    status: p.status.clone(),
                })
            })
            .collect::<EcclesiaResult<Vec<_>>>()?;
        Ok(TrainingView { session, roster })
    }

    fn role_to_view(&self, role: Role) -> RoleView {
        let permissions = role
            .permission_ids
            .iter()
            .filter_map(|id| self.inner.permissions.iter().find(|p| p.id == *id))
            .cloned()
            .collect();
        RoleView { role, permissions }
    }
}

fn map_page<T, U>(
    page: PaginatedResult<T>,
    mut f: impl FnMut(T) -> EcclesiaResult<U>,
) -> EcclesiaResult<PaginatedResult<U>> {
    let mut items = Vec::with_capacity(page.items.len());
    for item in page.items {
        items.push(f(item)?);
    }
    Ok(PaginatedResult {
        items,
        total: page.total,
        offset: page.offset,
        limit: page.limit,
    })
}

impl ProjectionReader for MemoryStore {
    async fn tenant_view(&self, id: Uuid) -> EcclesiaResult<TenantView> {
        let tenant = self.inner.tenants.get(id, id)?;
        let admin = tenant
            .admin_id
            .and_then(|admin_id| self.inner.users.find(|u| u.id == admin_id && u.tenant_id == id));
        Ok(TenantView { tenant, admin })
    }

    async fn role_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<RoleView> {
        let role = self.inner.roles.get(tenant_id, id)?;
        Ok(self.role_to_view(role))
    }

    async fn list_role_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<RoleView>> {
        Ok(self
            .inner
            .roles
            .list(tenant_id, pagination)
            .map(|role| self.role_to_view(role)))
    }

    async fn group_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<GroupView> {
        let group = self.inner.groups.get(tenant_id, id)?;
        self.group_to_view(group)
    }

    async fn list_group_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<GroupView>> {
        map_page(self.inner.groups.list(tenant_id, pagination), |group| {
            self.group_to_view(group)
        })
    }

    async fn team_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<TeamView> {
        let team = self.inner.teams.get(tenant_id, id)?;
        self.team_to_view(team)
    }

    async fn list_team_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<TeamView>> {
        map_page(self.inner.teams.list(tenant_id, pagination), |team| {
            self.team_to_view(team)
        })
    }

    async fn staff_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<StaffView> {
        let staff = self.inner.staff.get(tenant_id, id)?;
        self.staff_to_view(staff)
    }

    async fn list_staff_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<StaffView>> {
        map_page(self.inner.staff.list(tenant_id, pagination), |staff| {
            self.staff_to_view(staff)
        })
    }

    async fn volunteer_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<VolunteerView> {
        let volunteer = self.inner.volunteers.get(tenant_id, id)?;
        self.volunteer_to_view(volunteer)
    }

    async fn list_volunteer_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<VolunteerView>> {
        map_page(
            self.inner.volunteers.list(tenant_id, pagination),
            |volunteer| self.volunteer_to_view(volunteer),
        )
    }

    async fn training_view(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<TrainingView> {
        let session = self.inner.trainings.get(tenant_id, id)?;
        self.training_to_view(session)
    }

    async fn list_training_views(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<TrainingView>> {
        map_page(self.inner.trainings.list(tenant_id, pagination), |session| {
            self.training_to_view(session)
        })
    }
}
