//! Routes for the entity collections whose reads go through a
//! projection: writes use the generic CRUD handlers, reads return the
//! resolved view.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use ecclesia_core::models::group::{Group, GroupView};
use ecclesia_core::models::role::{Role, RoleView};
use ecclesia_core::models::staff::{StaffMember, StaffView};
use ecclesia_core::models::team::{ProjectTeam, TeamView};
use ecclesia_core::models::training::{TrainingSession, TrainingView};
use ecclesia_core::models::volunteer::{Volunteer, VolunteerView};
use ecclesia_core::repository::{PaginatedResult, Pagination, ProjectionReader};
use ecclesia_store::MemoryStore;

use crate::error::ApiError;
use crate::http::crud::{self, EntityPath, TenantPath};

pub(crate) fn roles_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_roles).post(crud::create::<Role>))
        .route(
            "/{id}",
            get(get_role)
                .put(crud::update::<Role>)
                .delete(crud::delete::<Role>),
        )
}

async fn get_role(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<RoleView>, ApiError> {
    Ok(Json(store.role_view(path.tenant_id, path.id).await?))
}

async fn list_roles(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<RoleView>>, ApiError> {
    Ok(Json(store.list_role_views(path.tenant_id, pagination).await?))
}

pub(crate) fn groups_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_groups).post(crud::create::<Group>))
        .route(
            "/{id}",
            get(get_group)
                .put(crud::update::<Group>)
                .delete(crud::delete::<Group>),
        )
}

async fn get_group(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<GroupView>, ApiError> {
    Ok(Json(store.group_view(path.tenant_id, path.id).await?))
}

async fn list_groups(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<GroupView>>, ApiError> {
    Ok(Json(
        store.list_group_views(path.tenant_id, pagination).await?,
    ))
}

pub(crate) fn teams_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_teams).post(crud::create::<ProjectTeam>))
        .route(
            "/{id}",
            get(get_team)
                .put(crud::update::<ProjectTeam>)
                .delete(crud::delete::<ProjectTeam>),
        )
}

async fn get_team(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<TeamView>, ApiError> {
    Ok(Json(store.team_view(path.tenant_id, path.id).await?))
}

async fn list_teams(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<TeamView>>, ApiError> {
    Ok(Json(store.list_team_views(path.tenant_id, pagination).await?))
}

pub(crate) fn staff_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_staff).post(crud::create::<StaffMember>))
        .route(
            "/{id}",
            get(get_staff)
                .put(crud::update::<StaffMember>)
                .delete(crud::delete::<StaffMember>),
        )
}

async fn get_staff(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<StaffView>, ApiError> {
    Ok(Json(store.staff_view(path.tenant_id, path.id).await?))
}

async fn list_staff(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<StaffView>>, ApiError> {
    Ok(Json(
        store.list_staff_views(path.tenant_id, pagination).await?,
    ))
}

pub(crate) fn volunteers_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_volunteers).post(crud::create::<Volunteer>))
        .route(
            "/{id}",
            get(get_volunteer)
                .put(crud::update::<Volunteer>)
                .delete(crud::delete::<Volunteer>),
        )
}

async fn get_volunteer(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<VolunteerView>, ApiError> {
    Ok(Json(store.volunteer_view(path.tenant_id, path.id).await?))
}

async fn list_volunteers(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<VolunteerView>>, ApiError> {
    Ok(Json(
        store.list_volunteer_views(path.tenant_id, pagination).await?,
    ))
}

pub(crate) fn trainings_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_trainings).post(crud::create::<TrainingSession>))
        .route(
            "/{id}",
            get(get_training)
                .put(crud::update::<TrainingSession>)
                .delete(crud::delete::<TrainingSession>),
        )
}

async fn get_training(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<TrainingView>, ApiError> {
    Ok(Json(store.training_view(path.tenant_id, path.id).await?))
}

async fn list_trainings(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<TrainingView>>, ApiError> {
    Ok(Json(
        store.list_training_views(path.tenant_id, pagination).await?,
    ))
}
