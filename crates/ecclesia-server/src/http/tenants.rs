//! Routes for the global tenant collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use ecclesia_core::models::tenant::{CreateTenant, Tenant, TenantView, UpdateTenant};
use ecclesia_core::repository::{
    PaginatedResult, Pagination, ProjectionReader, TenantRepository,
};
use ecclesia_store::MemoryStore;

use crate::error::ApiError;

pub(crate) fn tenants_router() -> Router<MemoryStore> {
    Router::new()
        .route("/", get(list_tenants).post(create_tenant))
        .route("/by-slug/{slug}", get(get_tenant_by_slug))
        .route(
            "/{tenant_id}",
            get(get_tenant).put(update_tenant).delete(delete_tenant),
        )
}

async fn create_tenant(
    State(store): State<MemoryStore>,
    Json(input): Json<CreateTenant>,
) -> Result<(StatusCode, Json<Tenant>), ApiError> {
    let tenant = TenantRepository::create(&store, input).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// Returns the tenant with its admin user resolved.
async fn get_tenant(
    State(store): State<MemoryStore>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<TenantView>, ApiError> {
    Ok(Json(store.tenant_view(tenant_id).await?))
}

async fn get_tenant_by_slug(
    State(store): State<MemoryStore>,
    Path(slug): Path<String>,
) -> Result<Json<Tenant>, ApiError> {
    Ok(Json(store.get_by_slug(&slug).await?))
}

async fn update_tenant(
    State(store): State<MemoryStore>,
    Path(tenant_id): Path<Uuid>,
    Json(input): Json<UpdateTenant>,
) -> Result<Json<Tenant>, ApiError> {
    let tenant = TenantRepository::update(&store, tenant_id, input).await?;
    Ok(Json(tenant))
}

async fn delete_tenant(
    State(store): State<MemoryStore>,
    Path(tenant_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    TenantRepository::delete(&store, tenant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_tenants(
    State(store): State<MemoryStore>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<Tenant>>, ApiError> {
    Ok(Json(TenantRepository::list(&store, pagination).await?))
}
