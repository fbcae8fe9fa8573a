//! Generic CRUD handlers over the uniform repository contract.
//!
//! One instantiation per entity type; the routers in [`super`] pick
//! them up with a turbofish. Entities whose reads go through a
//! projection reuse the write handlers and swap in their own GETs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use ecclesia_core::repository::{PaginatedResult, Pagination, Record, Repository};
use ecclesia_store::MemoryStore;

use crate::error::ApiError;

#[derive(serde::Deserialize)]
pub(crate) struct TenantPath {
    pub tenant_id: Uuid,
}

#[derive(serde::Deserialize)]
pub(crate) struct EntityPath {
    pub tenant_id: Uuid,
    pub id: Uuid,
}

/// The standard route set for one entity collection, mounted under
/// `/v1/tenants/{tenant_id}/<collection>`.
pub(crate) fn crud_router<T>() -> Router<MemoryStore>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
    <MemoryStore as Repository<T>>::Create: DeserializeOwned,
    <MemoryStore as Repository<T>>::Update: DeserializeOwned,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/{id}",
            get(get_one::<T>).put(update::<T>).delete(delete::<T>),
        )
}

pub(crate) async fn create<T>(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Json(input): Json<<MemoryStore as Repository<T>>::Create>,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
    <MemoryStore as Repository<T>>::Create: DeserializeOwned,
{
    let record = Repository::<T>::create(&store, path.tenant_id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn get_one<T>(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<T>, ApiError>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
{
    let record = Repository::<T>::get(&store, path.tenant_id, path.id).await?;
    Ok(Json(record))
}

pub(crate) async fn update<T>(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
    Json(input): Json<<MemoryStore as Repository<T>>::Update>,
) -> Result<Json<T>, ApiError>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
    <MemoryStore as Repository<T>>::Update: DeserializeOwned,
{
    let record = Repository::<T>::update(&store, path.tenant_id, path.id, input).await?;
    Ok(Json(record))
}

pub(crate) async fn delete<T>(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<StatusCode, ApiError>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
{
    Repository::<T>::delete(&store, path.tenant_id, path.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list<T>(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<T>>, ApiError>
where
    T: Record + Serialize,
    MemoryStore: Repository<T>,
{
    let page = Repository::<T>::list(&store, path.tenant_id, pagination).await?;
    Ok(Json(page))
}
