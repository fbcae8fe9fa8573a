//! Routes for the tenant audit trail.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use ecclesia_core::models::audit::{AuditLogEntry, RecordAuditEntry};
use ecclesia_core::repository::{AuditTrail, PaginatedResult, Pagination};
use ecclesia_store::MemoryStore;

use crate::error::ApiError;
use crate::http::crud::TenantPath;

pub(crate) fn audit_router() -> Router<MemoryStore> {
    Router::new().route("/", get(list_entries).post(record_entry))
}

async fn record_entry(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Json(input): Json<RecordAuditEntry>,
) -> Result<(StatusCode, Json<AuditLogEntry>), ApiError> {
    let entry = store.record(path.tenant_id, input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Most recent first.
async fn list_entries(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<AuditLogEntry>>, ApiError> {
    Ok(Json(store.list(path.tenant_id, pagination).await?))
}
