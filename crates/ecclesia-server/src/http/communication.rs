//! Routes for the message outbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use ecclesia_core::models::message::{Message, SendMessage};
use ecclesia_core::repository::{MessageOutbox, PaginatedResult, Pagination};
use ecclesia_store::MemoryStore;

use crate::error::ApiError;
use crate::http::crud::TenantPath;

pub(crate) fn messages_router() -> Router<MemoryStore> {
    Router::new().route("/", get(list_messages).post(send_message))
}

async fn send_message(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Json(input): Json<SendMessage>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = store.send(path.tenant_id, input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Most recent first.
async fn list_messages(
    State(store): State<MemoryStore>,
    Path(path): Path<TenantPath>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResult<Message>>, ApiError> {
    Ok(Json(store.list(path.tenant_id, pagination).await?))
}
