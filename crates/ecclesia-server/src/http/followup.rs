//! Routes for newcomer follow-up: the newcomer collection plus the
//! per-newcomer interaction log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use ecclesia_core::models::newcomer::{CreateInteraction, Interaction, Newcomer};
use ecclesia_core::repository::InteractionLog;
use ecclesia_store::MemoryStore;

use crate::error::ApiError;
use crate::http::crud::{self, EntityPath};

pub(crate) fn newcomers_router() -> Router<MemoryStore> {
    crud::crud_router::<Newcomer>().route(
        "/{id}/interactions",
        get(list_interactions).post(record_interaction),
    )
}

async fn record_interaction(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
    Json(input): Json<CreateInteraction>,
) -> Result<(StatusCode, Json<Interaction>), ApiError> {
    let interaction = store.record(path.tenant_id, path.id, input).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}

/// Oldest first, unpaginated: a follow-up history stays short.
async fn list_interactions(
    State(store): State<MemoryStore>,
    Path(path): Path<EntityPath>,
) -> Result<Json<Vec<Interaction>>, ApiError> {
    Ok(Json(store.list_for(path.tenant_id, path.id).await?))
}
