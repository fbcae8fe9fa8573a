//! Router assembly for the `/v1` API surface.

mod audit;
mod communication;
mod crud;
mod followup;
mod tenants;
mod views;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use ecclesia_core::models::event::PlanningEvent;
use ecclesia_core::models::finance::{Expense, Revenue};
use ecclesia_core::models::material::{Material, MaterialRequest};
use ecclesia_core::models::media::MediaItem;
use ecclesia_core::models::member::Member;
use ecclesia_core::models::role::Permission;
use ecclesia_core::models::user::User;
use ecclesia_core::repository::PermissionCatalog;
use ecclesia_store::MemoryStore;

use crate::error::ApiError;

/// Builds the full application router over the given store.
pub fn build_router(store: MemoryStore) -> Router {
    let tenant_scoped = Router::new()
        .nest("/users", crud::crud_router::<User>())
        .nest("/members", crud::crud_router::<Member>())
        .nest("/events", crud::crud_router::<PlanningEvent>())
        .nest("/revenues", crud::crud_router::<Revenue>())
        .nest("/expenses", crud::crud_router::<Expense>())
        .nest("/materials", crud::crud_router::<Material>())
        .nest("/material-requests", crud::crud_router::<MaterialRequest>())
        .nest("/media", crud::crud_router::<MediaItem>())
        .nest("/roles", views::roles_router())
        .nest("/groups", views::groups_router())
        .nest("/teams", views::teams_router())
        .nest("/staff", views::staff_router())
        .nest("/volunteers", views::volunteers_router())
        .nest("/training-sessions", views::trainings_router())
        .nest("/newcomers", followup::newcomers_router())
        .nest("/messages", communication::messages_router())
        .nest("/audit-logs", audit::audit_router());

    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/permissions", get(list_permissions))
        .nest("/v1/tenants", tenants::tenants_router())
        .nest("/v1/tenants/{tenant_id}", tenant_scoped)
        .with_state(store)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_permissions(
    State(store): State<MemoryStore>,
) -> Result<Json<Vec<Permission>>, ApiError> {
    Ok(Json(store.list_permissions().await?))
}
