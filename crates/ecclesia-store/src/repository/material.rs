//! In-memory implementations of the material and material request
//! repositories.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::material::{
    CreateMaterial, CreateMaterialRequest, Material, MaterialRequest, RequestItem, RequestStatus,
    UpdateMaterial, UpdateMaterialRequest,
};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

use crate::store::{MemoryStore, require_non_empty};

impl MemoryStore {
    fn require_request_items(&self, tenant_id: Uuid, items: &[RequestItem]) -> EcclesiaResult<()> {
        if items.is_empty() {
            return Err(EcclesiaError::validation(
                "a material request needs at least one item",
            ));
        }
        for item in items {
            self.inner
                .require_material(tenant_id, item.material_id, "items")?;
            if item.quantity == 0 {
                return Err(EcclesiaError::validation(
                    "item quantities must be at least 1",
                ));
            }
        }
        Ok(())
    }
}

impl Repository<Material> for MemoryStore {
    type Create = CreateMaterial;
    type Update = UpdateMaterial;

    async fn create(&self, tenant_id: Uuid, input: CreateMaterial) -> EcclesiaResult<Material> {
        self.inner.require_tenant(tenant_id)?;
        require_non_empty(&input.name, "name")?;
        if input.available_quantity > input.total_quantity {
            return Err(EcclesiaError::validation(
                "available_quantity cannot exceed total_quantity",
            ));
        }

        let now = Utc::now();
        Ok(self.inner.materials.insert(Material {
            id: Uuid::new_v4(),
            tenant_id,
            name: input.name,
            kind: input.kind,
            total_quantity: input.total_quantity,
            available_quantity: input.available_quantity,
            condition: input.condition,
            location: input.location,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Material> {
        self.inner.materials.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateMaterial,
    ) -> EcclesiaResult<Material> {
        if let Some(name) = &input.name {
            require_non_empty(name, "name")?;
        }
        // Quantity invariant is checked against the merged state.
        if input.total_quantity.is_some() || input.available_quantity.is_some() {
            let current = self.inner.materials.get(tenant_id, id)?;
            let total = input.total_quantity.unwrap_or(current.total_quantity);
            let available = input
                .available_quantity
                .unwrap_or(current.available_quantity);
            if available > total {
                return Err(EcclesiaError::validation(
                    "available_quantity cannot exceed total_quantity",
                ));
            }
        }

        self.inner.materials.update_with(tenant_id, id, |material| {
            if let Some(name) = input.name {
                material.name = name;
            }
            if let Some(kind) = input.kind {
                material.kind = kind;
            }
            if let Some(total_quantity) = input.total_quantity {
                material.total_quantity = total_quantity;
            }
            if let Some(available_quantity) = input.available_quantity {
                material.available_quantity = available_quantity;
            }
            if let Some(condition) = input.condition {
                material.condition = condition;
            }
            if let Some(location) = input.location {
                material.location = location;
            }
            material.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        let open_request = self.inner.material_requests.any(tenant_id, |r| {
            matches!(r.status, RequestStatus::Pending | RequestStatus::Approved)
                && r.items.iter().any(|item| item.material_id == id)
        });
        if open_request {
            return Err(EcclesiaError::Conflict {
                entity: "material".into(),
                reason: "material appears in an open request".into(),
            });
        }
        self.inner.materials.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Material>> {
        Ok(self.inner.materials.list(tenant_id, pagination))
    }
}

impl Repository<MaterialRequest> for MemoryStore {
    type Create = CreateMaterialRequest;
    type Update = UpdateMaterialRequest;

    async fn create(
        &self,
        tenant_id: Uuid,
        input: CreateMaterialRequest,
    ) -> EcclesiaResult<MaterialRequest> {
        self.inner.require_tenant(tenant_id)?;
        self.inner
            .require_user(tenant_id, input.requester_id, "requester_id")?;
        require_non_empty(&input.event_name, "event_name")?;
        if input.end_date < input.start_date {
            return Err(EcclesiaError::validation(
                "loan cannot end before it starts",
            ));
        }
        self.require_request_items(tenant_id, &input.items)?;

        let now = Utc::now();
        Ok(self.inner.material_requests.insert(MaterialRequest {
            id: Uuid::new_v4(),
            tenant_id,
            requester_id: input.requester_id,
            event_name: input.event_name,
            request_date: input.request_date,
            start_date: input.start_date,
            end_date: input.end_date,
            items: input.items,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<MaterialRequest> {
        self.inner.material_requests.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateMaterialRequest,
    ) -> EcclesiaResult<MaterialRequest> {
        if let Some(event_name) = &input.event_name {
            require_non_empty(event_name, "event_name")?;
        }
        if let Some(items) = &input.items {
            self.require_request_items(tenant_id, items)?;
        }
        if input.start_date.is_some() || input.end_date.is_some() {
            let current = self.inner.material_requests.get(tenant_id, id)?;
            let start = input.start_date.unwrap_or(current.start_date);
            let end = input.end_date.unwrap_or(current.end_date);
            if end < start {
                return Err(EcclesiaError::validation(
                    "loan cannot end before it starts",
                ));
            }
        }

        self.inner
            .material_requests
            .update_with(tenant_id, id, |request| {
                if let Some(event_name) = input.event_name {
                    request.event_name = event_name;
                }
                if let Some(start_date) = input.start_date {
                    request.start_date = start_date;
                }
                if let Some(end_date) = input.end_date {
                    request.end_date = end_date;
                }
                if let Some(items) = input.items {
                    request.items = items;
                }
                if let Some(status) = input.status {
                    request.status = status;
                }
                request.updated_at = Utc::now();
            })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.material_requests.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<MaterialRequest>> {
        Ok(self.inner.material_requests.list(tenant_id, pagination))
    }
}
