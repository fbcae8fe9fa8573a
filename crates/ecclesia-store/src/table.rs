//! Generic ordered collection with uniform CRUD semantics.
//!
//! One [`Table`] per entity type. Rows keep insertion order; ids are
//! random UUIDs and are never reused. Every operation takes the lock
//! exactly once, so a single operation is atomic; there is no
//! transactionality across operations.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use ecclesia_core::repository::{Pagination, PaginatedResult, Record};
use ecclesia_core::{EcclesiaError, EcclesiaResult};

pub(crate) struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Record> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a row, preserving insertion order.
    pub(crate) fn insert(&self, row: T) -> T {
        debug!(entity = T::ENTITY, id = %row.id(), "record created");
        self.write().push(row.clone());
        row
    }

    /// Prepends a row. Used by collections listed most recent first.
    pub(crate) fn insert_front(&self, row: T) -> T {
        debug!(entity = T::ENTITY, id = %row.id(), "record created");
        self.write().insert(0, row.clone());
        row
    }

    /// Looks up a row by id within a tenant.
    ///
    /// A row that exists under a different tenant is reported as
    /// `TenantMismatch`, not `NotFound`, so isolation violations are
    /// distinguishable from stale ids.
    pub(crate) fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<T> {
        match self.read().iter().find(|r| r.id() == id) {
            Some(row) if row.tenant_id() == tenant_id => Ok(row.clone()),
            Some(_) => Err(EcclesiaError::TenantMismatch {
                entity: T::ENTITY.into(),
                id: id.to_string(),
            }),
            None => Err(EcclesiaError::not_found(T::ENTITY, id)),
        }
    }

    /// Applies a patch to the matching row and returns the new state.
    /// Exactly one row changes; all others keep their position.
    pub(crate) fn update_with(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        patch: impl FnOnce(&mut T),
    ) -> EcclesiaResult<T> {
        let mut rows = self.write();
        match rows.iter_mut().find(|r| r.id() == id) {
            Some(row) if row.tenant_id() == tenant_id => {
                patch(row);
                debug!(entity = T::ENTITY, id = %id, "record updated");
                Ok(row.clone())
            }
            Some(_) => Err(EcclesiaError::TenantMismatch {
                entity: T::ENTITY.into(),
                id: id.to_string(),
            }),
            None => Err(EcclesiaError::not_found(T::ENTITY, id)),
        }
    }

    /// Removes the matching row. A second remove of the same id reports
    /// `NotFound`; deletion is never a silent no-op.
    pub(crate) fn remove(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        let mut rows = self.write();
        match rows.iter().position(|r| r.id() == id) {
            Some(idx) if rows[idx].tenant_id() == tenant_id => {
                rows.remove(idx);
                debug!(entity = T::ENTITY, id = %id, "record deleted");
                Ok(())
            }
            Some(_) => Err(EcclesiaError::TenantMismatch {
                entity: T::ENTITY.into(),
                id: id.to_string(),
            }),
            None => Err(EcclesiaError::not_found(T::ENTITY, id)),
        }
    }

    /// Removes every row of one tenant. Used for tenant cascade delete.
    pub(crate) fn remove_tenant(&self, tenant_id: Uuid) {
        self.write().retain(|r| r.tenant_id() != tenant_id);
    }

    /// Removes every row of one tenant matching the predicate.
    pub(crate) fn remove_where(&self, tenant_id: Uuid, pred: impl Fn(&T) -> bool) {
        self.write()
            .retain(|r| r.tenant_id() != tenant_id || !pred(r));
    }

    /// One page of a tenant's rows, insertion order.
    pub(crate) fn list(&self, tenant_id: Uuid, pagination: Pagination) -> PaginatedResult<T> {
        let rows = self.read();
        let matching: Vec<&T> = rows.iter().filter(|r| r.tenant_id() == tenant_id).collect();
        page(&matching, pagination)
    }

    /// One page of all rows, ignoring tenant scope. Only meaningful for
    /// the global tenant collection.
    pub(crate) fn list_all(&self, pagination: Pagination) -> PaginatedResult<T> {
        let rows = self.read();
        let all: Vec<&T> = rows.iter().collect();
        page(&all, pagination)
    }

    pub(crate) fn exists(&self, tenant_id: Uuid, id: Uuid) -> bool {
        self.read()
            .iter()
            .any(|r| r.id() == id && r.tenant_id() == tenant_id)
    }

    /// First row matching the predicate, across all tenants.
    pub(crate) fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.read().iter().find(|r| pred(r)).cloned()
    }

    /// All rows of a tenant matching the predicate, insertion order.
    pub(crate) fn filter(&self, tenant_id: Uuid, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .iter()
            .filter(|r| r.tenant_id() == tenant_id && pred(r))
            .cloned()
            .collect()
    }

    /// Whether any row of a tenant matches the predicate.
    pub(crate) fn any(&self, tenant_id: Uuid, pred: impl Fn(&T) -> bool) -> bool {
        self.read()
            .iter()
            .any(|r| r.tenant_id() == tenant_id && pred(r))
    }
}

fn page<T: Clone>(matching: &[&T], pagination: Pagination) -> PaginatedResult<T> {
    let total = matching.len() as u64;
    let items = matching
        .iter()
        .skip(pagination.offset as usize)
        .take(pagination.limit as usize)
        .map(|r| (*r).clone())
        .collect();
    PaginatedResult {
        items,
        total,
        offset: pagination.offset,
        limit: pagination.limit,
    }
}
