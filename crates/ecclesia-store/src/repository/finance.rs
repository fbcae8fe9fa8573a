//! In-memory implementations of the revenue and expense repositories.

use chrono::Utc;
use uuid::Uuid;

use ecclesia_core::models::finance::{
    CreateExpense, CreateRevenue, Expense, Revenue, UpdateExpense, UpdateRevenue,
};
use ecclesia_core::repository::{PaginatedResult, Pagination, Repository};
use ecclesia_core::EcclesiaResult;

use crate::store::{MemoryStore, require_non_empty, require_positive_amount};

impl Repository<Revenue> for MemoryStore {
    type Create = CreateRevenue;
    type Update = UpdateRevenue;

    async fn create(&self, tenant_id: Uuid, input: CreateRevenue) -> EcclesiaResult<Revenue> {
        self.inner.require_tenant(tenant_id)?;
        require_positive_amount(input.amount)?;
        require_non_empty(&input.source_description, "source_description")?;

        let now = Utc::now();
        Ok(self.inner.revenues.insert(Revenue {
            id: Uuid::new_v4(),
            tenant_id,
            kind: input.kind,
            amount: input.amount,
            payment_date: input.payment_date,
            source_description: input.source_description,
            payment_method: input.payment_method,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Revenue> {
        self.inner.revenues.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateRevenue,
    ) -> EcclesiaResult<Revenue> {
        if let Some(amount) = input.amount {
            require_positive_amount(amount)?;
        }
        if let Some(source_description) = &input.source_description {
            require_non_empty(source_description, "source_description")?;
        }

        self.inner.revenues.update_with(tenant_id, id, |revenue| {
            if let Some(kind) = input.kind {
                revenue.kind = kind;
            }
            if let Some(amount) = input.amount {
                revenue.amount = amount;
            }
            if let Some(payment_date) = input.payment_date {
                revenue.payment_date = payment_date;
            }
            if let Some(source_description) = input.source_description {
                revenue.source_description = source_description;
            }
            if let Some(payment_method) = input.payment_method {
                revenue.payment_method = payment_method;
            }
            revenue.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.revenues.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Revenue>> {
        Ok(self.inner.revenues.list(tenant_id, pagination))
    }
}

impl Repository<Expense> for MemoryStore {
    type Create = CreateExpense;
    type Update = UpdateExpense;

    async fn create(&self, tenant_id: Uuid, input: CreateExpense) -> EcclesiaResult<Expense> {
        self.inner.require_tenant(tenant_id)?;
        require_positive_amount(input.amount)?;
        require_non_empty(&input.description, "description")?;

        let now = Utc::now();
        Ok(self.inner.expenses.insert(Expense {
            id: Uuid::new_v4(),
            tenant_id,
            description: input.description,
            amount: input.amount,
            beneficiary: input.beneficiary,
            expense_date: input.expense_date,
            cost_center: input.cost_center,
            status: input.status,
            payment_method: input.payment_method,
            created_at: now,
            updated_at: now,
        }))
    }

    async fn get(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<Expense> {
        self.inner.expenses.get(tenant_id, id)
    }

    async fn update(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        input: UpdateExpense,
    ) -> EcclesiaResult<Expense> {
        if let Some(amount) = input.amount {
            require_positive_amount(amount)?;
        }
        if let Some(description) = &input.description {
            require_non_empty(description, "description")?;
        }

        self.inner.expenses.update_with(tenant_id, id, |expense| {
            if let Some(description) = input.description {
                expense.description = description;
            }
            if let Some(amount) = input.amount {
                expense.amount = amount;
            }
            if let Some(beneficiary) = input.beneficiary {
                expense.beneficiary = beneficiary;
            }
            if let Some(expense_date) = input.expense_date {
                expense.expense_date = expense_date;
            }
            if let Some(cost_center) = input.cost_center {
                expense.cost_center = cost_center;
            }
            if let Some(status) = input.status {
                expense.status = status;
            }
            if let Some(payment_method) = input.payment_method {
                expense.payment_method = payment_method;
            }
            expense.updated_at = Utc::now();
        })
    }

    async fn delete(&self, tenant_id: Uuid, id: Uuid) -> EcclesiaResult<()> {
        self.inner.expenses.remove(tenant_id, id)
    }

    async fn list(
        &self,
        tenant_id: Uuid,
        pagination: Pagination,
    ) -> EcclesiaResult<PaginatedResult<Expense>> {
        Ok(self.inner.expenses.list(tenant_id, pagination))
    }
}
