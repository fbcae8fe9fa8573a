//! Finance domain models: revenues and expenses.
//!
//! Amounts are integers in minor currency units; the system never does
//! floating-point money arithmetic.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RevenueKind {
    Offering,
    Tithe,
    Donation,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Check,
    BankTransfer,
    MobileMoney,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub kind: RevenueKind,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub source_description: String,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRevenue {
    pub kind: RevenueKind,
    pub amount: i64,
    pub payment_date: NaiveDate,
    pub source_description: String,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateRevenue {
    pub kind: Option<RevenueKind>,
    pub amount: Option<i64>,
    pub payment_date: Option<NaiveDate>,
    pub source_description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub description: String,
    pub amount: i64,
    pub beneficiary: String,
    pub expense_date: NaiveDate,
    /// Analytic bucket the expense is charged to (e.g., `Sonorisation`).
    pub cost_center: String,
    pub status: ExpenseStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: i64,
    pub beneficiary: String,
    pub expense_date: NaiveDate,
    pub cost_center: String,
    pub status: ExpenseStatus,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub amount: Option<i64>,
    pub beneficiary: Option<String>,
    pub expense_date: Option<NaiveDate>,
    pub cost_center: Option<String>,
    pub status: Option<ExpenseStatus>,
    pub payment_method: Option<PaymentMethod>,
}
