//! Error types for the Ecclesia system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcclesiaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity} ({reason})")]
    AlreadyExists { entity: String, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Tenant mismatch: {entity} with id {id} belongs to another tenant")]
    TenantMismatch { entity: String, id: String },

    #[error("Conflict: {entity} ({reason})")]
    Conflict { entity: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EcclesiaError {
    /// Shorthand for a [`EcclesiaError::NotFound`] with stringified id.
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        EcclesiaError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Shorthand for a [`EcclesiaError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        EcclesiaError::Validation {
            message: message.into(),
        }
    }
}

pub type EcclesiaResult<T> = Result<T, EcclesiaError>;
