use business_hierarchy_sdk::{BusinessHierarchyError, EntityKind, FieldErrors};
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    #[error("Integrity conflict: {message}")]
    Conflict { message: String },

    #[error("Permission '{permission}' required")]
    Forbidden { permission: String },

    #[error("No authenticated actor")]
    Unauthenticated,

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }

    #[must_use]
    pub fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn forbidden(permission: impl Into<String>) -> Self {
        Self::Forbidden {
            permission: permission.into(),
        }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<FieldErrors> for DomainError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for BusinessHierarchyError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::Validation(errors) => BusinessHierarchyError::validation(errors),
            DomainError::NotFound { kind, id } => BusinessHierarchyError::not_found(kind, id),
            DomainError::Conflict { message } => BusinessHierarchyError::conflict(message),
            DomainError::Forbidden { permission } => BusinessHierarchyError::forbidden(permission),
            DomainError::Unauthenticated => BusinessHierarchyError::Unauthenticated,
            DomainError::Database { .. } => BusinessHierarchyError::internal(),
        }
    }
}
