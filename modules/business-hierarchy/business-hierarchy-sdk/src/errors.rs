//! Public error types for the `business-hierarchy` module.
//!
//! These errors are safe to expose to other modules and consumers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::access::EntityKind;

/// Field-keyed validation messages.
///
/// Only the first message recorded for a field is kept, so rules evaluated
/// in order stop at the first failure per field while still accumulating
/// failures across fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error set.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Offending field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Errors that can be returned by the `BusinessHierarchyClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessHierarchyError {
    /// Input was rejected; the caller still owns the original payload and can re-display it.
    #[error("Validation failed: {errors}")]
    Validation { errors: FieldErrors },

    /// No authenticated actor; the caller should send the user to its login entry point.
    #[error("Authentication required")]
    Unauthenticated,

    /// The actor lacks the named permission.
    #[error("Forbidden: missing permission '{permission}'")]
    Forbidden { permission: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    /// The operation would break referential integrity, e.g. deleting a parent with dependents.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl BusinessHierarchyError {
    #[must_use]
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    #[must_use]
    pub fn forbidden(permission: impl Into<String>) -> Self {
        Self::Forbidden {
            permission: permission.into(),
        }
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
    pub fn internal() -> Self {
        Self::Internal
    }

    /// Field errors, when this is a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("tax_id", "required");
        errors.add("tax_id", "must have 14 digits");
        errors.add("name", "too long");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message("tax_id"), Some("required"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "tax_id"]);
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FieldErrors::single("email", "taken");
        errors.add("cpf", "bad");
        assert_eq!(errors.to_string(), "cpf: bad; email: taken");
    }
}
