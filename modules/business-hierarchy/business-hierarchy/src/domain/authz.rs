//! Authorization gate.
//!
//! A decision is a capability lookup: the actor must hold
//! `{action}_{entity}`. The target record is accepted but never consulted.

use business_hierarchy_sdk::{Actor, EntityKind, Operation, Record, SecurityContext, permission_name};

use super::error::DomainError;

#[must_use]
pub fn can_perform(
    actor: &Actor,
    kind: EntityKind,
    operation: Operation,
    _record: Option<&Record>,
) -> bool {
    actor.has_permission(&permission_name(kind, operation))
}

/// Fail unless the context carries an actor allowed to run `operation` on `kind`.
///
/// # Errors
/// `Unauthenticated` for an anonymous context, `Forbidden` when the permission is missing.
pub fn ensure(
    ctx: &SecurityContext,
    kind: EntityKind,
    operation: Operation,
) -> Result<(), DomainError> {
    let actor = ctx.actor().ok_or(DomainError::Unauthenticated)?;
    if can_perform(actor, kind, operation, None) {
        return Ok(());
    }
    let permission = permission_name(kind, operation);
    tracing::debug!(actor = %actor.name, %permission, "permission denied");
    Err(DomainError::forbidden(permission))
}
