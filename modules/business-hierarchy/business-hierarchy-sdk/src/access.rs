//! Access-control vocabulary for the `business-hierarchy` module.
//!
//! Permissions are plain names of the form `{action}_{entity}`, e.g.
//! `create_brand` or `delete_economic_group`. An [`Actor`] carries the set of
//! names it was granted; there is no row-level ownership model, so a decision
//! only ever depends on the entity kind and the operation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four levels of the business hierarchy, parents first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    EconomicGroup,
    Brand,
    Unit,
    Collaborator,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::EconomicGroup,
        EntityKind::Brand,
        EntityKind::Unit,
        EntityKind::Collaborator,
    ];

    /// Name used inside permission strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::EconomicGroup => "economic_group",
            EntityKind::Brand => "brand",
            EntityKind::Unit => "unit",
            EntityKind::Collaborator => "collaborator",
        }
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::EconomicGroup => "Economic group",
            EntityKind::Brand => "Brand",
            EntityKind::Unit => "Unit",
            EntityKind::Collaborator => "Collaborator",
        }
    }

    /// Kind of the dependent children, if any.
    #[must_use]
    pub const fn child(self) -> Option<EntityKind> {
        match self {
            EntityKind::EconomicGroup => Some(EntityKind::Brand),
            EntityKind::Brand => Some(EntityKind::Unit),
            EntityKind::Unit => Some(EntityKind::Collaborator),
            EntityKind::Collaborator => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations gated by the authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ViewCollection,
    ViewOne,
    Create,
    Edit,
    Delete,
    /// Administrative: evaluated against the `delete_*` permission.
    Restore,
    /// Administrative: requires the dedicated `force_delete_*` permission.
    ForceDelete,
}

impl Operation {
    pub const CORE: [Operation; 5] = [
        Operation::ViewCollection,
        Operation::ViewOne,
        Operation::Create,
        Operation::Edit,
        Operation::Delete,
    ];

    /// Action prefix of the permission that grants this operation.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Operation::ViewCollection | Operation::ViewOne => "view",
            Operation::Create => "create",
            Operation::Edit => "edit",
            Operation::Delete | Operation::Restore => "delete",
            Operation::ForceDelete => "force_delete",
        }
    }
}

/// Permission name required for `operation` on `kind`.
#[must_use]
pub fn permission_name(kind: EntityKind, operation: Operation) -> String {
    format!("{}_{}", operation.action(), kind.as_str())
}

/// Named role presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Every permission on every entity.
    Admin,
    /// Read everything, maintain brands and units, fully manage collaborators.
    Manager,
    /// Read-only access.
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Viewer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Viewer => "viewer",
        }
    }

    /// Permissions granted by this role.
    #[must_use]
    pub fn permissions(self) -> PermissionSet {
        use EntityKind::{Brand, Collaborator, Unit};
        use Operation::{Create, Delete, Edit, ForceDelete, ViewOne};

        let view_all = EntityKind::ALL.map(|k| (k, ViewOne));
        match self {
            Role::Admin => EntityKind::ALL
                .iter()
                .flat_map(|&k| {
                    [ViewOne, Create, Edit, Delete, ForceDelete]
                        .into_iter()
                        .map(move |op| (k, op))
                })
                .collect(),
            Role::Manager => view_all
                .into_iter()
                .chain([
                    (Brand, Create),
                    (Brand, Edit),
                    (Unit, Create),
                    (Unit, Edit),
                    (Collaborator, Create),
                    (Collaborator, Edit),
                    (Collaborator, Delete),
                ])
                .collect(),
            Role::Viewer => view_all.into_iter().collect(),
        }
    }
}

/// A set of granted permission names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a raw permission name.
    pub fn grant(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    /// Grant the permission behind `operation` on `kind`.
    pub fn grant_operation(&mut self, kind: EntityKind, operation: Operation) {
        self.grant(permission_name(kind, operation));
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.grant(name);
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(EntityKind, Operation)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (EntityKind, Operation)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (kind, op) in iter {
            set.grant_operation(kind, op);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for PermissionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.grant(name);
        }
    }
}

/// An authenticated principal and the permissions resolved for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub permissions: PermissionSet,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }

    /// Actor holding every permission of `role`.
    #[must_use]
    pub fn with_role(name: impl Into<String>, role: Role) -> Self {
        Self::new(name, role.permissions())
    }

    #[must_use]
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }
}

/// Per-request security context.
///
/// Built once per request by the caller from its authentication layer; an
/// anonymous context means no actor was authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    actor: Option<Actor>,
}

impl SecurityContext {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { actor: None }
    }

    #[must_use]
    pub fn for_actor(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }

    #[must_use]
    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn permission_names_follow_action_entity_shape() {
        assert_eq!(
            permission_name(EntityKind::EconomicGroup, Operation::ViewCollection),
            "view_economic_group"
        );
        assert_eq!(
            permission_name(EntityKind::Brand, Operation::Edit),
            "edit_brand"
        );
        assert_eq!(
            permission_name(EntityKind::Unit, Operation::Restore),
            "delete_unit"
        );
        assert_eq!(
            permission_name(EntityKind::Collaborator, Operation::ForceDelete),
            "force_delete_collaborator"
        );
    }

    #[test]
    fn admin_holds_every_core_permission() {
        let perms = Role::Admin.permissions();
        for kind in EntityKind::ALL {
            for op in Operation::CORE {
                assert!(perms.contains(&permission_name(kind, op)), "{kind} {op:?}");
            }
        }
    }

    #[test]
    fn manager_cannot_touch_economic_groups_beyond_viewing() {
        let perms = Role::Manager.permissions();
        assert!(perms.contains("view_economic_group"));
        assert!(!perms.contains("create_economic_group"));
        assert!(!perms.contains("delete_brand"));
        assert!(perms.contains("delete_collaborator"));
        assert_eq!(perms.len(), 11);
    }

    #[test]
    fn viewer_is_read_only() {
        let perms = Role::Viewer.permissions();
        assert_eq!(perms.len(), 4);
        assert!(perms.iter().all(|p| p.starts_with("view_")));
    }

    #[test]
    fn children_follow_declaration_order() {
        for pair in EntityKind::ALL.windows(2) {
            assert_eq!(pair[0].child(), Some(pair[1]));
        }
        assert_eq!(EntityKind::Collaborator.child(), None);
    }

    #[test]
    fn permission_set_serializes_as_plain_list() {
        let set = PermissionSet::new().with("view_unit").with("create_unit");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["create_unit","view_unit"]"#);
    }
}
