//! Business Hierarchy SDK
//!
//! Transport-agnostic contract for the `business-hierarchy` module:
//! - `BusinessHierarchyClient` - trait for inter-module communication
//! - Economic group, brand, unit and collaborator models
//! - Access-control vocabulary (`EntityKind`, `Operation`, `Actor`, roles)
//! - `BusinessHierarchyError` - error types

pub mod access;
pub mod api;
pub mod errors;
pub mod models;
pub mod query;

pub use access::{
    Actor, EntityKind, Operation, PermissionSet, Role, SecurityContext, permission_name,
};
pub use api::BusinessHierarchyClient;
pub use errors::{BusinessHierarchyError, FieldErrors};
pub use models::{
    Brand, BrandInput, Collaborator, CollaboratorInput, EconomicGroup, EconomicGroupInput,
    NewBrand, NewCollaborator, NewEconomicGroup, NewUnit, NormalizedRecord, Payload, Record, Unit,
    UnitInput, fields,
};
pub use query::{BrandFilter, CollaboratorFilter, ListQuery, Page, SortOrder, UnitFilter};
