//! `BusinessHierarchyClient` trait definition.
//!
//! This trait defines the public API for the `business-hierarchy` module.
//! All methods take a `SecurityContext` resolved once per request by the caller.

use async_trait::async_trait;

use crate::access::{EntityKind, Operation, SecurityContext};
use crate::errors::BusinessHierarchyError;
use crate::models::{Brand, Collaborator, EconomicGroup, NormalizedRecord, Payload, Record, Unit};
use crate::query::{BrandFilter, CollaboratorFilter, ListQuery, Page, UnitFilter};

/// Public API trait for the `business-hierarchy` module.
///
/// ```ignore
/// let record = client
///     .create_entity(&ctx, Payload::Brand(input))
///     .await?;
/// ```
#[async_trait]
pub trait BusinessHierarchyClient: Send + Sync {
    /// Normalize and validate a payload without writing anything.
    ///
    /// `exclude_id` names the record being edited so it does not collide with itself.
    async fn validate_and_normalize(
        &self,
        payload: &Payload,
        exclude_id: Option<i32>,
    ) -> Result<NormalizedRecord, BusinessHierarchyError>;

    /// Pure capability check; `record` is accepted for symmetry but never consulted.
    fn can_perform(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        operation: Operation,
        record: Option<&Record>,
    ) -> bool;

    async fn get_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<Record, BusinessHierarchyError>;

    async fn create_entity(
        &self,
        ctx: &SecurityContext,
        payload: &Payload,
    ) -> Result<Record, BusinessHierarchyError>;

    /// Replace every field of record `id`; all rules rerun.
    async fn update_entity(
        &self,
        ctx: &SecurityContext,
        id: i32,
        payload: &Payload,
    ) -> Result<Record, BusinessHierarchyError>;

    /// Delete record `id`; refused while dependents exist.
    async fn delete_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<(), BusinessHierarchyError>;

    async fn list_economic_groups(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
    ) -> Result<Page<EconomicGroup>, BusinessHierarchyError>;

    async fn list_brands(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: BrandFilter,
    ) -> Result<Page<Brand>, BusinessHierarchyError>;

    async fn list_units(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: UnitFilter,
    ) -> Result<Page<Unit>, BusinessHierarchyError>;

    async fn list_collaborators(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: CollaboratorFilter,
    ) -> Result<Page<Collaborator>, BusinessHierarchyError>;
}
