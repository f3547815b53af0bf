//! Local implementation of `BusinessHierarchyClient`.
//!
//! It delegates to the domain service and converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use business_hierarchy_sdk::{
    Brand, BrandFilter, BusinessHierarchyClient, BusinessHierarchyError, Collaborator,
    CollaboratorFilter, EconomicGroup, EntityKind, ListQuery, NormalizedRecord, Operation, Page,
    Payload, Record, SecurityContext, Unit, UnitFilter,
};

use crate::domain::authz;
use crate::module::ConcreteService;

/// Local implementation of the `BusinessHierarchyClient` trait that delegates to the domain service.
///
/// The caller's `SecurityContext` is forwarded unchanged, so every call goes
/// through the same authorization gate.
pub struct BusinessHierarchyLocalClient {
    service: Arc<ConcreteService>,
}

impl BusinessHierarchyLocalClient {
    #[must_use]
    pub(crate) fn new(service: Arc<ConcreteService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BusinessHierarchyClient for BusinessHierarchyLocalClient {
    async fn validate_and_normalize(
        &self,
        payload: &Payload,
        exclude_id: Option<i32>,
    ) -> Result<NormalizedRecord, BusinessHierarchyError> {
        self.service
            .validate_and_normalize(payload, exclude_id)
            .await
            .map_err(Into::into)
    }

    fn can_perform(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        operation: Operation,
        record: Option<&Record>,
    ) -> bool {
        ctx.actor()
            .is_some_and(|actor| authz::can_perform(actor, kind, operation, record))
    }

    async fn get_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<Record, BusinessHierarchyError> {
        self.service
            .get_entity(ctx, kind, id)
            .await
            .map_err(Into::into)
    }

    async fn create_entity(
        &self,
        ctx: &SecurityContext,
        payload: &Payload,
    ) -> Result<Record, BusinessHierarchyError> {
        self.service
            .create_entity(ctx, payload)
            .await
            .map_err(Into::into)
    }

    async fn update_entity(
        &self,
        ctx: &SecurityContext,
        id: i32,
        payload: &Payload,
    ) -> Result<Record, BusinessHierarchyError> {
        self.service
            .update_entity(ctx, id, payload)
            .await
            .map_err(Into::into)
    }

    async fn delete_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<(), BusinessHierarchyError> {
        self.service
            .delete_entity(ctx, kind, id)
            .await
            .map_err(Into::into)
    }

    async fn list_economic_groups(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
    ) -> Result<Page<EconomicGroup>, BusinessHierarchyError> {
        self.service
            .list_economic_groups(ctx, query)
            .await
            .map_err(Into::into)
    }

    async fn list_brands(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: BrandFilter,
    ) -> Result<Page<Brand>, BusinessHierarchyError> {
        self.service
            .list_brands(ctx, query, filter)
            .await
            .map_err(Into::into)
    }

    async fn list_units(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: UnitFilter,
    ) -> Result<Page<Unit>, BusinessHierarchyError> {
        self.service
            .list_units(ctx, query, filter)
            .await
            .map_err(Into::into)
    }

    async fn list_collaborators(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: CollaboratorFilter,
    ) -> Result<Page<Collaborator>, BusinessHierarchyError> {
        self.service
            .list_collaborators(ctx, query, filter)
            .await
            .map_err(Into::into)
    }
}
