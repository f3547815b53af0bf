//! Domain service layer - business logic and rules.
//!
//! Per-resource submodules carry the rules of each level of the hierarchy:
//! - `economic_groups` - global name uniqueness
//! - `brands` - name uniqueness scoped to the owning group
//! - `units` - globally unique tax id
//! - `collaborators` - unique email and personal tax id, cross-parent listing
//!
//! Every mutation follows the same pipeline: authorization gate, stateless
//! field rules, then (inside one transaction) parent existence, uniqueness
//! pre-checks and the write. The unique indexes in the store remain the final
//! arbiter; a write that loses a race is reported as the same field error the
//! pre-check would have produced.

use business_hierarchy_sdk::{
    EntityKind, FieldErrors, ListQuery, NormalizedRecord, Operation, Payload, Record,
    SecurityContext,
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::instrument;

use crate::domain::authz;
use crate::domain::error::DomainError;
use crate::domain::repos::{
    BrandsRepository, CollaboratorsRepository, EconomicGroupsRepository, PageRequest,
    UnitsRepository,
};
use crate::infra::storage::db::db_err;

mod brands;
mod collaborators;
mod economic_groups;
mod units;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Business hierarchy service, generic over its four repositories.
pub struct Service<GR, BR, UR, CR> {
    db: DatabaseConnection,
    groups: GR,
    brands: BR,
    units: UR,
    collaborators: CR,
    config: ServiceConfig,
}

impl<GR, BR, UR, CR> Service<GR, BR, UR, CR>
where
    GR: EconomicGroupsRepository,
    BR: BrandsRepository,
    UR: UnitsRepository,
    CR: CollaboratorsRepository,
{
    pub fn new(
        db: DatabaseConnection,
        groups: GR,
        brands: BR,
        units: UR,
        collaborators: CR,
        config: ServiceConfig,
    ) -> Self {
        Self {
            db,
            groups,
            brands,
            units,
            collaborators,
            config,
        }
    }

    fn page_request(&self, query: ListQuery) -> PageRequest {
        PageRequest::resolve(
            query,
            self.config.default_page_size,
            self.config.max_page_size,
        )
    }

    async fn begin(&self) -> Result<DatabaseTransaction, DomainError> {
        self.db.begin().await.map_err(db_err)
    }

    /// Run the full rule set against the current store without writing.
    ///
    /// `exclude_id` names the record being updated so it does not collide
    /// with itself on uniqueness.
    ///
    /// # Errors
    /// `Validation` with every failing field, or `Database`.
    #[instrument(skip(self, payload), fields(kind = %payload.kind()))]
    pub async fn validate_and_normalize(
        &self,
        payload: &Payload,
        exclude_id: Option<i32>,
    ) -> Result<NormalizedRecord, DomainError> {
        let record = match payload {
            Payload::EconomicGroup(input) => NormalizedRecord::EconomicGroup(
                self.check_economic_group(&self.db, input, exclude_id)
                    .await?,
            ),
            Payload::Brand(input) => {
                NormalizedRecord::Brand(self.check_brand(&self.db, input, exclude_id).await?)
            }
            Payload::Unit(input) => {
                NormalizedRecord::Unit(self.check_unit(&self.db, input, exclude_id).await?)
            }
            Payload::Collaborator(input) => NormalizedRecord::Collaborator(
                self.check_collaborator(&self.db, input, exclude_id)
                    .await?,
            ),
        };
        Ok(record)
    }

    /// Look up one record of `kind`.
    ///
    /// # Errors
    /// `Unauthenticated`/`Forbidden` from the gate, `NotFound`, or `Database`.
    #[instrument(skip(self, ctx), fields(kind = %kind))]
    pub async fn get_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<Record, DomainError> {
        authz::ensure(ctx, kind, Operation::ViewOne)?;
        let found = match kind {
            EntityKind::EconomicGroup => self.groups.get(&self.db, id).await?.map(Record::from),
            EntityKind::Brand => self.brands.get(&self.db, id).await?.map(Record::from),
            EntityKind::Unit => self.units.get(&self.db, id).await?.map(Record::from),
            EntityKind::Collaborator => {
                self.collaborators.get(&self.db, id).await?.map(Record::from)
            }
        };
        found.ok_or_else(|| DomainError::not_found(kind, id))
    }

    /// Validate and insert a new record.
    ///
    /// # Errors
    /// Gate errors, `Validation`, or `Database`.
    #[instrument(skip(self, ctx, payload), fields(kind = %payload.kind()))]
    pub async fn create_entity(
        &self,
        ctx: &SecurityContext,
        payload: &Payload,
    ) -> Result<Record, DomainError> {
        authz::ensure(ctx, payload.kind(), Operation::Create)?;
        let record: Record = match payload {
            Payload::EconomicGroup(input) => self.create_economic_group(input).await?.into(),
            Payload::Brand(input) => self.create_brand(input).await?.into(),
            Payload::Unit(input) => self.create_unit(input).await?.into(),
            Payload::Collaborator(input) => self.create_collaborator(input).await?.into(),
        };
        tracing::info!(id = record.id(), "created");
        Ok(record)
    }

    /// Replace every field of an existing record.
    ///
    /// # Errors
    /// Gate errors, `NotFound`, `Validation`, or `Database`.
    #[instrument(skip(self, ctx, payload), fields(kind = %payload.kind()))]
    pub async fn update_entity(
        &self,
        ctx: &SecurityContext,
        id: i32,
        payload: &Payload,
    ) -> Result<Record, DomainError> {
        authz::ensure(ctx, payload.kind(), Operation::Edit)?;
        let record: Record = match payload {
            Payload::EconomicGroup(input) => self.update_economic_group(id, input).await?.into(),
            Payload::Brand(input) => self.update_brand(id, input).await?.into(),
            Payload::Unit(input) => self.update_unit(id, input).await?.into(),
            Payload::Collaborator(input) => self.update_collaborator(id, input).await?.into(),
        };
        tracing::info!("updated");
        Ok(record)
    }

    /// Remove a record that nothing references.
    ///
    /// # Errors
    /// Gate errors, `NotFound`, `Conflict` when dependents exist, or `Database`.
    #[instrument(skip(self, ctx), fields(kind = %kind))]
    pub async fn delete_entity(
        &self,
        ctx: &SecurityContext,
        kind: EntityKind,
        id: i32,
    ) -> Result<(), DomainError> {
        authz::ensure(ctx, kind, Operation::Delete)?;
        let txn = self.begin().await?;

        let (exists, dependents) = match kind {
            EntityKind::EconomicGroup => (
                self.groups.exists(&txn, id).await?,
                self.groups.count_dependents(&txn, id).await?,
            ),
            EntityKind::Brand => (
                self.brands.exists(&txn, id).await?,
                self.brands.count_dependents(&txn, id).await?,
            ),
            EntityKind::Unit => (
                self.units.exists(&txn, id).await?,
                self.units.count_dependents(&txn, id).await?,
            ),
            EntityKind::Collaborator => (self.collaborators.get(&txn, id).await?.is_some(), 0),
        };
        if !exists {
            return Err(DomainError::not_found(kind, id));
        }
        if dependents > 0 {
            tracing::warn!(dependents, "delete refused");
            return Err(DomainError::conflict(dependents_message(kind, dependents)));
        }

        let deleted = match kind {
            EntityKind::EconomicGroup => self.groups.delete(&txn, id).await?,
            EntityKind::Brand => self.brands.delete(&txn, id).await?,
            EntityKind::Unit => self.units.delete(&txn, id).await?,
            EntityKind::Collaborator => self.collaborators.delete(&txn, id).await?,
        };
        if !deleted {
            return Err(DomainError::not_found(kind, id));
        }
        txn.commit().await.map_err(db_err)?;

        tracing::info!("deleted");
        Ok(())
    }
}

/// A draft is accepted only when no rule failed.
fn accept<T>(draft: Option<T>, errors: FieldErrors) -> Result<T, DomainError> {
    match draft {
        Some(draft) if errors.is_empty() => Ok(draft),
        _ => Err(errors.into()),
    }
}

fn dependents_message(kind: EntityKind, dependents: u64) -> String {
    let child = kind
        .child()
        .map_or_else(|| "record".to_owned(), |c| c.label().to_lowercase());
    let plural = if dependents == 1 { "" } else { "s" };
    format!(
        "{} cannot be deleted while it has {dependents} dependent {child}{plural}.",
        kind.label()
    )
}
