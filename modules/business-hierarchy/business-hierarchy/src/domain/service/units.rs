use business_hierarchy_sdk::{
    EntityKind, ListQuery, NewUnit, Operation, Page, SecurityContext, Unit, UnitFilter,
    UnitInput, fields,
};
use sea_orm::ConnectionTrait;
use tracing::instrument;

use super::{Service, accept};
use crate::domain::authz;
use crate::domain::error::DomainError;
use crate::domain::repos::{
    BrandsRepository, CollaboratorsRepository, EconomicGroupsRepository, UnitsRepository,
};
use crate::domain::validation::{self, already_taken, invalid_reference};
use crate::infra::storage::db::db_err;

impl<GR, BR, UR, CR> Service<GR, BR, UR, CR>
where
    GR: EconomicGroupsRepository,
    BR: BrandsRepository,
    UR: UnitsRepository,
    CR: CollaboratorsRepository,
{
    pub(super) async fn check_unit<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &UnitInput,
        exclude_id: Option<i32>,
    ) -> Result<NewUnit, DomainError> {
        let (candidate, mut errors) = validation::check_unit(input);
        if let Some(brand_id) = candidate.brand_id
            && !self.brands.exists(conn, brand_id).await?
        {
            errors.add(fields::BRAND_ID, invalid_reference(fields::BRAND_ID));
        }
        if let Some(tax_id) = &candidate.tax_id
            && self.units.tax_id_taken(conn, tax_id, exclude_id).await?
        {
            errors.add(fields::TAX_ID, already_taken(fields::TAX_ID));
        }
        accept(candidate.into_draft(), errors)
    }

    pub(super) async fn create_unit(&self, input: &UnitInput) -> Result<Unit, DomainError> {
        let txn = self.begin().await?;
        let draft = self.check_unit(&txn, input, None).await?;
        let unit = self.units.create(&txn, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(unit)
    }

    pub(super) async fn update_unit(&self, id: i32, input: &UnitInput) -> Result<Unit, DomainError> {
        let txn = self.begin().await?;
        if !self.units.exists(&txn, id).await? {
            return Err(DomainError::not_found(EntityKind::Unit, id));
        }
        let draft = self.check_unit(&txn, input, Some(id)).await?;
        let unit = self.units.update(&txn, id, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(unit)
    }

    /// # Errors
    /// Gate errors or `Database`.
    #[instrument(skip(self, ctx))]
    pub async fn list_units(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: UnitFilter,
    ) -> Result<Page<Unit>, DomainError> {
        authz::ensure(ctx, EntityKind::Unit, Operation::ViewCollection)?;
        let req = self.page_request(query);
        let page = self.units.list_page(&self.db, &req, filter).await?;
        tracing::debug!(items = page.items.len(), total = page.total_items, "listed units");
        Ok(page)
    }
}
