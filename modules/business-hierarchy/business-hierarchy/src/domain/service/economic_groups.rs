use business_hierarchy_sdk::{
    EconomicGroup, EconomicGroupInput, EntityKind, ListQuery, NewEconomicGroup, Operation, Page,
    SecurityContext, fields,
};
use sea_orm::ConnectionTrait;
use tracing::instrument;

use super::{Service, accept};
use crate::domain::authz;
use crate::domain::error::DomainError;
use crate::domain::repos::{
    BrandsRepository, CollaboratorsRepository, EconomicGroupsRepository, UnitsRepository,
};
use crate::domain::validation::{self, already_taken};
use crate::infra::storage::db::db_err;

impl<GR, BR, UR, CR> Service<GR, BR, UR, CR>
where
    GR: EconomicGroupsRepository,
    BR: BrandsRepository,
    UR: UnitsRepository,
    CR: CollaboratorsRepository,
{
    pub(super) async fn check_economic_group<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &EconomicGroupInput,
        exclude_id: Option<i32>,
    ) -> Result<NewEconomicGroup, DomainError> {
        let (candidate, mut errors) = validation::check_economic_group(input);
        if let Some(name) = &candidate.name
            && self.groups.name_taken(conn, name, exclude_id).await?
        {
            errors.add(fields::NAME, already_taken(fields::NAME));
        }
        accept(candidate.into_draft(), errors)
    }

    pub(super) async fn create_economic_group(
        &self,
        input: &EconomicGroupInput,
    ) -> Result<EconomicGroup, DomainError> {
        let txn = self.begin().await?;
        let draft = self.check_economic_group(&txn, input, None).await?;
        let group = self.groups.create(&txn, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(group)
    }

    pub(super) async fn update_economic_group(
        &self,
        id: i32,
        input: &EconomicGroupInput,
    ) -> Result<EconomicGroup, DomainError> {
        let txn = self.begin().await?;
        if !self.groups.exists(&txn, id).await? {
            return Err(DomainError::not_found(EntityKind::EconomicGroup, id));
        }
        let draft = self.check_economic_group(&txn, input, Some(id)).await?;
        let group = self.groups.update(&txn, id, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(group)
    }

    /// # Errors
    /// Gate errors or `Database`.
    #[instrument(skip(self, ctx))]
    pub async fn list_economic_groups(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
    ) -> Result<Page<EconomicGroup>, DomainError> {
        authz::ensure(ctx, EntityKind::EconomicGroup, Operation::ViewCollection)?;
        let req = self.page_request(query);
        let page = self.groups.list_page(&self.db, &req).await?;
        tracing::debug!(items = page.items.len(), total = page.total_items, "listed economic groups");
        Ok(page)
    }
}
