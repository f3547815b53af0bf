use business_hierarchy_sdk::{
    Brand, BrandFilter, BrandInput, EntityKind, ListQuery, NewBrand, Operation, Page,
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
use crate::domain::validation::{self, already_taken, invalid_reference};
use crate::infra::storage::db::db_err;

impl<GR, BR, UR, CR> Service<GR, BR, UR, CR>
where
    GR: EconomicGroupsRepository,
    BR: BrandsRepository,
    UR: UnitsRepository,
    CR: CollaboratorsRepository,
{
    /// Brand names only collide inside the same economic group, so the
    /// uniqueness check runs only once the group itself is known to exist.
    pub(super) async fn check_brand<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &BrandInput,
        exclude_id: Option<i32>,
    ) -> Result<NewBrand, DomainError> {
        let (candidate, mut errors) = validation::check_brand(input);
        if let Some(group_id) = candidate.economic_group_id {
            if self.groups.exists(conn, group_id).await? {
                if let Some(name) = &candidate.name
                    && self
                        .brands
                        .name_taken_in_group(conn, group_id, name, exclude_id)
                        .await?
                {
                    errors.add(fields::NAME, already_taken(fields::NAME));
                }
            } else {
                errors.add(
                    fields::ECONOMIC_GROUP_ID,
                    invalid_reference(fields::ECONOMIC_GROUP_ID),
                );
            }
        }
        accept(candidate.into_draft(), errors)
    }

    pub(super) async fn create_brand(&self, input: &BrandInput) -> Result<Brand, DomainError> {
        let txn = self.begin().await?;
        let draft = self.check_brand(&txn, input, None).await?;
        let brand = self.brands.create(&txn, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(brand)
    }

    pub(super) async fn update_brand(
        &self,
        id: i32,
        input: &BrandInput,
    ) -> Result<Brand, DomainError> {
        let txn = self.begin().await?;
        if !self.brands.exists(&txn, id).await? {
            return Err(DomainError::not_found(EntityKind::Brand, id));
        }
        let draft = self.check_brand(&txn, input, Some(id)).await?;
        let brand = self.brands.update(&txn, id, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(brand)
    }

    /// # Errors
    /// Gate errors or `Database`.
    #[instrument(skip(self, ctx))]
    pub async fn list_brands(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: BrandFilter,
    ) -> Result<Page<Brand>, DomainError> {
        authz::ensure(ctx, EntityKind::Brand, Operation::ViewCollection)?;
        let req = self.page_request(query);
        let page = self.brands.list_page(&self.db, &req, filter).await?;
        tracing::debug!(items = page.items.len(), total = page.total_items, "listed brands");
        Ok(page)
    }
}
