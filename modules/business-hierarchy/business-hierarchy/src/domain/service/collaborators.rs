use business_hierarchy_sdk::{
    Collaborator, CollaboratorFilter, CollaboratorInput, EntityKind, ListQuery, NewCollaborator,
    Operation, Page, SecurityContext, fields,
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
    pub(super) async fn check_collaborator<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: &CollaboratorInput,
        exclude_id: Option<i32>,
    ) -> Result<NewCollaborator, DomainError> {
        let (candidate, mut errors) = validation::check_collaborator(input);
        if let Some(unit_id) = candidate.unit_id
            && !self.units.exists(conn, unit_id).await?
        {
            errors.add(fields::UNIT_ID, invalid_reference(fields::UNIT_ID));
        }
        if let Some(email) = &candidate.email
            && self.collaborators.email_taken(conn, email, exclude_id).await?
        {
            errors.add(fields::EMAIL, already_taken(fields::EMAIL));
        }
        if let Some(personal_tax_id) = &candidate.personal_tax_id
            && self
                .collaborators
                .personal_tax_id_taken(conn, personal_tax_id, exclude_id)
                .await?
        {
            errors.add(
                fields::PERSONAL_TAX_ID,
                already_taken(fields::PERSONAL_TAX_ID),
            );
        }
        accept(candidate.into_draft(), errors)
    }

    pub(super) async fn create_collaborator(
        &self,
        input: &CollaboratorInput,
    ) -> Result<Collaborator, DomainError> {
        let txn = self.begin().await?;
        let draft = self.check_collaborator(&txn, input, None).await?;
        let collaborator = self.collaborators.create(&txn, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(collaborator)
    }

    pub(super) async fn update_collaborator(
        &self,
        id: i32,
        input: &CollaboratorInput,
    ) -> Result<Collaborator, DomainError> {
        let txn = self.begin().await?;
        if self.collaborators.get(&txn, id).await?.is_none() {
            return Err(DomainError::not_found(EntityKind::Collaborator, id));
        }
        let draft = self.check_collaborator(&txn, input, Some(id)).await?;
        let collaborator = self.collaborators.update(&txn, id, &draft).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(collaborator)
    }

    /// Filters may name any ancestor; all given filters must hold.
    ///
    /// # Errors
    /// Gate errors or `Database`.
    #[instrument(skip(self, ctx))]
    pub async fn list_collaborators(
        &self,
        ctx: &SecurityContext,
        query: ListQuery,
        filter: CollaboratorFilter,
    ) -> Result<Page<Collaborator>, DomainError> {
        authz::ensure(ctx, EntityKind::Collaborator, Operation::ViewCollection)?;
        let req = self.page_request(query);
        let page = self.collaborators.list_page(&self.db, &req, filter).await?;
        tracing::debug!(items = page.items.len(), total = page.total_items, "listed collaborators");
        Ok(page)
    }
}
