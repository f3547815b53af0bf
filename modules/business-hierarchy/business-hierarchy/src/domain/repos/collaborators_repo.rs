use async_trait::async_trait;
use business_hierarchy_sdk::{Collaborator, CollaboratorFilter, NewCollaborator, Page};
use sea_orm::ConnectionTrait;

use super::PageRequest;
use crate::domain::error::DomainError;

/// Repository trait for collaborator persistence operations.
#[async_trait]
pub trait CollaboratorsRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Collaborator>, DomainError>;

    /// List collaborators ordered by name, optionally narrowed by any ancestor.
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: CollaboratorFilter,
    ) -> Result<Page<Collaborator>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewCollaborator,
    ) -> Result<Collaborator, DomainError>;

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewCollaborator,
    ) -> Result<Collaborator, DomainError>;

    async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<bool, DomainError>;

    async fn email_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError>;

    /// `personal_tax_id` must already be digit-only.
    async fn personal_tax_id_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        personal_tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError>;
}
