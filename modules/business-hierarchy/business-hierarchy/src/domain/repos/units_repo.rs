use async_trait::async_trait;
use business_hierarchy_sdk::{NewUnit, Page, Unit, UnitFilter};
use sea_orm::ConnectionTrait;

use super::PageRequest;
use crate::domain::error::DomainError;

/// Repository trait for unit persistence operations.
#[async_trait]
pub trait UnitsRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Unit>, DomainError>;

    /// List units ordered by trade name.
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: UnitFilter,
    ) -> Result<Page<Unit>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewUnit,
    ) -> Result<Unit, DomainError>;

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewUnit,
    ) -> Result<Unit, DomainError>;

    async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<bool, DomainError>;

    async fn exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<bool, DomainError>;

    /// `tax_id` must already be digit-only.
    async fn tax_id_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError>;

    /// Number of collaborators referencing the unit.
    async fn count_dependents<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<u64, DomainError>;
}
