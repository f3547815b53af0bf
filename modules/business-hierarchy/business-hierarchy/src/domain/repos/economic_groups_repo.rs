use async_trait::async_trait;
use business_hierarchy_sdk::{EconomicGroup, NewEconomicGroup, Page};
use sea_orm::ConnectionTrait;

use super::PageRequest;
use crate::domain::error::DomainError;

/// Repository trait for economic group persistence operations.
///
/// All methods accept `conn: &C`, either a `DatabaseConnection` or a
/// `DatabaseTransaction` opened by the service.
#[async_trait]
pub trait EconomicGroupsRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<EconomicGroup>, DomainError>;

    /// List groups ordered by name.
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
    ) -> Result<Page<EconomicGroup>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewEconomicGroup,
    ) -> Result<EconomicGroup, DomainError>;

    /// Overwrite every field of an existing group.
    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewEconomicGroup,
    ) -> Result<EconomicGroup, DomainError>;

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

    /// Whether another group (not `exclude_id`) already uses `name`.
    async fn name_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError>;

    /// Number of brands referencing the group.
    async fn count_dependents<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<u64, DomainError>;
}
