use async_trait::async_trait;
use business_hierarchy_sdk::{Brand, BrandFilter, NewBrand, Page};
use sea_orm::ConnectionTrait;

use super::PageRequest;
use crate::domain::error::DomainError;

/// Repository trait for brand persistence operations.
#[async_trait]
pub trait BrandsRepository: Send + Sync {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Brand>, DomainError>;

    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: BrandFilter,
    ) -> Result<Page<Brand>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewBrand,
    ) -> Result<Brand, DomainError>;

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewBrand,
    ) -> Result<Brand, DomainError>;

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

    /// Whether `name` is used by another brand of the same economic group.
    async fn name_taken_in_group<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        economic_group_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError>;

    /// Number of units referencing the brand.
    async fn count_dependents<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<u64, DomainError>;
}
