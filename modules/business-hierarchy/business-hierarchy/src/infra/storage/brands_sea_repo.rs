use async_trait::async_trait;
use business_hierarchy_sdk::{Brand, BrandFilter, NewBrand, Page, fields};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::{BrandsRepository, PageRequest};
use crate::infra::storage::db::{contains_pattern, db_err, delete_err, fetch_page, write_err};
use crate::infra::storage::entity::brand::{ActiveModel, Column, Entity};
use crate::infra::storage::entity::unit;
use crate::infra::storage::ordering::by_name;

/// ORM-based implementation of the `BrandsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmBrandsRepository;

#[async_trait]
impl BrandsRepository for OrmBrandsRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Brand>, DomainError> {
        let found = Entity::find_by_id(id).one(conn).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: BrandFilter,
    ) -> Result<Page<Brand>, DomainError> {
        let mut query = Entity::find();
        if let Some(group_id) = filter.economic_group_id {
            query = query.filter(Column::EconomicGroupId.eq(group_id));
        }
        if let Some(term) = &req.search {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::Name)))
                    .like(LikeExpr::new(contains_pattern(term)).escape('\\')),
            );
        }
        let query = by_name(query, Column::Name, Column::Id, req.order);
        let page = fetch_page(query, conn, req).await.map_err(db_err)?;
        Ok(page.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewBrand,
    ) -> Result<Brand, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = ActiveModel {
            id: NotSet,
            name: Set(draft.name.clone()),
            economic_group_id: Set(draft.economic_group_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = m
            .insert(conn)
            .await
            .map_err(|e| write_err(e, &[fields::NAME], fields::ECONOMIC_GROUP_ID))?;
        Ok(saved.into())
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewBrand,
    ) -> Result<Brand, DomainError> {
        let m = ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            economic_group_id: Set(draft.economic_group_id),
            created_at: NotSet,
            updated_at: Set(OffsetDateTime::now_utc()),
        };
        let saved = m
            .update(conn)
            .await
            .map_err(|e| write_err(e, &[fields::NAME], fields::ECONOMIC_GROUP_ID))?;
        Ok(saved.into())
    }

    async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<bool, DomainError> {
        let result = Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| delete_err(e, "Brand"))?;
        Ok(result.rows_affected > 0)
    }

    async fn exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<bool, DomainError> {
        let count = Entity::find()
            .filter(Column::Id.eq(id))
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn name_taken_in_group<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        economic_group_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError> {
        let mut query = Entity::find()
            .filter(Column::EconomicGroupId.eq(economic_group_id))
            .filter(Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query.count(conn).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn count_dependents<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<u64, DomainError> {
        unit::Entity::find()
            .filter(unit::Column::BrandId.eq(id))
            .count(conn)
            .await
            .map_err(db_err)
    }
}
