use async_trait::async_trait;
use business_hierarchy_sdk::{EconomicGroup, NewEconomicGroup, Page, fields};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::{EconomicGroupsRepository, PageRequest};
use crate::infra::storage::db::{contains_pattern, db_err, delete_err, fetch_page, write_err};
use crate::infra::storage::entity::brand;
use crate::infra::storage::entity::economic_group::{ActiveModel, Column, Entity};
use crate::infra::storage::ordering::by_name;

/// ORM-based implementation of the `EconomicGroupsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmEconomicGroupsRepository;

#[async_trait]
impl EconomicGroupsRepository for OrmEconomicGroupsRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<EconomicGroup>, DomainError> {
        let found = Entity::find_by_id(id).one(conn).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
    ) -> Result<Page<EconomicGroup>, DomainError> {
        let mut query = Entity::find();
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
        draft: &NewEconomicGroup,
    ) -> Result<EconomicGroup, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = ActiveModel {
            id: NotSet,
            name: Set(draft.name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = m
            .insert(conn)
            .await
            .map_err(|e| write_err(e, &[fields::NAME], ""))?;
        Ok(saved.into())
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewEconomicGroup,
    ) -> Result<EconomicGroup, DomainError> {
        let m = ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            created_at: NotSet,
            updated_at: Set(OffsetDateTime::now_utc()),
        };
        let saved = m
            .update(conn)
            .await
            .map_err(|e| write_err(e, &[fields::NAME], ""))?;
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
            .map_err(|e| delete_err(e, "Economic group"))?;
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

    async fn name_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError> {
        let mut query = Entity::find().filter(Column::Name.eq(name));
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
        brand::Entity::find()
            .filter(brand::Column::EconomicGroupId.eq(id))
            .count(conn)
            .await
            .map_err(db_err)
    }
}
