use async_trait::async_trait;
use business_hierarchy_sdk::{NewUnit, Page, Unit, UnitFilter, fields};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::{PageRequest, UnitsRepository};
use crate::infra::storage::db::{contains_pattern, db_err, delete_err, fetch_page, write_err};
use crate::infra::storage::entity::collaborator;
use crate::infra::storage::entity::unit::{ActiveModel, Column, Entity};
use crate::infra::storage::ordering::by_name;

/// ORM-based implementation of the `UnitsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmUnitsRepository;

#[async_trait]
impl UnitsRepository for OrmUnitsRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Unit>, DomainError> {
        let found = Entity::find_by_id(id).one(conn).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: UnitFilter,
    ) -> Result<Page<Unit>, DomainError> {
        let mut query = Entity::find();
        if let Some(brand_id) = filter.brand_id {
            query = query.filter(Column::BrandId.eq(brand_id));
        }
        if let Some(term) = &req.search {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(Column::TradeName)))
                    .like(LikeExpr::new(contains_pattern(term)).escape('\\')),
            );
        }
        let query = by_name(query, Column::TradeName, Column::Id, req.order);
        let page = fetch_page(query, conn, req).await.map_err(db_err)?;
        Ok(page.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        draft: &NewUnit,
    ) -> Result<Unit, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = ActiveModel {
            id: NotSet,
            trade_name: Set(draft.trade_name.clone()),
            legal_name: Set(draft.legal_name.clone()),
            tax_id: Set(draft.tax_id.clone()),
            brand_id: Set(draft.brand_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = m
            .insert(conn)
            .await
            .map_err(|e| write_err(e, &[fields::TAX_ID], fields::BRAND_ID))?;
        Ok(saved.into())
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewUnit,
    ) -> Result<Unit, DomainError> {
        let m = ActiveModel {
            id: Set(id),
            trade_name: Set(draft.trade_name.clone()),
            legal_name: Set(draft.legal_name.clone()),
            tax_id: Set(draft.tax_id.clone()),
            brand_id: Set(draft.brand_id),
            created_at: NotSet,
            updated_at: Set(OffsetDateTime::now_utc()),
        };
        let saved = m
            .update(conn)
            .await
            .map_err(|e| write_err(e, &[fields::TAX_ID], fields::BRAND_ID))?;
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
            .map_err(|e| delete_err(e, "Unit"))?;
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

    async fn tax_id_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError> {
        let mut query = Entity::find().filter(Column::TaxId.eq(tax_id));
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
        collaborator::Entity::find()
            .filter(collaborator::Column::UnitId.eq(id))
            .count(conn)
            .await
            .map_err(db_err)
    }
}
