use async_trait::async_trait;
use business_hierarchy_sdk::{Collaborator, CollaboratorFilter, NewCollaborator, Page, fields};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::repos::{CollaboratorsRepository, PageRequest};
use crate::infra::storage::db::{contains_pattern, db_err, delete_err, fetch_page, write_err};
use crate::infra::storage::entity::collaborator::{ActiveModel, Column, Entity, Relation};
use crate::infra::storage::entity::{brand, unit};
use crate::infra::storage::ordering::by_name;

const UNIQUE_FIELDS: &[&str] = &[fields::EMAIL, fields::PERSONAL_TAX_ID];

/// ORM-based implementation of the `CollaboratorsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmCollaboratorsRepository;

#[async_trait]
impl CollaboratorsRepository for OrmCollaboratorsRepository {
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
    ) -> Result<Option<Collaborator>, DomainError> {
        let found = Entity::find_by_id(id).one(conn).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        req: &PageRequest,
        filter: CollaboratorFilter,
    ) -> Result<Page<Collaborator>, DomainError> {
        let mut query = Entity::find();
        if let Some(unit_id) = filter.unit_id {
            query = query.filter(Column::UnitId.eq(unit_id));
        }
        if filter.brand_id.is_some() || filter.economic_group_id.is_some() {
            query = query
                .join(JoinType::InnerJoin, Relation::Unit.def())
                .join(JoinType::InnerJoin, unit::Relation::Brand.def());
            if let Some(brand_id) = filter.brand_id {
                query = query.filter(unit::Column::BrandId.eq(brand_id));
            }
            if let Some(group_id) = filter.economic_group_id {
                query = query.filter(brand::Column::EconomicGroupId.eq(group_id));
            }
        }
        if let Some(term) = &req.search {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((Entity, Column::Name))))
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
        draft: &NewCollaborator,
    ) -> Result<Collaborator, DomainError> {
        let now = OffsetDateTime::now_utc();
        let m = ActiveModel {
            id: NotSet,
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            personal_tax_id: Set(draft.personal_tax_id.clone()),
            unit_id: Set(draft.unit_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = m
            .insert(conn)
            .await
            .map_err(|e| write_err(e, UNIQUE_FIELDS, fields::UNIT_ID))?;
        Ok(saved.into())
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i32,
        draft: &NewCollaborator,
    ) -> Result<Collaborator, DomainError> {
        let m = ActiveModel {
            id: Set(id),
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            personal_tax_id: Set(draft.personal_tax_id.clone()),
            unit_id: Set(draft.unit_id),
            created_at: NotSet,
            updated_at: Set(OffsetDateTime::now_utc()),
        };
        let saved = m
            .update(conn)
            .await
            .map_err(|e| write_err(e, UNIQUE_FIELDS, fields::UNIT_ID))?;
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
            .map_err(|e| delete_err(e, "Collaborator"))?;
        Ok(result.rows_affected > 0)
    }

    async fn email_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError> {
        let mut query = Entity::find().filter(Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query.count(conn).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn personal_tax_id_taken<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        personal_tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DomainError> {
        let mut query = Entity::find().filter(Column::PersonalTaxId.eq(personal_tax_id));
        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }
        let count = query.count(conn).await.map_err(db_err)?;
        Ok(count > 0)
    }
}
