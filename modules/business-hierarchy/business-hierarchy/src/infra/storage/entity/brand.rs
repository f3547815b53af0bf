use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub economic_group_id: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::economic_group::Entity",
        from = "Column::EconomicGroupId",
        to = "super::economic_group::Column::Id"
    )]
    EconomicGroup,
    #[sea_orm(has_many = "super::unit::Entity")]
    Units,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::economic_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EconomicGroup.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Units.def()
    }
}
