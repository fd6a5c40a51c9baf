use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::showing::Entity")]
    Showing,
}

impl Related<super::showing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
