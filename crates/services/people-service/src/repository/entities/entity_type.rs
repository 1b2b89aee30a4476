//! Entity type database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::EntityType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entity_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EntityType {
    fn from(model: Model) -> Self {
        EntityType {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
