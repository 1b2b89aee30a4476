//! Entity type repository.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::entity_type::{self, Entity as EntityTypeEntity};
use common::AppResult;
use domain::EntityType;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EntityTypeRepository: Send + Sync {
    /// All entity types ordered by name
    async fn list(&self) -> AppResult<Vec<EntityType>>;
}

pub struct EntityTypeStore {
    db: DatabaseConnection,
}

impl EntityTypeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityTypeRepository for EntityTypeStore {
    async fn list(&self) -> AppResult<Vec<EntityType>> {
        let models = EntityTypeEntity::find()
            .order_by_asc(entity_type::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(EntityType::from).collect())
    }
}
