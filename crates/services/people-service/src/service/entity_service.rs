//! Entity service - read access to the content model's entity types.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::EntityType;

use crate::repository::EntityTypeRepository;

#[async_trait]
pub trait EntityService: Send + Sync {
    /// List every entity type
    async fn entity_types(&self) -> AppResult<Vec<EntityType>>;
}

pub struct EntityManager {
    repo: Arc<dyn EntityTypeRepository>,
}

impl EntityManager {
    pub fn new(repo: Arc<dyn EntityTypeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EntityService for EntityManager {
    async fn entity_types(&self) -> AppResult<Vec<EntityType>> {
        self.repo.list().await
    }
}
