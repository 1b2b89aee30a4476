//! Server-side session repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::session::{self, ActiveModel, Entity as SessionEntity};
use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Record a new active session for a person
    async fn create(&self, person_id: Uuid, session_token: String) -> AppResult<()>;

    /// Whether the session exists and has not been logged out
    async fn is_active(&self, session_token: &str) -> AppResult<bool>;

    /// Mark the session logged out. Returns false if it was not active.
    async fn invalidate(&self, session_token: &str) -> AppResult<bool>;
}

/// SeaORM implementation of SessionRepository
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create(&self, person_id: Uuid, session_token: String) -> AppResult<()> {
        let active_model = ActiveModel {
            session_token: Set(session_token),
            person_id: Set(person_id),
            created_at: Set(Utc::now()),
            logged_out_at: Set(None),
        };

        active_model.insert(&self.db).await?;
        Ok(())
    }

    async fn is_active(&self, session_token: &str) -> AppResult<bool> {
        let found = SessionEntity::find_by_id(session_token.to_string())
            .filter(session::Column::LoggedOutAt.is_null())
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }

    async fn invalidate(&self, session_token: &str) -> AppResult<bool> {
        let result = SessionEntity::update_many()
            .col_expr(session::Column::LoggedOutAt, Expr::value(Utc::now()))
            .filter(session::Column::SessionToken.eq(session_token))
            .filter(session::Column::LoggedOutAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
