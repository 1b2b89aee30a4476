//! People repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use super::entities::person::{self, Entity as PersonEntity};
use super::entities::role::{self, Entity as RoleEntity};
use super::entities::session::{self, Entity as SessionEntity};
use common::{AppError, AppResult};
use domain::{Authorization, Person, MSG_USER_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// People repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Find a person by normalized email address, ignoring the stored case
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Person>>;

    /// Find the owner of an active (not logged out) session
    async fn find_by_session_token(&self, session_token: &str) -> AppResult<Option<Person>>;

    /// Resolve role names into roles plus the capabilities they grant
    async fn authorization(&self, roles: Vec<String>) -> AppResult<Authorization>;

    /// Store a new password hash and clear the forced-change flag
    async fn update_password(&self, id: Uuid, password_hash: String) -> AppResult<()>;
}

/// SeaORM implementation of PeopleRepository
pub struct PeopleStore {
    db: DatabaseConnection,
}

impl PeopleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PeopleRepository for PeopleStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Person>> {
        let result = PersonEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(person::Column::Email))).eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Person::from))
    }

    async fn find_by_session_token(&self, session_token: &str) -> AppResult<Option<Person>> {
        let result = SessionEntity::find_by_id(session_token.to_string())
            .filter(session::Column::LoggedOutAt.is_null())
            .find_also_related(PersonEntity)
            .one(&self.db)
            .await?;

        Ok(result.and_then(|(_, person)| person).map(Person::from))
    }

    async fn authorization(&self, roles: Vec<String>) -> AppResult<Authorization> {
        if roles.is_empty() {
            return Ok(Authorization::default());
        }

        let models = RoleEntity::find()
            .filter(role::Column::Name.is_in(roles.clone()))
            .all(&self.db)
            .await?;

        Ok(Authorization::from_roles(
            roles,
            models.iter().map(role::Model::capability_names),
        ))
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> AppResult<()> {
        let result = PersonEntity::update_many()
            .col_expr(person::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(person::Column::ForcePasswordChange, Expr::value(false))
            .col_expr(person::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(person::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_USER_NOT_FOUND));
        }
        Ok(())
    }
}
