//! People service - login and password changes.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    normalize_email, LoginOutcome, Password, PasswordUpdate, PersonProfile,
    MSG_INCORRECT_PASSWORD, MSG_INVALID_CREDENTIALS, MSG_USER_NOT_FOUND,
};

use crate::repository::{PeopleRepository, SessionRepository};

/// Verified against when the email is unknown, so a miss costs the same as a
/// wrong password.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("unknown-person-placeholder")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// People service trait for dependency injection.
#[async_trait]
pub trait PeopleService: Send + Sync {
    /// Check credentials and open a new server-side session
    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome>;

    /// Change the password of the session owner and return the refreshed profile
    async fn update_password(&self, update: PasswordUpdate) -> AppResult<PersonProfile>;
}

pub struct PeopleManager {
    people: Arc<dyn PeopleRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl PeopleManager {
    pub fn new(people: Arc<dyn PeopleRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { people, sessions }
    }
}

/// Opaque random session token.
fn generate_session_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[async_trait]
impl PeopleService for PeopleManager {
    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome> {
        let person = self.people.find_by_email(&normalize_email(&email)).await?;

        let stored_hash = person
            .as_ref()
            .map(|p| p.password_hash.as_str())
            .unwrap_or(DUMMY_HASH.as_str());
        let password_valid = Password::from_hash(stored_hash).verify(&password);

        let person = match person {
            Some(person) if password_valid => person,
            _ => {
                debug!("Rejected login attempt");
                return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS));
            }
        };

        let authorization = self.people.authorization(person.roles.clone()).await?;
        let session_token = generate_session_token();
        self.sessions
            .create(person.id, session_token.clone())
            .await?;

        info!(person_id = %person.id, "Person logged in");

        Ok(LoginOutcome {
            session_token,
            user: person.profile(authorization),
        })
    }

    async fn update_password(&self, update: PasswordUpdate) -> AppResult<PersonProfile> {
        let person = self
            .people
            .find_by_session_token(&update.session_token)
            .await?
            .ok_or_not_found(MSG_USER_NOT_FOUND)?;

        if let Some(email) = update.email.as_deref().filter(|e| !e.is_empty()) {
            if normalize_email(email) != normalize_email(&person.email) {
                return Err(AppError::not_found(MSG_USER_NOT_FOUND));
            }
        }

        if !Password::from_hash(person.password_hash.as_str()).verify(&update.old_password) {
            return Err(AppError::unauthorized(MSG_INCORRECT_PASSWORD));
        }

        let new_hash = Password::new(&update.new_password)?.into_string();
        self.people.update_password(person.id, new_hash).await?;

        info!(person_id = %person.id, "Password changed");

        let authorization = self.people.authorization(person.roles.clone()).await?;
        let mut profile = person.profile(authorization);
        profile.force_password_change = false;
        Ok(profile)
    }
}
