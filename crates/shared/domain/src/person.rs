//! Person domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical form of an email address for lookups and comparisons.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A person who can sign in to the CMS admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Set when the person must choose a new password before normal access
    pub force_password_change: bool,
    /// Role names assigned to this person
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Profile view of this person with the given authorization.
    pub fn profile(&self, authorization: Authorization) -> PersonProfile {
        PersonProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            roles: authorization.roles,
            capabilities: authorization.capabilities,
            force_password_change: self.force_password_change,
        }
    }
}

/// Roles and the capabilities they grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub roles: Vec<String>,
    pub capabilities: Vec<String>,
}

impl Authorization {
    /// Build from role names and each role's capabilities.
    ///
    /// Capabilities are de-duplicated and sorted.
    pub fn from_roles<I, C>(roles: Vec<String>, capabilities: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = String>,
    {
        let mut capabilities: Vec<String> = capabilities.into_iter().flatten().collect();
        capabilities.sort();
        capabilities.dedup();
        Self {
            roles,
            capabilities,
        }
    }
}

/// User-facing fields returned by login and password change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
    pub capabilities: Vec<String>,
    pub force_password_change: bool,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Opaque server-side session token
    pub session_token: String,
    pub user: PersonProfile,
}

/// Password change request passed to the people service.
#[derive(Debug, Clone)]
pub struct PasswordUpdate {
    /// When present, must match the session owner's email
    pub email: Option<String>,
    pub session_token: String,
    pub old_password: String,
    pub new_password: String,
}
