//! Session data kept in the session store.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENTITY_TYPE, DEFAULT_HOMEPAGE};
use crate::person::PersonProfile;

/// User-facing fields cached in the session.
///
/// `roles` and `capabilities` are present exactly when
/// `force_password_change` is false. Construct with [`SessionCache::for_profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCache {
    pub first_name: String,
    pub last_name: String,
    pub default_entity_type: String,
    pub homepage: String,
    pub force_password_change: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capabilities: Option<Vec<String>>,
}

impl SessionCache {
    /// Build the cache for a signed-in person.
    ///
    /// Roles and capabilities are withheld while a password change is forced,
    /// so protected routes stay closed until the password is changed.
    pub fn for_profile(profile: &PersonProfile) -> Self {
        let (roles, capabilities) = if profile.force_password_change {
            (None, None)
        } else {
            (
                Some(profile.roles.clone()),
                Some(profile.capabilities.clone()),
            )
        };

        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            default_entity_type: DEFAULT_ENTITY_TYPE.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            force_password_change: profile.force_password_change,
            roles,
            capabilities,
        }
    }

    pub fn roles(&self) -> Option<&[String]> {
        self.roles.as_deref()
    }

    pub fn capabilities(&self) -> Option<&[String]> {
        self.capabilities.as_deref()
    }

    /// Whether the cache grants the given capability.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities
            .as_ref()
            .is_some_and(|caps| caps.iter().any(|c| c == capability))
    }
}

/// Everything stored for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<SessionCache>,
}
