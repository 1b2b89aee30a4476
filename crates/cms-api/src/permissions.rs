//! Permission assertions against the current session.

use common::{AppError, AppResult};
use domain::{MSG_LOGIN_REQUIRED, MSG_MISSING_CAPABILITY};
use people_service_lib::service::SessionService;

use crate::session::Session;

/// What the caller must satisfy.
#[derive(Debug, Clone, Default)]
pub struct Requirements {
    pub logged_in: bool,
    pub capabilities: Vec<String>,
}

impl Requirements {
    pub fn logged_in() -> Self {
        Self {
            logged_in: true,
            capabilities: Vec::new(),
        }
    }

    /// Also require a capability (implies being logged in).
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }
}

/// The session token, if the session carries one.
pub async fn assert_logged_in(session: &Session) -> AppResult<String> {
    session
        .session_token()
        .await
        .ok_or_else(|| AppError::unauthorized(MSG_LOGIN_REQUIRED))
}

/// Check the session against `requirements`.
///
/// A login requirement also checks that the session has not been ended
/// server-side; the verified token is returned in that case. Capabilities
/// are read from the session cache, which only holds them once any forced
/// password change is done.
pub async fn assert(
    requirements: &Requirements,
    session: &Session,
    sessions: &dyn SessionService,
) -> AppResult<Option<String>> {
    let mut session_token = None;
    if requirements.logged_in || !requirements.capabilities.is_empty() {
        let token = assert_logged_in(session).await?;
        if !sessions.is_active(&token).await? {
            return Err(AppError::unauthorized(MSG_LOGIN_REQUIRED));
        }
        session_token = Some(token);
    }

    if !requirements.capabilities.is_empty() {
        let cache = session.cache().await;
        let granted = requirements.capabilities.iter().all(|capability| {
            cache
                .as_ref()
                .is_some_and(|cache| cache.has_capability(capability))
        });
        if !granted {
            return Err(AppError::unauthorized(MSG_MISSING_CAPABILITY));
        }
    }

    Ok(session_token)
}
