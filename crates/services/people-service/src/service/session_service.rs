//! Session service - server-side session lifecycle.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use common::AppResult;

use crate::repository::SessionRepository;

#[async_trait]
pub trait SessionService: Send + Sync {
    /// End a session server-side. Ending an already ended session is a no-op.
    async fn logout(&self, session_token: &str) -> AppResult<()>;

    /// Whether the token belongs to a session that has not been logged out
    async fn is_active(&self, session_token: &str) -> AppResult<bool>;
}

pub struct SessionManager {
    repo: Arc<dyn SessionRepository>,
}

impl SessionManager {
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SessionService for SessionManager {
    async fn logout(&self, session_token: &str) -> AppResult<()> {
        if !self.repo.invalidate(session_token).await? {
            debug!("Logout for a session that was not active");
        }
        Ok(())
    }

    async fn is_active(&self, session_token: &str) -> AppResult<bool> {
        self.repo.is_active(session_token).await
    }
}
