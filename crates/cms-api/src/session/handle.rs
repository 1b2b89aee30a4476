//! Session handle given to handlers.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tokio::sync::Mutex;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{SessionCache, SessionData};

use super::SessionDataStore;

/// Cookie change the session layer must send with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CookieChange {
    None,
    Issue(String),
    Remove,
}

struct SessionState {
    id: Option<String>,
    data: SessionData,
    /// Id was minted during this request
    issued: bool,
    destroyed: bool,
}

/// The current request's session.
///
/// Mutations stay local until [`Session::save`]; [`Session::destroy`] drops
/// the stored entry. Clones share the same state.
#[derive(Clone)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    store: Arc<dyn SessionDataStore>,
    ttl_seconds: u64,
}

impl Session {
    pub(crate) fn new(
        id: Option<String>,
        data: SessionData,
        store: Arc<dyn SessionDataStore>,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                id,
                data,
                issued: false,
                destroyed: false,
            })),
            store,
            ttl_seconds,
        }
    }

    pub async fn session_token(&self) -> Option<String> {
        self.state.lock().await.data.session_token.clone()
    }

    pub async fn cache(&self) -> Option<SessionCache> {
        self.state.lock().await.data.cache.clone()
    }

    pub async fn set_session_token(&self, session_token: String) {
        self.state.lock().await.data.session_token = Some(session_token);
    }

    pub async fn set_cache(&self, cache: SessionCache) {
        self.state.lock().await.data.cache = Some(cache);
    }

    /// Persist the session, minting an id if it has none yet.
    pub async fn save(&self) -> AppResult<()> {
        let (id, data) = {
            let mut state = self.state.lock().await;
            let id = match &state.id {
                Some(id) => id.clone(),
                None => {
                    let id = Uuid::new_v4().simple().to_string();
                    state.id = Some(id.clone());
                    state.issued = true;
                    id
                }
            };
            state.destroyed = false;
            (id, state.data.clone())
        };

        self.store.save(&id, &data, self.ttl_seconds).await
    }

    /// Clear the session and remove it from the store.
    pub async fn destroy(&self) -> AppResult<()> {
        let id = {
            let mut state = self.state.lock().await;
            state.data = SessionData::default();
            state.destroyed = true;
            state.issued = false;
            state.id.take()
        };

        match id {
            Some(id) => self.store.delete(&id).await,
            None => Ok(()),
        }
    }

    /// Start over under a fresh id.
    ///
    /// The stored entry for the current id is removed and the data cleared;
    /// the next [`Session::save`] mints a new id and issues its cookie.
    pub async fn regenerate(&self) -> AppResult<()> {
        let id = {
            let mut state = self.state.lock().await;
            state.data = SessionData::default();
            state.destroyed = false;
            state.issued = false;
            state.id.take()
        };

        match id {
            Some(id) => self.store.delete(&id).await,
            None => Ok(()),
        }
    }

    pub(crate) async fn cookie_change(&self) -> CookieChange {
        let state = self.state.lock().await;
        match (&state.id, state.issued, state.destroyed) {
            (_, _, true) => CookieChange::Remove,
            (Some(id), true, false) => CookieChange::Issue(id.clone()),
            _ => CookieChange::None,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::internal("Session layer is not installed on this route"))
    }
}
