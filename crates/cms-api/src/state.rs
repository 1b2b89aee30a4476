//! Application state for dependency injection.

use std::sync::Arc;

use people_service_lib::service::{EntityService, PeopleService, SessionService};

use crate::config::ApiConfig;
use crate::session::SessionDataStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PeopleService>,
    pub sessions: Arc<dyn SessionService>,
    pub entities: Arc<dyn EntityService>,
    pub session_store: Arc<dyn SessionDataStore>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        people: Arc<dyn PeopleService>,
        sessions: Arc<dyn SessionService>,
        entities: Arc<dyn EntityService>,
        session_store: Arc<dyn SessionDataStore>,
        config: ApiConfig,
    ) -> Self {
        Self {
            people,
            sessions,
            entities,
            session_store,
            config,
        }
    }
}
