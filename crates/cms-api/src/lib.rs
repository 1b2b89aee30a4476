//! CMS admin API.
//!
//! HTTP endpoints for signing in and out, changing passwords and reading the
//! content model, plus server-side renderers for shared admin UI pieces.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod permissions;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use common::SessionBackend;
use people_service_lib::infra::Database;
use people_service_lib::repository::{EntityTypeStore, PeopleStore, SessionStore};
use people_service_lib::service::{EntityManager, PeopleManager, SessionManager};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::session::{MemorySessionStore, RedisSessionStore, SessionDataStore};
use crate::state::AppState;

/// Connect storage, wire services and serve HTTP until shutdown.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Database and services
    let db = Database::connect(&config.database.url).await?;
    let conn = db.get_connection();

    let session_repo = Arc::new(SessionStore::new(conn.clone()));
    let people = Arc::new(PeopleManager::new(
        Arc::new(PeopleStore::new(conn.clone())),
        session_repo.clone(),
    ));
    let sessions = Arc::new(SessionManager::new(session_repo));
    let entities = Arc::new(EntityManager::new(Arc::new(EntityTypeStore::new(conn))));

    // Session store
    let session_store: Arc<dyn SessionDataStore> = match config.session.backend {
        SessionBackend::Redis => Arc::new(RedisSessionStore::connect(&config.session.redis_url).await?),
        SessionBackend::Memory => {
            warn!("Using in-memory session store; sessions will not survive a restart");
            Arc::new(MemorySessionStore::new())
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(people, sessions, entities, session_store, config);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!("CMS API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
