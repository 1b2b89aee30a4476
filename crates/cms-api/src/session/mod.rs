//! Per-request sessions backed by a server-side store.
//!
//! The browser holds only a random session id in an HTTP-only cookie. The
//! [`with_session`] middleware loads the matching [`SessionData`] before the
//! handler runs and hands it over as a [`Session`].
//!
//! [`SessionData`]: domain::SessionData

mod handle;
mod layer;
mod memory_store;
mod redis_store;

use async_trait::async_trait;

use common::AppResult;
use domain::SessionData;

pub use handle::Session;
pub use layer::with_session;
pub use memory_store::MemorySessionStore;
pub use redis_store::RedisSessionStore;

/// Storage for session data keyed by session id.
#[async_trait]
pub trait SessionDataStore: Send + Sync {
    /// Load a live (not expired) entry
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>>;

    /// Insert or replace an entry, resetting its lifetime
    async fn save(&self, id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Check the store is reachable
    async fn ping(&self) -> AppResult<()>;
}
