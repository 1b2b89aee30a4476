//! In-process session store for development and tests.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::SessionData;

use super::SessionDataStore;

/// Session store kept in memory. Entries are lost on restart.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, (SessionData, Instant)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionDataStore for MemorySessionStore {
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(id)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(data, _)| data.clone()))
    }

    async fn save(&self, id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        entries.insert(
            id.to_string(),
            (data.clone(), now + Duration::from_secs(ttl_seconds)),
        );
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.entries.write().await.remove(id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
