//! Redis-backed session store.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisError};
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::SessionData;

use super::SessionDataStore;

/// Cache key prefix for session data
const KEY_PREFIX_SESSION: &str = "session:";

/// Session store on a shared Redis connection.
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    /// Connect to Redis.
    pub async fn connect(url: &str) -> Result<Self, RedisError> {
        debug!("Connecting to Redis at {}", url);
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    fn key(id: &str) -> String {
        format!("{}{}", KEY_PREFIX_SESSION, id)
    }
}

#[async_trait]
impl SessionDataStore for RedisSessionStore {
    async fn load(&self, id: &str) -> AppResult<Option<SessionData>> {
        let mut conn = self.conn.clone();
        let result: Option<String> = conn.get(Self::key(id)).await.map_err(|e| {
            warn!("Redis get error for session: {}", e);
            AppError::from(e)
        })?;

        match result {
            Some(json) => match serde_json::from_str(&json) {
                Ok(data) => Ok(Some(data)),
                Err(e) => {
                    // Unreadable entries start a fresh session
                    warn!("Failed to deserialize session data: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn save(&self, id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(data)
            .map_err(|e| AppError::internal(format!("Serialization error: {}", e)))?;
        conn.set_ex::<_, _, ()>(Self::key(id), json, ttl_seconds)
            .await
            .map_err(|e| {
                warn!("Redis set error for session: {}", e);
                AppError::from(e)
            })
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(id)).await.map_err(|e| {
            warn!("Redis delete error for session: {}", e);
            AppError::from(e)
        })
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
