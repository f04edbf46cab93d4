use async_trait::async_trait;
use hoplink_core::error::StoreResult;
use hoplink_core::{KvStore, Mapping, ShortToken, StoreError};
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A Redis-backed implementation of [`KvStore`].
///
/// Mappings are stored as JSON strings under a configurable key prefix.
/// Expiry is owned by Redis: writes go through `SET ... EX`, so entries
/// vanish on their own once the TTL elapses.
#[derive(Debug, Clone)]
pub struct RedisKvStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisKvStore {
    /// Creates a new Redis store.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: "hop:url:".to_string(),
        }
    }

    /// Creates a new Redis store with a custom key prefix.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed Redis connection
    /// * `key_prefix` - Custom prefix for storage keys (e.g., "myapp:url:")
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Connects to Redis and creates a store with the default key prefix.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::Initialization(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Unavailable(format!("failed to connect to redis: {e}")))?;
        Ok(Self::new(conn))
    }

    /// Generates the storage key for a token.
    fn storage_key(&self, token: &ShortToken) -> String {
        format!("{}{}", self.key_prefix, token.as_str())
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn set(&self, token: &ShortToken, mapping: Mapping, ttl: Duration) -> StoreResult<()> {
        let key = self.storage_key(token);
        trace!(token = %token, "Storing mapping in Redis");

        let json = match serde_json::to_string(&mapping) {
            Ok(json) => json,
            Err(e) => {
                warn!(token = %token, error = %e, "Failed to serialize mapping");
                return Err(StoreError::Serialization(format!(
                    "failed to serialize mapping: {e}"
                )));
            }
        };

        let mut conn = self.conn.clone();
        match conn.set_ex::<_, _, ()>(&key, json, ttl.as_secs()).await {
            Ok(()) => {
                debug!(token = %token, "Stored mapping in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(token = %token, error = %e, "Failed to store mapping in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn get(&self, token: &ShortToken) -> StoreResult<Option<Mapping>> {
        let key = self.storage_key(token);
        trace!(token = %token, "Fetching mapping from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(stored)) => {
                debug!(token = %token, "Found mapping in Redis");
                match serde_json::from_str::<Mapping>(&stored) {
                    Ok(mapping) => Ok(Some(mapping)),
                    Err(e) => {
                        warn!(token = %token, error = %e, "Failed to deserialize stored mapping");
                        Err(StoreError::InvalidData(format!(
                            "invalid stored value for key '{key}': {e}"
                        )))
                    }
                }
            }
            Ok(None) => {
                trace!(token = %token, "No mapping in Redis");
                Ok(None)
            }
            Err(e) => {
                warn!(token = %token, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }
}
