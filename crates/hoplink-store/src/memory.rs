use async_trait::async_trait;
use dashmap::DashMap;
use hoplink_core::error::StoreResult;
use hoplink_core::{KvStore, Mapping, ShortToken, StoreError};
use jiff::{SignedDuration, Timestamp};
use std::sync::Arc;
use std::time::Duration;

/// In-memory storage entry for a URL mapping.
#[derive(Debug, Clone)]
struct Entry {
    mapping: Mapping,
    evict_at: Timestamp,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Timestamp::now() >= self.evict_at
    }
}

/// In-memory implementation of [`KvStore`] using DashMap.
///
/// Expiry is emulated lazily: expired entries are dropped on read, so the
/// observable contract matches Redis' `SET ... EX`. DashMap's sharded
/// locks allow concurrent reads and writes to different buckets without
/// blocking. Clones share the same underlying map, like handles to a
/// single external store.
#[derive(Debug, Clone)]
pub struct InMemoryKvStore {
    storage: Arc<DashMap<String, Entry>>,
}

impl InMemoryKvStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }

    /// Returns the number of entries, including any not yet evicted.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn set(&self, token: &ShortToken, mapping: Mapping, ttl: Duration) -> StoreResult<()> {
        let ttl = SignedDuration::try_from(ttl)
            .map_err(|e| StoreError::Operation(format!("invalid ttl: {e}")))?;
        let entry = Entry {
            mapping,
            evict_at: Timestamp::now() + ttl,
        };
        self.storage.insert(token.as_str().to_owned(), entry);
        Ok(())
    }

    async fn get(&self, token: &ShortToken) -> StoreResult<Option<Mapping>> {
        let key = token.as_str();
        match self.storage.get(key) {
            Some(entry) if entry.is_expired() => {
                // Lazy eviction on read, like Redis' own expiry.
                drop(entry);
                self.storage.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.mapping.clone())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn token(s: &str) -> ShortToken {
        ShortToken::new_unchecked(s)
    }

    fn mapping(url: &str, ttl: Duration) -> Mapping {
        Mapping {
            target_url: url.to_string(),
            expires_at: Timestamp::now() + SignedDuration::try_from(ttl).unwrap(),
        }
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = InMemoryKvStore::new();
        let t = token("bf705e83");

        store
            .set(&t, mapping("https://example.com/page", DAY), DAY)
            .await
            .unwrap();

        let got = store.get(&t).await.unwrap().unwrap();
        assert_eq!(got.target_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn get_missing_key() {
        let store = InMemoryKvStore::new();
        let got = store.get(&token("deadbeef")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn expired_entry_is_gone() {
        let store = InMemoryKvStore::new();
        let t = token("bf705e83");

        store
            .set(
                &t,
                mapping("https://example.com/page", Duration::ZERO),
                Duration::ZERO,
            )
            .await
            .unwrap();

        let got = store.get(&t).await.unwrap();
        assert!(got.is_none());
        // The expired entry was evicted, not just hidden.
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn later_write_overwrites() {
        let store = InMemoryKvStore::new();
        let t = token("bf705e83");

        store
            .set(&t, mapping("https://one.example", DAY), DAY)
            .await
            .unwrap();
        store
            .set(&t, mapping("https://two.example", DAY), DAY)
            .await
            .unwrap();

        let got = store.get(&t).await.unwrap().unwrap();
        assert_eq!(got.target_url, "https://two.example");
        assert_eq!(store.len(), 1);
    }
}
