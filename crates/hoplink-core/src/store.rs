use crate::error::StoreResult;
use crate::token::ShortToken;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A stored URL mapping.
///
/// The token is the storage key, not a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// The original URL the token redirects to.
    pub target_url: String,
    /// When the store evicts the mapping.
    pub expires_at: Timestamp,
}

/// An expiring key-value store for URL mappings.
///
/// A missing key on `get` is distinguishable from a backend failure
/// (`Ok(None)` vs `Err`). Expiry is owned by the store: entries must
/// become unreadable once `ttl` elapses, without any help from callers.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Stores a mapping under the token with the given time-to-live,
    /// replacing any existing value.
    async fn set(&self, token: &ShortToken, mapping: Mapping, ttl: Duration) -> StoreResult<()>;

    /// Retrieves the mapping for a token.
    ///
    /// Returns `Ok(None)` if the key does not exist or has expired.
    async fn get(&self, token: &ShortToken) -> StoreResult<Option<Mapping>>;
}
