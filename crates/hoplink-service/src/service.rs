use async_trait::async_trait;
use hoplink_core::{KvStore, LinkService, Mapping, ServiceError, ShortToken, StoreError};
use hoplink_hasher::TokenHasher;
use jiff::{SignedDuration, Timestamp};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, ServiceError>;

/// How long a stored mapping lives before the store evicts it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Tunables for [`RedirectService`].
///
/// Production uses the defaults; tests shorten the TTL to exercise
/// expiry without waiting a day.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedirectSettings {
    /// Time-to-live applied to every stored mapping.
    #[builder(default = DEFAULT_TTL)]
    pub ttl: Duration,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the [`LinkService`] trait.
///
/// Wraps a [`KvStore`] and a [`TokenHasher`]. Each request is a single
/// independent round-trip against the store; there is no shared mutable
/// state here beyond the store handle itself.
///
/// Tokens are truncated digests, so two different URLs can hash to the
/// same token. No collision check is performed: the later shorten
/// silently overwrites the earlier mapping. Shortening the same URL
/// twice is idempotent apart from refreshing the TTL.
#[derive(Debug, Clone)]
pub struct RedirectService<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
    settings: RedirectSettings,
}

impl<S: KvStore, H: TokenHasher> RedirectService<S, H> {
    /// Creates a new `RedirectService` with the default settings.
    pub fn new(store: S, hasher: H) -> Self {
        Self::with_settings(store, hasher, RedirectSettings::default())
    }

    /// Creates a new `RedirectService` with custom settings.
    pub fn with_settings(store: S, hasher: H, settings: RedirectSettings) -> Self {
        Self {
            store: Arc::new(store),
            hasher: Arc::new(hasher),
            settings,
        }
    }

    fn expires_at(&self) -> Result<Timestamp> {
        let ttl = SignedDuration::try_from(self.settings.ttl)
            .map_err(|e| StoreError::Operation(format!("invalid ttl: {e}")))?;
        Ok(Timestamp::now() + ttl)
    }
}

#[async_trait]
impl<S: KvStore, H: TokenHasher> LinkService for RedirectService<S, H> {
    async fn shorten(&self, url: &str) -> Result<ShortToken> {
        // Validate before touching the store.
        if url.is_empty() {
            return Err(ServiceError::EmptyUrl);
        }

        let token = self.hasher.token_for(url);
        let mapping = Mapping {
            target_url: url.to_owned(),
            expires_at: self.expires_at()?,
        };

        self.store.set(&token, mapping, self.settings.ttl).await?;

        debug!(url = %url, token = %token, "stored mapping");
        Ok(token)
    }

    async fn resolve(&self, token: &ShortToken) -> Result<Option<Mapping>> {
        trace!(token = %token, "resolving token");

        match self.store.get(token).await? {
            Some(mapping) => {
                debug!(token = %token, url = %mapping.target_url, "resolved token");
                Ok(Some(mapping))
            }
            None => {
                trace!(token = %token, "token not found");
                Ok(None)
            }
        }
    }
}
